use super::MapView;
use crate::basemap::TileLayer;
use anyhow::{Context, Result, ensure};
use serde::Serialize;

const LEAFLET_VERSION: &str = "1.9.4";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>__TITLE__</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@__LEAFLET__/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@__LEAFLET__/dist/leaflet.js"></script>
<style>
  html, body { height: 100%; margin: 0; }
  #map { height: 100%; width: 100%; }
</style>
</head>
<body>
<div id="map"></div>
<script>
const view = __DATA__;
const map = L.map("map").setView(view.center, view.zoom);
const base = L.tileLayer(view.base.url, {
  attribution: view.base.attribution,
  opacity: view.base.opacity,
  maxZoom: 19,
  subdomains: "abcd",
}).addTo(map);
const baseLayers = { [view.base.name]: base };
const overlays = {};
for (const layer of view.overlays) {
  overlays[layer.name] = L.tileLayer(layer.url, {
    attribution: layer.attribution,
    opacity: layer.opacity,
    maxZoom: 19,
  }).addTo(map);
}
L.marker(view.center).bindTooltip(view.tooltip).addTo(map);
L.polygon(view.polygon, {
  color: view.style.color,
  fill: true,
  fillColor: view.style.fill_color,
  fillOpacity: view.style.fill_opacity,
}).addTo(map);
L.control.layers(baseLayers, overlays).addTo(map);
</script>
</body>
</html>
"#;

#[derive(Serialize)]
struct PageData<'a> {
    center: [f64; 2],
    zoom: u8,
    tooltip: &'a str,
    polygon: Vec<[f64; 2]>,
    base: TileLayer,
    overlays: Vec<TileLayer>,
    style: PolygonStyleData<'a>,
}

#[derive(Serialize)]
struct PolygonStyleData<'a> {
    color: &'a str,
    fill_color: &'a str,
    fill_opacity: f64,
}

/// Render a self-contained Leaflet page for the view
///
/// Leaflet itself loads from a CDN; the sector and tile configuration are
/// embedded as JSON. Fails when the polygon has non-finite coordinates, which
/// JSON can only carry as `null` and Leaflet cannot draw.
pub fn render_page(view: &MapView) -> Result<String> {
    ensure!(
        view.polygon.is_finite(),
        "Sector polygon has non-finite coordinates (latitude {} is too close to a pole)",
        view.center().lat
    );

    let data = PageData {
        center: view.center().to_lat_lon(),
        zoom: view.zoom,
        tooltip: super::view::MARKER_TOOLTIP,
        polygon: view.polygon.lat_lon_pairs(),
        base: view.style.base_layer(),
        overlays: view.style.overlays(),
        style: PolygonStyleData {
            color: &view.polygon_style.color,
            fill_color: &view.polygon_style.fill_color,
            fill_opacity: view.polygon_style.fill_opacity,
        },
    };

    let json = script_json(&data).context("Failed to serialize map data")?;
    Ok(PAGE_TEMPLATE
        .replace("__TITLE__", &escape_html(&view.title))
        .replace("__LEAFLET__", LEAFLET_VERSION)
        .replace("__DATA__", &json))
}

/// JSON safe to inline inside a `<script>` element
fn script_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let json = serde_json::to_string(value)?;
    Ok(json.replace("</", "<\\/"))
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
