pub mod geojson;
pub mod html;
pub mod view;

pub use geojson::feature_collection;
pub use html::render_page;
pub use view::{MapView, PolygonStyle, SectorSummary};

use anyhow::{Context, Result, ensure};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the Leaflet page for a view, returning the number of bytes written
pub fn write_page(path: &Path, view: &MapView) -> Result<usize> {
    let html = render_page(view)?;
    write_text(path, &html)
        .with_context(|| format!("Failed to write map page: {}", path.display()))?;
    Ok(html.len())
}

/// Write the view as a pretty-printed GeoJSON FeatureCollection
///
/// Non-finite coordinates are refused since GeoJSON would carry them as `null`.
pub fn write_geojson(path: &Path, view: &MapView) -> Result<usize> {
    ensure!(
        view.polygon.is_finite(),
        "Sector polygon has non-finite coordinates, not exporting GeoJSON"
    );
    let json = serde_json::to_string_pretty(&feature_collection(view))
        .context("Failed to serialize GeoJSON")?;
    write_text(path, &json)
        .with_context(|| format!("Failed to write GeoJSON file: {}", path.display()))?;
    Ok(json.len())
}

fn write_text(path: &Path, contents: &str) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(contents.as_bytes())?;
    writer.flush()?;
    Ok(())
}
