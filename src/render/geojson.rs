use super::MapView;
use serde_json::{Value, json};

/// GeoJSON FeatureCollection with the BTS point and the sector polygon
///
/// Positions are `[lon, lat]` as RFC 7946 requires.
pub fn feature_collection(view: &MapView) -> Value {
    let spec = &view.spec;

    let bts = json!({
        "type": "Feature",
        "geometry": {
            "type": "Point",
            "coordinates": view.center().to_lon_lat(),
        },
        "properties": {
            "role": "bts",
            "name": super::view::MARKER_TOOLTIP,
        },
    });

    let sector = json!({
        "type": "Feature",
        "geometry": {
            "type": "Polygon",
            "coordinates": [view.polygon.lon_lat_ring()],
        },
        "properties": {
            "role": "sector",
            "azimuth_degrees": spec.azimuth_degrees,
            "range_km": spec.range_km,
            "beamwidth_degrees": spec.beamwidth_degrees,
            "num_samples": spec.num_samples,
            "basemap": view.style.label(),
        },
    });

    json!({
        "type": "FeatureCollection",
        "features": [bts, sector],
    })
}
