use crate::basemap::BasemapStyle;
use crate::domain::{GeoPoint, SectorPolygon, SectorSpec};
use crate::geometry::{generate_sector, haversine_km};
use geo::ChamberlainDuquetteArea;

pub const DEFAULT_ZOOM: u8 = 13;
pub const DEFAULT_TITLE: &str = "GSM Sector View";
pub const MARKER_TOOLTIP: &str = "BTS";
pub const DEFAULT_COLOR: &str = "blue";

/// Stroke and fill of the sector polygon
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonStyle {
    pub color: String,
    pub fill_color: String,
    pub fill_opacity: f64,
}

impl PolygonStyle {
    /// Same color for stroke and fill, 30% fill opacity
    pub fn solid(color: impl Into<String>) -> Self {
        let color = color.into();
        Self {
            fill_color: color.clone(),
            color,
            fill_opacity: 0.3,
        }
    }
}

impl Default for PolygonStyle {
    fn default() -> Self {
        Self::solid(DEFAULT_COLOR)
    }
}

/// Everything the map page shows for one sector
#[derive(Debug, Clone)]
pub struct MapView {
    pub title: String,
    pub spec: SectorSpec,
    pub polygon: SectorPolygon,
    pub style: BasemapStyle,
    pub zoom: u8,
    pub polygon_style: PolygonStyle,
}

impl MapView {
    /// Generate the sector polygon and wrap it with default presentation
    pub fn new(spec: SectorSpec, style: BasemapStyle) -> Self {
        let polygon = generate_sector(&spec);
        Self {
            title: DEFAULT_TITLE.to_string(),
            spec,
            polygon,
            style,
            zoom: DEFAULT_ZOOM,
            polygon_style: PolygonStyle::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_polygon_style(mut self, polygon_style: PolygonStyle) -> Self {
        self.polygon_style = polygon_style;
        self
    }

    pub fn center(&self) -> GeoPoint {
        self.spec.center
    }

    /// Measured properties of the generated wedge
    pub fn summary(&self) -> SectorSummary {
        let arc = self.polygon.arc();
        let center = self.center();
        let (min_km, max_km) = arc
            .iter()
            .map(|&p| haversine_km(center, p))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), d| {
                (lo.min(d), hi.max(d))
            });
        let (min_km, max_km) = if arc.is_empty() {
            (0.0, 0.0)
        } else {
            (min_km, max_km)
        };

        let area_km2 = if self.polygon.is_finite() {
            self.polygon.to_geo().chamberlain_duquette_unsigned_area() / 1_000_000.0
        } else {
            f64::NAN
        };

        SectorSummary {
            vertices: self.polygon.len(),
            start_bearing: self.spec.start_bearing(),
            end_bearing: self.spec.end_bearing(),
            min_arc_km: min_km,
            max_arc_km: max_km,
            area_km2,
        }
    }
}

/// Great-circle measurements of a generated wedge
#[derive(Debug, Clone, PartialEq)]
pub struct SectorSummary {
    pub vertices: usize,
    pub start_bearing: f64,
    pub end_bearing: f64,
    /// Shortest and longest haversine distance from the BTS to an arc point
    pub min_arc_km: f64,
    pub max_arc_km: f64,
    pub area_km2: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn santarem_view() -> MapView {
        let spec = SectorSpec::new(GeoPoint::new(39.2369, -8.6859), 90.0, 2.0);
        MapView::new(spec, BasemapStyle::Standard)
    }

    #[test]
    fn test_view_defaults() {
        let view = santarem_view();
        assert_eq!(view.zoom, 13);
        assert_eq!(view.title, "GSM Sector View");
        assert_eq!(view.polygon.len(), 31);
        assert_eq!(view.polygon_style.fill_opacity, 0.3);
        assert_eq!(view.center(), GeoPoint::new(39.2369, -8.6859));
    }

    #[test]
    fn test_polygon_style_override() {
        let view = santarem_view().with_polygon_style(PolygonStyle::solid("#ff8800"));
        assert_eq!(view.polygon_style.color, "#ff8800");
        assert_eq!(view.polygon_style.fill_color, "#ff8800");
        assert_eq!(view.polygon_style.fill_opacity, 0.3);
        assert_eq!(PolygonStyle::default().color, "blue");
    }

    #[test]
    fn test_zero_range_summary() {
        let spec = SectorSpec::new(GeoPoint::new(39.2369, -8.6859), 90.0, 0.0);
        let summary = MapView::new(spec, BasemapStyle::Satellite).summary();
        assert!(summary.max_arc_km.abs() < 1e-9);
        assert!(summary.area_km2.abs() < 1e-9);
    }

    #[test]
    fn test_summary() {
        let summary = santarem_view().summary();
        assert_eq!(summary.vertices, 31);
        assert_eq!(summary.start_bearing, 30.0);
        assert_eq!(summary.end_bearing, 150.0);
        assert!(summary.min_arc_km > 1.9 && summary.max_arc_km < 2.1);
        // a 120 degree slice of a 2 km disc is ~4.19 km^2; the chords cut a little off
        assert!(
            summary.area_km2 > 3.9 && summary.area_km2 < 4.4,
            "got {}",
            summary.area_km2
        );
    }
}
