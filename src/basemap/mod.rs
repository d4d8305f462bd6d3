//! Basemap styles and the tile layers each one puts on the map

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const CARTO_POSITRON_URL: &str = "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png";
const CARTO_ATTRIBUTION: &str = "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a>";

const ESRI_IMAGERY_URL: &str =
    "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}";
const ESRI_IMAGERY_ATTRIBUTION: &str = "Tiles &copy; Esri &mdash; Source: Esri, i-cubed, USDA, USGS, AEX, GeoEye, Getmapping, Aerogrid, IGN, IGP, UPR-EGP, and the GIS User Community";

const ESRI_LABELS_URL: &str = "https://server.arcgisonline.com/ArcGIS/rest/services/Reference/World_Boundaries_and_Places/MapServer/tile/{z}/{y}/{x}";
const ESRI_LABELS_ATTRIBUTION: &str = "Esri";

/// A raster tile source as Leaflet's `L.tileLayer` consumes it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileLayer {
    /// Name shown in the layer control
    pub name: &'static str,
    /// URL template with `{z}`/`{x}`/`{y}` placeholders
    pub url: &'static str,
    pub attribution: &'static str,
    /// Overlays stack on top of the base layer and can be toggled
    pub overlay: bool,
    pub opacity: f64,
}

/// Basemap style offered by the style selector
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum BasemapStyle {
    /// Light vector basemap
    #[default]
    #[serde(alias = "padrao", alias = "Padrão")]
    #[value(alias = "padrao")]
    Standard,
    /// Satellite imagery
    #[serde(alias = "satelite", alias = "Satélite")]
    #[value(alias = "satelite")]
    Satellite,
    /// Satellite imagery with place and boundary labels on top
    #[serde(alias = "hibrido", alias = "Híbrido")]
    #[value(alias = "hibrido")]
    Hybrid,
}

impl BasemapStyle {
    pub fn label(self) -> &'static str {
        match self {
            BasemapStyle::Standard => "Standard",
            BasemapStyle::Satellite => "Satellite",
            BasemapStyle::Hybrid => "Hybrid",
        }
    }

    /// Base layer first, then overlays in stacking order
    pub fn tile_layers(self) -> Vec<TileLayer> {
        match self {
            BasemapStyle::Standard => vec![positron()],
            BasemapStyle::Satellite => vec![world_imagery()],
            BasemapStyle::Hybrid => vec![world_imagery(), place_labels()],
        }
    }

    pub fn base_layer(self) -> TileLayer {
        match self {
            BasemapStyle::Standard => positron(),
            BasemapStyle::Satellite | BasemapStyle::Hybrid => world_imagery(),
        }
    }

    pub fn overlays(self) -> Vec<TileLayer> {
        self.tile_layers().into_iter().filter(|l| l.overlay).collect()
    }
}

fn positron() -> TileLayer {
    TileLayer {
        name: "CartoDB Positron",
        url: CARTO_POSITRON_URL,
        attribution: CARTO_ATTRIBUTION,
        overlay: false,
        opacity: 1.0,
    }
}

fn world_imagery() -> TileLayer {
    TileLayer {
        name: "Esri WorldImagery",
        url: ESRI_IMAGERY_URL,
        attribution: ESRI_IMAGERY_ATTRIBUTION,
        overlay: false,
        opacity: 1.0,
    }
}

fn place_labels() -> TileLayer {
    TileLayer {
        name: "Labels",
        url: ESRI_LABELS_URL,
        attribution: ESRI_LABELS_ATTRIBUTION,
        overlay: true,
        opacity: 0.8,
    }
}

impl fmt::Display for BasemapStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown basemap style {0:?} (expected standard, satellite or hybrid)")]
pub struct UnknownStyle(pub String);

impl FromStr for BasemapStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" | "padrão" | "padrao" => Ok(BasemapStyle::Standard),
            "satellite" | "satélite" | "satelite" => Ok(BasemapStyle::Satellite),
            "hybrid" | "híbrido" | "hibrido" => Ok(BasemapStyle::Hybrid),
            _ => Err(UnknownStyle(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layers() {
        let layers = BasemapStyle::Standard.tile_layers();
        assert_eq!(layers.len(), 1);
        assert!(layers[0].url.contains("light_all"));
        assert!(!layers[0].overlay);
    }

    #[test]
    fn test_satellite_layers() {
        let layers = BasemapStyle::Satellite.tile_layers();
        assert_eq!(layers.len(), 1);
        assert!(layers[0].url.contains("World_Imagery"));
        assert!(BasemapStyle::Satellite.overlays().is_empty());
    }

    #[test]
    fn test_hybrid_layers() {
        let layers = BasemapStyle::Hybrid.tile_layers();
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0], BasemapStyle::Satellite.base_layer());
        assert!(layers[1].overlay);
        assert_eq!(layers[1].name, "Labels");
        assert!(layers[1].url.contains("World_Boundaries_and_Places"));
        assert_eq!(BasemapStyle::Hybrid.overlays().len(), 1);
    }

    #[test]
    fn test_parse_style() {
        assert_eq!("standard".parse::<BasemapStyle>(), Ok(BasemapStyle::Standard));
        assert_eq!("Satellite".parse::<BasemapStyle>(), Ok(BasemapStyle::Satellite));
        assert_eq!(" HYBRID ".parse::<BasemapStyle>(), Ok(BasemapStyle::Hybrid));
        assert_eq!("Padrão".parse::<BasemapStyle>(), Ok(BasemapStyle::Standard));
        assert_eq!("Satélite".parse::<BasemapStyle>(), Ok(BasemapStyle::Satellite));
        assert_eq!("Híbrido".parse::<BasemapStyle>(), Ok(BasemapStyle::Hybrid));
        assert!("terrain".parse::<BasemapStyle>().is_err());
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(BasemapStyle::default(), BasemapStyle::Standard);
    }
}
