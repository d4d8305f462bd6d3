use serde::Deserialize;
use std::path::PathBuf;

use crate::basemap::BasemapStyle;
use crate::domain::{DEFAULT_BEAMWIDTH_DEGREES, DEFAULT_NUM_SAMPLES};
use crate::render::view::{DEFAULT_COLOR, DEFAULT_TITLE, DEFAULT_ZOOM};
use crate::session::{DEFAULT_AZIMUTH, DEFAULT_LAT, DEFAULT_LON, DEFAULT_RANGE_KM, SectorInputs};

pub const DEFAULT_OUTPUT: &str = "gsm_sector.html";

fn default_lat() -> f64 {
    DEFAULT_LAT
}
fn default_lon() -> f64 {
    DEFAULT_LON
}
fn default_azimuth() -> u16 {
    DEFAULT_AZIMUTH
}
fn default_range() -> f64 {
    DEFAULT_RANGE_KM
}
fn default_beamwidth() -> f64 {
    DEFAULT_BEAMWIDTH_DEGREES
}
fn default_samples() -> usize {
    DEFAULT_NUM_SAMPLES
}
fn default_zoom() -> u8 {
    DEFAULT_ZOOM
}
fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}
fn default_verbose() -> bool {
    false
}

#[derive(Debug, Deserialize)]
pub struct FileConfig {
    #[serde(default = "default_lat")]
    pub lat: f64,
    #[serde(default = "default_lon")]
    pub lon: f64,
    #[serde(default = "default_azimuth")]
    pub azimuth: u16,
    #[serde(default = "default_range")]
    pub range: f64,
    #[serde(default = "default_beamwidth")]
    pub beamwidth: f64,
    #[serde(default = "default_samples")]
    pub samples: usize,
    #[serde(default)]
    pub style: BasemapStyle,
    #[serde(default = "default_zoom")]
    pub zoom: u8,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub geojson: Option<PathBuf>,
    #[serde(default)]
    pub strict: bool,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            lat: default_lat(),
            lon: default_lon(),
            azimuth: default_azimuth(),
            range: default_range(),
            beamwidth: default_beamwidth(),
            samples: default_samples(),
            style: BasemapStyle::default(),
            zoom: default_zoom(),
            title: None,
            color: default_color(),
            output: None,
            geojson: None,
            strict: false,
            verbose: default_verbose(),
        }
    }
}

impl FileConfig {
    /// First config file found on the search path, if any parses
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    /// Session inputs described by this file, snapped like widget input
    pub fn to_inputs(&self) -> SectorInputs {
        SectorInputs {
            lat: self.lat,
            lon: self.lon,
            azimuth: self.azimuth,
            range_km: self.range,
            style: self.style,
            beamwidth_degrees: self.beamwidth,
            num_samples: self.samples,
            zoom: self.zoom,
            title: self.title().to_string(),
            color: self.color.clone(),
        }
        .normalized()
    }

    pub fn output(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("gsmview.toml"));
    paths.push(PathBuf::from(".gsmview.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("gsmview").join("config.toml"));
        paths.push(config_dir.join("gsmview.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".gsmview.toml"));
    }

    paths
}
