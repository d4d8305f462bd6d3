//! Interactive session: current inputs plus the view they produce
//!
//! Lifecycle is initialize once, then update on every input change. There is
//! no teardown. The sector generator is called as a plain function on each
//! update and never sees the session.

pub mod input;

pub use input::{InputChange, InputError, MAX_AZIMUTH};

use input::round_to_step;

use crate::basemap::BasemapStyle;
use crate::domain::{DEFAULT_BEAMWIDTH_DEGREES, DEFAULT_NUM_SAMPLES, GeoPoint, SectorSpec};
use crate::render::view::{DEFAULT_COLOR, DEFAULT_TITLE, DEFAULT_ZOOM};
use crate::render::{MapView, PolygonStyle};

/// Default BTS location (Santarém, Portugal)
pub const DEFAULT_LAT: f64 = 39.2369;
pub const DEFAULT_LON: f64 = -8.6859;
pub const DEFAULT_AZIMUTH: u16 = 90;
pub const DEFAULT_RANGE_KM: f64 = 2.0;

/// The five user-editable fields plus fixed presentation settings
#[derive(Debug, Clone, PartialEq)]
pub struct SectorInputs {
    pub lat: f64,
    pub lon: f64,
    pub azimuth: u16,
    pub range_km: f64,
    pub style: BasemapStyle,
    pub beamwidth_degrees: f64,
    pub num_samples: usize,
    pub zoom: u8,
    pub title: String,
    /// Stroke and fill color of the sector
    pub color: String,
}

impl Default for SectorInputs {
    fn default() -> Self {
        Self {
            lat: DEFAULT_LAT,
            lon: DEFAULT_LON,
            azimuth: DEFAULT_AZIMUTH,
            range_km: DEFAULT_RANGE_KM,
            style: BasemapStyle::default(),
            beamwidth_degrees: DEFAULT_BEAMWIDTH_DEGREES,
            num_samples: DEFAULT_NUM_SAMPLES,
            zoom: DEFAULT_ZOOM,
            title: DEFAULT_TITLE.to_string(),
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

impl SectorInputs {
    /// Snap azimuth and range to what the input widgets can produce
    pub fn normalized(mut self) -> Self {
        self.azimuth = self.azimuth.min(MAX_AZIMUTH);
        self.range_km = round_to_step(self.range_km);
        self
    }

    pub fn spec(&self) -> SectorSpec {
        SectorSpec::new(
            GeoPoint::new(self.lat, self.lon),
            self.azimuth as f64,
            self.range_km,
        )
        .with_beamwidth(self.beamwidth_degrees)
        .with_num_samples(self.num_samples)
    }

    pub fn apply(&mut self, change: &InputChange) {
        match *change {
            InputChange::Latitude(lat) => self.lat = lat,
            InputChange::Longitude(lon) => self.lon = lon,
            InputChange::Azimuth(az) => self.azimuth = az.min(MAX_AZIMUTH),
            InputChange::Range(km) => self.range_km = round_to_step(km),
            InputChange::Style(style) => self.style = style,
        }
    }

    fn view(&self) -> MapView {
        MapView::new(self.spec(), self.style)
            .with_zoom(self.zoom)
            .with_title(self.title.clone())
            .with_polygon_style(PolygonStyle::solid(self.color.as_str()))
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    inputs: SectorInputs,
    view: MapView,
    updates: usize,
}

impl Session {
    /// Compute the first view from the initial inputs
    pub fn initialize(inputs: SectorInputs) -> Self {
        let inputs = inputs.normalized();
        let view = inputs.view();
        Self {
            inputs,
            view,
            updates: 0,
        }
    }

    /// Apply one field change and recompute the view
    pub fn update(&mut self, change: &InputChange) -> &MapView {
        self.inputs.apply(change);
        self.view = self.inputs.view();
        self.updates += 1;
        &self.view
    }

    pub fn inputs(&self) -> &SectorInputs {
        &self.inputs
    }

    pub fn view(&self) -> &MapView {
        &self.view
    }

    /// Number of updates applied since initialization
    pub fn updates(&self) -> usize {
        self.updates
    }
}
