use crate::basemap::{BasemapStyle, UnknownStyle};
use std::str::FromStr;

/// Largest value the azimuth slider reaches
pub const MAX_AZIMUTH: u16 = 360;

/// One edited input field
#[derive(Debug, Clone, PartialEq)]
pub enum InputChange {
    Latitude(f64),
    Longitude(f64),
    /// Whole degrees, clamped to the slider's 0..=360
    Azimuth(u16),
    /// Kilometers, rounded to the field's 0.1 step
    Range(f64),
    Style(BasemapStyle),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("empty input")]
    Empty,

    #[error("unknown field {0:?} (expected lat, lon, azimuth, range or style)")]
    UnknownField(String),

    #[error("missing value for {0}")]
    MissingValue(&'static str),

    #[error("invalid number {value:?} for {field}")]
    InvalidNumber { field: &'static str, value: String },

    #[error(transparent)]
    Style(#[from] UnknownStyle),
}

impl InputChange {
    /// Azimuth as the slider delivers it: rounded and clamped to 0..=360
    pub fn azimuth(degrees: f64) -> Self {
        let clamped = degrees.round().clamp(0.0, MAX_AZIMUTH as f64);
        InputChange::Azimuth(clamped as u16)
    }

    /// Range as the number field delivers it: one decimal place
    pub fn range(km: f64) -> Self {
        InputChange::Range(round_to_step(km))
    }
}

pub(crate) fn round_to_step(km: f64) -> f64 {
    (km * 10.0).round() / 10.0
}

fn parse_number(field: &'static str, value: &str) -> Result<f64, InputError> {
    let parsed: f64 = value.parse().map_err(|_| InputError::InvalidNumber {
        field,
        value: value.to_string(),
    })?;
    if !parsed.is_finite() {
        return Err(InputError::InvalidNumber {
            field,
            value: value.to_string(),
        });
    }
    Ok(parsed)
}

impl FromStr for InputChange {
    type Err = InputError;

    /// Parse a `<field> <value>` line, e.g. `azimuth 120` or `style hybrid`
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(InputError::Empty);
        }

        let (field, value) = match line.split_once(char::is_whitespace) {
            Some((f, v)) => (f, v.trim()),
            None => (line, ""),
        };

        let field_name: &'static str = match field.to_lowercase().as_str() {
            "lat" | "latitude" => "lat",
            "lon" | "lng" | "longitude" => "lon",
            "azimuth" | "az" => "azimuth",
            "range" => "range",
            "style" | "basemap" => "style",
            _ => return Err(InputError::UnknownField(field.to_string())),
        };

        if value.is_empty() {
            return Err(InputError::MissingValue(field_name));
        }

        match field_name {
            "lat" => Ok(InputChange::Latitude(parse_number(field_name, value)?)),
            "lon" => Ok(InputChange::Longitude(parse_number(field_name, value)?)),
            "azimuth" => Ok(InputChange::azimuth(parse_number(field_name, value)?)),
            "range" => Ok(InputChange::range(parse_number(field_name, value)?)),
            _ => Ok(InputChange::Style(value.parse()?)),
        }
    }
}
