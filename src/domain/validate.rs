//! Opt-in input checks for [`SectorSpec`]
//!
//! The sector generator accepts anything and lets degenerate inputs flow into
//! a degenerate polygon. Callers that want to refuse such inputs run
//! [`SectorSpec::validate`] first.

use super::SectorSpec;

/// Reasons a sector specification falls outside the supported domain
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SectorError {
    #[error("latitude {0} is outside (-90, 90); longitude scaling is undefined at the poles")]
    InvalidLatitude(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    InvalidLongitude(f64),

    #[error("range {0} km must be a positive number")]
    InvalidRange(f64),

    #[error("beamwidth {0} degrees must be in (0, 360]")]
    InvalidBeamwidth(f64),

    #[error("at least 2 arc samples are needed to draw a wedge, got {0}")]
    InvalidSampleCount(usize),
}

impl SectorSpec {
    /// Check every field, reporting the first violation
    pub fn validate(&self) -> Result<(), SectorError> {
        self.issues().into_iter().next().map_or(Ok(()), Err)
    }

    /// Every violation, in field order
    pub fn issues(&self) -> Vec<SectorError> {
        let mut issues = Vec::new();

        let lat = self.center.lat;
        if !lat.is_finite() || lat <= -90.0 || lat >= 90.0 {
            issues.push(SectorError::InvalidLatitude(lat));
        }

        let lon = self.center.lon;
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            issues.push(SectorError::InvalidLongitude(lon));
        }

        if !self.range_km.is_finite() || self.range_km <= 0.0 {
            issues.push(SectorError::InvalidRange(self.range_km));
        }

        let bw = self.beamwidth_degrees;
        if !bw.is_finite() || bw <= 0.0 || bw > 360.0 {
            issues.push(SectorError::InvalidBeamwidth(bw));
        }

        if self.num_samples < 2 {
            issues.push(SectorError::InvalidSampleCount(self.num_samples));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GeoPoint;

    fn spec(lat: f64, range_km: f64, beamwidth: f64) -> SectorSpec {
        SectorSpec::new(GeoPoint::new(lat, -8.6859), 90.0, range_km).with_beamwidth(beamwidth)
    }

    #[test]
    fn test_valid_spec() {
        assert_eq!(spec(39.2369, 2.0, 120.0).validate(), Ok(()));
        assert_eq!(spec(39.2369, 2.0, 360.0).validate(), Ok(()));
    }

    #[test]
    fn test_pole_rejected() {
        assert_eq!(
            spec(90.0, 2.0, 120.0).validate(),
            Err(SectorError::InvalidLatitude(90.0))
        );
        assert_eq!(
            spec(-90.0, 2.0, 120.0).validate(),
            Err(SectorError::InvalidLatitude(-90.0))
        );
    }

    #[test]
    fn test_range_rejected() {
        assert_eq!(
            spec(0.0, 0.0, 120.0).validate(),
            Err(SectorError::InvalidRange(0.0))
        );
        assert_eq!(
            spec(0.0, -1.5, 120.0).validate(),
            Err(SectorError::InvalidRange(-1.5))
        );
    }

    #[test]
    fn test_beamwidth_rejected() {
        assert_eq!(
            spec(0.0, 1.0, 0.0).validate(),
            Err(SectorError::InvalidBeamwidth(0.0))
        );
        assert_eq!(
            spec(0.0, 1.0, 400.0).validate(),
            Err(SectorError::InvalidBeamwidth(400.0))
        );
    }

    #[test]
    fn test_collects_all_issues() {
        let bad = SectorSpec::new(GeoPoint::new(95.0, 200.0), 0.0, -1.0)
            .with_beamwidth(-10.0)
            .with_num_samples(1);
        assert_eq!(bad.issues().len(), 5);
        assert_eq!(bad.validate(), Err(SectorError::InvalidLatitude(95.0)));
    }

    #[test]
    fn test_error_messages() {
        let msg = SectorError::InvalidRange(-2.0).to_string();
        assert!(msg.contains("-2"));
        assert!(msg.contains("positive"));
    }
}
