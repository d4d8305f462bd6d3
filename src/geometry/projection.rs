use crate::domain::GeoPoint;

/// Kilometers per degree of latitude used by the flat-Earth approximation
pub const KM_PER_DEGREE: f64 = 111.0;

/// Flat-Earth offsets in kilometers from a center point
///
/// Uses the approximation suitable for a single cell's coverage:
/// - dlat = north_km / 111
/// - dlon = east_km / (111 * cos(center_lat))
///
/// Only accurate for short ranges at moderate latitudes. Nothing is corrected
/// near the poles, where cos(lat) goes to 0, or across the anti-meridian.
#[derive(Debug, Clone)]
pub struct FlatEarth {
    center: GeoPoint,
    cos_lat: f64,
}

impl FlatEarth {
    pub fn new(center: GeoPoint) -> Self {
        Self {
            center,
            cos_lat: center.lat.to_radians().cos(),
        }
    }

    /// Point reached by moving `distance_km` along compass `bearing_degrees`
    ///
    /// At the poles the longitude term divides by zero (or by a value within
    /// rounding of it), so the result carries infinite, NaN or enormous
    /// longitudes.
    pub fn destination(&self, bearing_degrees: f64, distance_km: f64) -> GeoPoint {
        let theta = bearing_degrees.to_radians();
        let dlat = (distance_km / KM_PER_DEGREE) * theta.cos();
        let dlon = (distance_km / (KM_PER_DEGREE * self.cos_lat)) * theta.sin();
        GeoPoint::new(self.center.lat + dlat, self.center.lon + dlon)
    }
}
