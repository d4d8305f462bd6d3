use crate::domain::GeoPoint;
use geo::{Distance, Haversine};

/// Great-circle distance in kilometers
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    Haversine::distance(geo::Point::from(a), geo::Point::from(b)) / 1000.0
}
