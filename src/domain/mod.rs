pub mod point;
pub mod sector;
pub mod validate;

pub use point::GeoPoint;
pub use sector::{DEFAULT_BEAMWIDTH_DEGREES, DEFAULT_NUM_SAMPLES, SectorPolygon, SectorSpec};
pub use validate::SectorError;
