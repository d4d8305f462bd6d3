pub mod distance;
pub mod projection;
pub mod sector;

pub use distance::haversine_km;
pub use projection::{FlatEarth, KM_PER_DEGREE};
pub use sector::{generate_sector, linspace};
