use super::GeoPoint;
use geo::{LineString, Polygon};

/// Full angular width of a typical three-sector site antenna
pub const DEFAULT_BEAMWIDTH_DEGREES: f64 = 120.0;

/// Number of points sampled along the arc
pub const DEFAULT_NUM_SAMPLES: usize = 30;

/// Input parameters for one coverage wedge
#[derive(Debug, Clone, PartialEq)]
pub struct SectorSpec {
    /// BTS position
    pub center: GeoPoint,
    /// Compass bearing of the main lobe, 0 = north, clockwise. Not wrapped.
    pub azimuth_degrees: f64,
    /// Radius of the wedge in kilometers
    pub range_km: f64,
    /// Full angular width of the wedge, centered on the azimuth
    pub beamwidth_degrees: f64,
    /// Arc points to generate (the closing apex is extra)
    pub num_samples: usize,
}

impl SectorSpec {
    pub fn new(center: GeoPoint, azimuth_degrees: f64, range_km: f64) -> Self {
        Self {
            center,
            azimuth_degrees,
            range_km,
            beamwidth_degrees: DEFAULT_BEAMWIDTH_DEGREES,
            num_samples: DEFAULT_NUM_SAMPLES,
        }
    }

    pub fn with_beamwidth(mut self, beamwidth_degrees: f64) -> Self {
        self.beamwidth_degrees = beamwidth_degrees;
        self
    }

    pub fn with_num_samples(mut self, num_samples: usize) -> Self {
        self.num_samples = num_samples;
        self
    }

    /// Bearing of the first arc point (counter-clockwise edge)
    pub fn start_bearing(&self) -> f64 {
        self.azimuth_degrees - self.beamwidth_degrees / 2.0
    }

    /// Bearing of the last arc point (clockwise edge)
    pub fn end_bearing(&self) -> f64 {
        self.azimuth_degrees + self.beamwidth_degrees / 2.0
    }
}

/// Closed wedge boundary: arc points followed by the apex
#[derive(Debug, Clone, PartialEq)]
pub struct SectorPolygon {
    points: Vec<GeoPoint>,
}

impl SectorPolygon {
    /// Build from arc points; the apex is appended as the final vertex
    pub fn from_arc(mut arc: Vec<GeoPoint>, apex: GeoPoint) -> Self {
        arc.push(apex);
        Self { points: arc }
    }

    /// All vertices, apex last
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Vertices along the arc, without the apex
    pub fn arc(&self) -> &[GeoPoint] {
        &self.points[..self.points.len() - 1]
    }

    pub fn apex(&self) -> GeoPoint {
        self.points[self.points.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Never true: a polygon always carries at least its apex
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Every vertex has finite coordinates
    pub fn is_finite(&self) -> bool {
        self.points.iter().all(GeoPoint::is_finite)
    }

    /// `[lat, lon]` pairs in vertex order, as Leaflet expects
    pub fn lat_lon_pairs(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|p| p.to_lat_lon()).collect()
    }

    /// Closed GeoJSON ring in `[lon, lat]` order
    pub fn lon_lat_ring(&self) -> Vec<[f64; 2]> {
        let mut ring: Vec<[f64; 2]> = self.points.iter().map(|p| p.to_lon_lat()).collect();
        if ring.first() != ring.last()
            && let Some(&first) = ring.first()
        {
            ring.push(first);
        }
        ring
    }

    /// Convert to a `geo` polygon (x = lon, y = lat)
    pub fn to_geo(&self) -> Polygon<f64> {
        let exterior: LineString<f64> = self
            .points
            .iter()
            .map(|p| geo::coord! { x: p.lon, y: p.lat })
            .collect();
        Polygon::new(exterior, vec![])
    }
}
