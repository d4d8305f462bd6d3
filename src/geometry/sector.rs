use super::FlatEarth;
use crate::domain::{GeoPoint, SectorPolygon, SectorSpec};

/// `n` evenly spaced values from `start` to `end`, both endpoints included
///
/// A single sample yields `start`; zero samples yield nothing.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Generate the coverage wedge for a sector
///
/// Samples `num_samples` bearings across
/// `[azimuth - beamwidth/2, azimuth + beamwidth/2]`, moves `range_km` from the
/// center along each one using the flat-Earth approximation, then closes the
/// shape with the center itself.
///
/// No input is rejected. Zero or negative ranges collapse or invert the wedge,
/// beamwidths of 360 or more overlap themselves, and a center on a pole yields
/// non-finite longitudes. See [`SectorSpec::validate`] for opt-in checks.
pub fn generate_sector(spec: &SectorSpec) -> SectorPolygon {
    let flat = FlatEarth::new(spec.center);

    let arc: Vec<GeoPoint> = linspace(spec.start_bearing(), spec.end_bearing(), spec.num_samples)
        .into_iter()
        .map(|bearing| flat.destination(bearing, spec.range_km))
        .collect();

    SectorPolygon::from_arc(arc, spec.center)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::haversine_km;

    const SANTAREM: GeoPoint = GeoPoint {
        lat: 39.2369,
        lon: -8.6859,
    };

    fn assert_close(a: GeoPoint, b: GeoPoint, tol: f64) {
        assert!(
            (a.lat - b.lat).abs() < tol && (a.lon - b.lon).abs() < tol,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn test_linspace_endpoints() {
        let v = linspace(30.0, 150.0, 30);
        assert_eq!(v.len(), 30);
        assert_eq!(v[0], 30.0);
        assert_eq!(v[29], 150.0);
        assert!((v[1] - (30.0 + 120.0 / 29.0)).abs() < 1e-12);
    }

    #[test]
    fn test_linspace_small_counts() {
        assert!(linspace(0.0, 10.0, 0).is_empty());
        assert_eq!(linspace(0.0, 10.0, 1), vec![0.0]);
        assert_eq!(linspace(0.0, 10.0, 2), vec![0.0, 10.0]);
    }

    #[test]
    fn test_point_count() {
        let spec = SectorSpec::new(SANTAREM, 90.0, 2.0);
        assert_eq!(generate_sector(&spec).len(), 31);

        let spec = spec.with_num_samples(72);
        assert_eq!(generate_sector(&spec).len(), 73);
    }

    #[test]
    fn test_closure_is_exact() {
        let spec = SectorSpec::new(SANTAREM, 217.0, 5.3);
        let poly = generate_sector(&spec);
        assert_eq!(poly.apex(), SANTAREM);
        assert_eq!(*poly.points().last().unwrap(), SANTAREM);
    }

    #[test]
    fn test_symmetric_edges_at_range() {
        let range = 2.0;
        let spec = SectorSpec::new(SANTAREM, 90.0, range);
        let poly = generate_sector(&spec);
        let first = poly.arc()[0];
        let last = poly.arc()[poly.arc().len() - 1];

        let d_first = haversine_km(SANTAREM, first);
        let d_last = haversine_km(SANTAREM, last);
        // the sphere breaks the mirror symmetry only by meridian convergence
        assert!((d_first - d_last).abs() < 1e-3);
        // flat-Earth error stays well under 1% at this range
        assert!((d_first - range).abs() < 0.02 * range, "got {d_first}");

        // 30 and 150 degrees mirror each other across the east-west line
        assert!(((first.lat - SANTAREM.lat) + (last.lat - SANTAREM.lat)).abs() < 1e-12);
        assert!((first.lon - last.lon).abs() < 1e-12);
    }

    #[test]
    fn test_zero_range_collapses_to_center() {
        let spec = SectorSpec::new(SANTAREM, 90.0, 0.0);
        let poly = generate_sector(&spec);
        for p in poly.arc() {
            assert_close(*p, SANTAREM, 1e-12);
        }
    }

    #[test]
    fn test_azimuth_periodicity() {
        let a = generate_sector(&SectorSpec::new(SANTAREM, 45.0, 3.0));
        let b = generate_sector(&SectorSpec::new(SANTAREM, 405.0, 3.0));
        for (pa, pb) in a.points().iter().zip(b.points()) {
            assert_close(*pa, *pb, 1e-9);
        }

        let c = generate_sector(&SectorSpec::new(SANTAREM, -315.0, 3.0));
        for (pa, pc) in a.points().iter().zip(c.points()) {
            assert_close(*pa, *pc, 1e-9);
        }
    }

    #[test]
    fn test_santarem_scenario() {
        let spec = SectorSpec::new(SANTAREM, 90.0, 2.0).with_beamwidth(120.0);
        let poly = generate_sector(&spec);

        let theta = 30f64.to_radians();
        let expected = GeoPoint::new(
            39.2369 + (2.0 / 111.0) * theta.cos(),
            -8.6859 + (2.0 / (111.0 * 39.2369f64.to_radians().cos())) * theta.sin(),
        );
        assert_close(poly.points()[0], expected, 1e-6);
        assert_eq!(poly.points()[30], GeoPoint::new(39.2369, -8.6859));
    }

    #[test]
    fn test_negative_range_inverts_wedge() {
        let spec = SectorSpec::new(SANTAREM, 0.0, -1.0).with_beamwidth(10.0);
        let poly = generate_sector(&spec);
        assert!(poly.arc().iter().all(|p| p.lat < SANTAREM.lat));
    }

    #[test]
    fn test_full_circle_beamwidth_still_samples() {
        let spec = SectorSpec::new(SANTAREM, 0.0, 1.0).with_beamwidth(360.0);
        let poly = generate_sector(&spec);
        assert_eq!(poly.len(), 31);
        assert_close(poly.arc()[0], poly.arc()[29], 1e-12);
    }

    #[test]
    fn test_pole_yields_non_finite_longitudes() {
        let pole = GeoPoint::new(90.0, 10.0);
        let poly = generate_sector(&SectorSpec::new(pole, 90.0, 2.0));
        assert_eq!(poly.len(), 31);
        // cos(90 deg) rounds to ~6e-17, so offsets are either infinite or absurd
        assert!(
            poly.arc()
                .iter()
                .any(|p| !p.lon.is_finite() || (p.lon - pole.lon).abs() > 1e6)
        );
        assert_eq!(poly.apex(), pole);
    }
}
