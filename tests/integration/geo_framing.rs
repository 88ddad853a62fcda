//! Map framing through the public API.

use travelkit::catalog::{Catalog, TheaterKind};
use travelkit::error::FrameError;
use travelkit::geo::{
    compute_frame, distance_meters, region_for, GeoPoint, MapRegion, ViewportPolicy,
};
use travelkit::query::{apply, FilterPredicate};

#[test]
fn test_single_point_frame() {
    let p = GeoPoint::new(37.5297, 126.9647);
    let frame = compute_frame(&[p]).unwrap();
    assert_eq!(frame.center, p);
    assert_eq!(frame.radius_meters, 0.0);
}

#[test]
fn test_repeated_point_frame() {
    let points = vec![GeoPoint::new(37.4824, 126.9527); 12];
    assert_eq!(compute_frame(&points).unwrap().radius_meters, 0.0);
}

#[test]
fn test_cross_around_origin() {
    let points = [(-1.0, 0.0), (1.0, 0.0), (0.0, -1.0), (0.0, 1.0)].map(GeoPoint::from);
    let frame = compute_frame(&points).unwrap();
    assert!(frame.center.latitude.abs() < 1e-12);
    assert!(frame.center.longitude.abs() < 1e-12);
    let corner = distance_meters(GeoPoint::new(0.0, 0.0), points[0]);
    assert!((frame.radius_meters - corner).abs() < 1e-6);
}

#[test]
fn test_empty_points_error() {
    assert_eq!(compute_frame(&[]).unwrap_err(), FrameError::EmptyInput);
}

#[test]
fn test_every_chain_frame_covers_its_pins() {
    let catalog = Catalog::sample();
    for kind in TheaterKind::ALL {
        let theaters = apply(&catalog.theaters, &FilterPredicate::ByCategory(kind), None);
        let points: Vec<GeoPoint> = theaters.iter().map(|t| t.point()).collect();
        let frame = compute_frame(&points).unwrap();
        assert!(points.iter().all(|p| frame.contains(*p)), "{} pins escape frame", kind);
        // City scale: every chain fits well inside 20 km.
        assert!(frame.radius_meters < 20_000.0);
    }
}

#[test]
fn test_filtered_frame_is_tighter_than_full_frame() {
    let catalog = Catalog::sample();
    let all: Vec<GeoPoint> = catalog.theaters.iter().map(|t| t.point()).collect();
    let cgv: Vec<GeoPoint> = apply(
        &catalog.theaters,
        &FilterPredicate::ByCategory(TheaterKind::Cgv),
        None,
    )
    .iter()
    .map(|t| t.point())
    .collect();

    let full = compute_frame(&all).unwrap();
    let narrow = compute_frame(&cgv).unwrap();
    assert!(narrow.radius_meters < full.radius_meters);
}

#[test]
fn test_region_for_falls_back() {
    let fallback = GeoPoint::new(37.5129, 126.9532);
    let policy = ViewportPolicy::default();
    assert_eq!(
        region_for(&[], fallback, &policy),
        MapRegion::focused(fallback, policy.focus_span_meters)
    );
}
