//! Property-based tests for map framing

use proptest::prelude::*;
use travelkit::geo::{compute_frame, GeoPoint};

fn seoul_point() -> impl Strategy<Value = GeoPoint> {
    (37.40f64..37.70, 126.80f64..127.20).prop_map(|(lat, lon)| GeoPoint::new(lat, lon))
}

proptest! {
    #[test]
    fn frame_contains_all_points(points in prop::collection::vec(seoul_point(), 1..40)) {
        let frame = compute_frame(&points).unwrap();
        prop_assert!(frame.radius_meters >= 0.0);
        for p in &points {
            prop_assert!(frame.contains(*p));
        }
    }

    #[test]
    fn frame_is_deterministic(points in prop::collection::vec(seoul_point(), 1..40)) {
        prop_assert_eq!(compute_frame(&points).unwrap(), compute_frame(&points).unwrap());
    }

    #[test]
    fn repeated_point_has_zero_radius(p in seoul_point(), n in 1usize..64) {
        let frame = compute_frame(&vec![p; n]).unwrap();
        prop_assert_eq!(frame.center, p);
        prop_assert_eq!(frame.radius_meters, 0.0);
    }
}
