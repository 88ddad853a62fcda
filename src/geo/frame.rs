//! Enclosing frame of a pin set: centroid plus radius to the farthest pin.
//!
//! The centroid is the plain mean of latitudes and longitudes. That is not
//! geodesically exact, but it is stable and close enough for city-scale
//! pin sets, which is all the map screens show.

use super::distance::distance_meters;
use super::point::GeoPoint;
use crate::error::FrameError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Slack for `contains`, in meters
const CONTAINS_TOLERANCE_M: f64 = 1e-3;

/// Center and enclosing radius of a set of points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoFrame {
    pub center: GeoPoint,
    /// Distance from `center` to the farthest input point. Never negative.
    pub radius_meters: f64,
}

impl GeoFrame {
    /// Whether `point` falls inside the frame's circle.
    pub fn contains(&self, point: GeoPoint) -> bool {
        distance_meters(self.center, point) <= self.radius_meters + CONTAINS_TOLERANCE_M
    }
}

/// Compute the frame enclosing `points`.
///
/// Returns [`FrameError::EmptyInput`] for an empty slice. Choosing a fallback
/// location in that case is up to the caller (see [`super::region_for`]).
///
/// Points are expected to satisfy [`GeoPoint::is_valid`]; the frame of
/// non-finite or out-of-range coordinates is unspecified.
pub fn compute_frame(points: &[GeoPoint]) -> Result<GeoFrame, FrameError> {
    let (first, rest) = points.split_first().ok_or(FrameError::EmptyInput)?;
    debug_assert!(points.iter().all(GeoPoint::is_valid), "invalid point in frame input");

    // Averaging offsets from the first point keeps identical inputs exact.
    let (dlat, dlon) = rest.iter().fold((0.0, 0.0), |(lat, lon), p| {
        (lat + (p.latitude - first.latitude), lon + (p.longitude - first.longitude))
    });
    let n = points.len() as f64;
    let center = GeoPoint::new(first.latitude + dlat / n, first.longitude + dlon / n);

    let radius_meters = points
        .iter()
        .map(|p| distance_meters(center, *p))
        .fold(0.0_f64, f64::max);

    debug!(
        points = points.len(),
        center = %center,
        radius_meters,
        "Computed map frame"
    );

    Ok(GeoFrame {
        center,
        radius_meters,
    })
}
