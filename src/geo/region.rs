//! Map regions: the visible area a map screen should show.

use super::frame::{compute_frame, GeoFrame};
use super::point::GeoPoint;
use crate::error::FrameError;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// How a frame is turned into a visible region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportPolicy {
    /// Smallest span ever shown; keeps single-pin frames from zooming to street level
    pub min_span_meters: f64,
    /// Multiplier on the frame diameter so edge pins are not clipped
    pub padding: f64,
    /// Span used when focusing a single selected location
    pub focus_span_meters: f64,
}

impl Default for ViewportPolicy {
    fn default() -> Self {
        Self {
            min_span_meters: 1_000.0,
            padding: 1.2,
            focus_span_meters: 500.0,
        }
    }
}

/// A visible map area: center plus the span shown along both axes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapRegion {
    pub center: GeoPoint,
    pub span_meters: f64,
}

impl MapRegion {
    /// Region showing the whole frame.
    pub fn framing(frame: &GeoFrame, policy: &ViewportPolicy) -> Self {
        let span = 2.0 * frame.radius_meters * policy.padding;
        Self {
            center: frame.center,
            span_meters: span.max(policy.min_span_meters),
        }
    }

    /// Region centered on a single selected location.
    pub fn focused(center: GeoPoint, span_meters: f64) -> Self {
        Self {
            center,
            span_meters,
        }
    }
}

/// Frame `points` and the region showing them. With no points there is no
/// frame and the region focuses on `fallback`.
pub fn frame_and_region(
    points: &[GeoPoint],
    fallback: GeoPoint,
    policy: &ViewportPolicy,
) -> (Option<GeoFrame>, MapRegion) {
    match compute_frame(points) {
        Ok(frame) => {
            let region = MapRegion::framing(&frame, policy);
            debug!(span_meters = region.span_meters, "Framed map region");
            (Some(frame), region)
        }
        Err(FrameError::EmptyInput) => {
            warn!(fallback = %fallback, "No points to frame, using fallback location");
            (None, MapRegion::focused(fallback, policy.focus_span_meters))
        }
    }
}

/// Frame `points`, falling back to a focused region on `fallback` when there
/// are none.
pub fn region_for(points: &[GeoPoint], fallback: GeoPoint, policy: &ViewportPolicy) -> MapRegion {
    frame_and_region(points, fallback, policy).1
}
