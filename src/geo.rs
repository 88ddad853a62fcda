//! Geographic framing: points, distances, the enclosing frame of a pin set,
//! and the map regions and location focus derived from it.

pub mod distance;
pub mod frame;
pub mod location;
pub mod point;
pub mod region;

pub use distance::{distance_meters, EARTH_RADIUS_M};
pub use frame::{compute_frame, GeoFrame};
pub use location::{
    resolve_focus, Authorization, DeniedLocation, FixedLocation, LocationFocus, LocationProvider,
    UndeterminedLocation,
};
pub use point::GeoPoint;
pub use region::{frame_and_region, region_for, MapRegion, ViewportPolicy};
