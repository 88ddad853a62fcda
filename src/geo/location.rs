//! Device location as an injected capability.
//!
//! Whatever owns the map screen hands in a [`LocationProvider`]; nothing here
//! reaches for a shared location manager.

use super::point::GeoPoint;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Location permission state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Authorization {
    NotDetermined,
    Restricted,
    Denied,
    Authorized,
}

/// Source of the device's current location
pub trait LocationProvider {
    fn authorization(&self) -> Authorization;

    /// Latest known fix, if any.
    fn current_location(&self) -> Option<GeoPoint>;
}

/// Provider that always reports one authorized location
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub GeoPoint);

impl LocationProvider for FixedLocation {
    fn authorization(&self) -> Authorization {
        Authorization::Authorized
    }

    fn current_location(&self) -> Option<GeoPoint> {
        Some(self.0)
    }
}

/// Provider whose permission has been denied
#[derive(Debug, Clone, Copy, Default)]
pub struct DeniedLocation;

impl LocationProvider for DeniedLocation {
    fn authorization(&self) -> Authorization {
        Authorization::Denied
    }

    fn current_location(&self) -> Option<GeoPoint> {
        None
    }
}

/// Provider that has not been asked for permission yet
#[derive(Debug, Clone, Copy, Default)]
pub struct UndeterminedLocation;

impl LocationProvider for UndeterminedLocation {
    fn authorization(&self) -> Authorization {
        Authorization::NotDetermined
    }

    fn current_location(&self) -> Option<GeoPoint> {
        None
    }
}

/// Where the map should center after asking for the current location
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "focus", content = "point", rename_all = "snake_case")]
pub enum LocationFocus {
    /// Authorized with a fix
    Current(GeoPoint),
    /// Denied or restricted: show the fallback and ask the user to grant access
    PermissionRequired(GeoPoint),
    /// Not determined yet, or authorized without a fix
    Fallback(GeoPoint),
}

impl LocationFocus {
    pub fn point(&self) -> GeoPoint {
        match self {
            LocationFocus::Current(p)
            | LocationFocus::PermissionRequired(p)
            | LocationFocus::Fallback(p) => *p,
        }
    }
}

/// Decide where to center given the provider's state.
pub fn resolve_focus(provider: &dyn LocationProvider, fallback: GeoPoint) -> LocationFocus {
    let authorization = provider.authorization();
    let focus = match authorization {
        Authorization::Authorized => match provider.current_location() {
            Some(point) if point.is_valid() => LocationFocus::Current(point),
            _ => LocationFocus::Fallback(fallback),
        },
        Authorization::Denied | Authorization::Restricted => {
            LocationFocus::PermissionRequired(fallback)
        }
        Authorization::NotDetermined => LocationFocus::Fallback(fallback),
    };
    debug!(?authorization, ?focus, "Resolved location focus");
    focus
}
