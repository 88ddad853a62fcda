//! Geographic coordinate value type.

use crate::error::ParsePointError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns true if both components are finite and within range.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    pub(crate) fn to_radians(self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.latitude, self.longitude)
    }
}

impl FromStr for GeoPoint {
    type Err = ParsePointError;

    /// Parses `lat,lon`, surrounding whitespace allowed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| ParsePointError::Malformed(s.to_string()))?;

        let parse = |part: &str| -> Result<f64, ParsePointError> {
            let part = part.trim();
            part.parse::<f64>()
                .map_err(|_| ParsePointError::InvalidNumber(part.to_string()))
        };

        let point = GeoPoint::new(parse(lat)?, parse(lon)?);
        if !point.is_valid() {
            return Err(ParsePointError::OutOfRange(s.trim().to_string()));
        }
        Ok(point)
    }
}
