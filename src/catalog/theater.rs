//! Theaters shown as map pins.

use crate::geo::GeoPoint;
use crate::query::Queryable;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Theater chain. "Every chain" is expressed as `FilterPredicate::All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TheaterKind {
    Megabox,
    LotteCinema,
    Cgv,
}

impl TheaterKind {
    pub const ALL: [TheaterKind; 3] = [
        TheaterKind::Megabox,
        TheaterKind::LotteCinema,
        TheaterKind::Cgv,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            TheaterKind::Megabox => "megabox",
            TheaterKind::LotteCinema => "lotte-cinema",
            TheaterKind::Cgv => "cgv",
        }
    }

    /// Brand name as shown on the map sheet
    pub fn display_name(&self) -> &'static str {
        match self {
            TheaterKind::Megabox => "메가박스",
            TheaterKind::LotteCinema => "롯데시네마",
            TheaterKind::Cgv => "CGV",
        }
    }
}

impl fmt::Display for TheaterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for TheaterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        TheaterKind::ALL
            .into_iter()
            .find(|k| k.slug() == wanted || k.display_name().to_lowercase() == wanted)
            .ok_or_else(|| {
                format!(
                    "unknown theater kind '{}' (expected megabox, lotte-cinema or cgv)",
                    s
                )
            })
    }
}

/// A theater location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theater {
    pub kind: TheaterKind,
    /// Branch name, e.g. "롯데시네마 서울대입구"
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Theater {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

impl Queryable for Theater {
    type Category = TheaterKind;
    type Key = String;

    fn name(&self) -> &str {
        &self.location
    }

    fn category(&self) -> TheaterKind {
        self.kind
    }

    fn sort_key(&self) -> String {
        self.location.clone()
    }
}
