//! Cities on the popular-city screen.

use crate::query::Queryable;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Domestic or overseas destination. "Every city" is `FilterPredicate::All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CityRegion {
    Domestic,
    Overseas,
}

impl CityRegion {
    pub const ALL: [CityRegion; 2] = [CityRegion::Domestic, CityRegion::Overseas];

    pub fn slug(&self) -> &'static str {
        match self {
            CityRegion::Domestic => "domestic",
            CityRegion::Overseas => "overseas",
        }
    }

    /// Segment label on the city screen
    pub fn display_name(&self) -> &'static str {
        match self {
            CityRegion::Domestic => "국내",
            CityRegion::Overseas => "해외",
        }
    }
}

impl fmt::Display for CityRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for CityRegion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        CityRegion::ALL
            .into_iter()
            .find(|r| r.slug() == wanted || r.display_name() == wanted)
            .ok_or_else(|| format!("unknown region '{}' (expected domestic or overseas)", s))
    }
}

/// A destination city
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    /// Korean name, e.g. "방콕"
    pub name: String,
    pub english_name: String,
    #[serde(default)]
    pub explain: String,
    pub region: CityRegion,
}

impl City {
    /// "방콕 | Bangkok", as the list cell shows it
    pub fn title(&self) -> String {
        format!("{} | {}", self.name, self.english_name)
    }
}

impl Queryable for City {
    type Category = CityRegion;
    type Key = String;

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> CityRegion {
        self.region
    }

    fn sort_key(&self) -> String {
        self.name.clone()
    }
}
