//! Record catalog: the cities, theaters and chat rooms the screens query over.
//!
//! A catalog is either the built-in sample set or a JSON/TOML file named in
//! the configuration. It is read once and never written back.

pub mod chat;
pub mod city;
pub mod sample;
pub mod theater;

pub use chat::{Chat, ChatRoom, RoomKind, CHAT_DATE_FORMAT};
pub use city::{City, CityRegion};
pub use theater::{Theater, TheaterKind};

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// All records available to queries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub cities: Vec<City>,
    #[serde(default)]
    pub theaters: Vec<Theater>,
    #[serde(default)]
    pub chat_rooms: Vec<ChatRoom>,
}

impl Catalog {
    /// Built-in mock data around Seoul.
    pub fn sample() -> Self {
        Self {
            cities: sample::cities(),
            theaters: sample::theaters(),
            chat_rooms: sample::chat_rooms(),
        }
    }

    /// Load and validate a catalog file. Format follows the extension.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&contents)?,
            Some("toml") => Self::from_toml(&contents)?,
            _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        };

        info!(
            path = %path.display(),
            cities = catalog.cities.len(),
            theaters = catalog.theaters.len(),
            chat_rooms = catalog.chat_rooms.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    pub fn from_json(contents: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(contents)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_toml(contents: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(contents)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// City names must be present, theater coordinates valid and chat room ids unique.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if let Some(city) = self.cities.iter().find(|c| c.name.trim().is_empty()) {
            return Err(CatalogError::Invalid(format!(
                "city '{}' has no name",
                city.english_name
            )));
        }

        for theater in &self.theaters {
            if !theater.point().is_valid() {
                return Err(CatalogError::Invalid(format!(
                    "theater '{}' has invalid coordinates ({}, {})",
                    theater.location, theater.latitude, theater.longitude
                )));
            }
        }

        let mut seen = HashSet::new();
        for room in &self.chat_rooms {
            if !seen.insert(room.id) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate chat room id {}",
                    room.id
                )));
            }
        }

        debug!("Catalog validated");
        Ok(())
    }

    pub fn find_theater(&self, location: &str) -> Option<&Theater> {
        self.theaters.iter().find(|t| t.location == location)
    }
}
