//! City, theater and chat room list presentation.

use super::{section_title, OutputFormat};
use crate::catalog::{ChatRoom, City, RoomKind, Theater, TheaterKind, CHAT_DATE_FORMAT};
use crate::error::ApiError;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use serde::Serialize;
use std::collections::BTreeMap;

pub fn format_cities(
    cities: &[City],
    format: OutputFormat,
    color: bool,
) -> Result<String, ApiError> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(cities)?);
    }
    if cities.is_empty() {
        return Ok("No cities found.".to_string());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["City", "Region", "Highlights"]);
    for c in cities {
        table.add_row(vec![
            c.title(),
            c.region.display_name().to_string(),
            c.explain.clone(),
        ]);
    }
    Ok(format!(
        "{}\n{}",
        section_title(&format!("Popular cities ({})", cities.len()), color),
        table
    ))
}

pub fn format_theaters(
    theaters: &[Theater],
    format: OutputFormat,
    color: bool,
) -> Result<String, ApiError> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(theaters)?);
    }
    if theaters.is_empty() {
        return Ok("No theaters found.".to_string());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Chain", "Location", "Latitude", "Longitude"]);
    for t in theaters {
        table.add_row(vec![
            t.kind.display_name().to_string(),
            t.location.clone(),
            format!("{:.4}", t.latitude),
            format!("{:.4}", t.longitude),
        ]);
    }
    Ok(format!(
        "{}\n{}",
        section_title(&format!("Theaters ({})", theaters.len()), color),
        table
    ))
}

/// One line of the room list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomRow {
    pub id: u32,
    pub name: String,
    pub kind: RoomKind,
    pub members: usize,
    pub last_message: Option<String>,
    pub last_activity: Option<String>,
}

impl From<&ChatRoom> for RoomRow {
    fn from(room: &ChatRoom) -> Self {
        let last = room.last_chat();
        RoomRow {
            id: room.id,
            name: room.name.clone(),
            kind: room.kind(),
            members: room.members.len(),
            last_message: last.map(|c| c.message.clone()),
            last_activity: last.map(|c| c.date.format(CHAT_DATE_FORMAT).to_string()),
        }
    }
}

pub fn format_rooms(
    rooms: &[ChatRoom],
    format: OutputFormat,
    color: bool,
) -> Result<String, ApiError> {
    let rows: Vec<RoomRow> = rooms.iter().map(RoomRow::from).collect();
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(&rows)?);
    }
    if rows.is_empty() {
        return Ok("No chat rooms found.".to_string());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Room", "Members", "Last message", "When"]);
    for row in &rows {
        table.add_row(vec![
            row.name.clone(),
            row.members.to_string(),
            row.last_message.clone().unwrap_or_else(|| "-".to_string()),
            row.last_activity.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }
    Ok(format!(
        "{}\n{}",
        section_title(&format!("Chat rooms ({})", rows.len()), color),
        table
    ))
}

pub fn format_partition(
    buckets: &BTreeMap<TheaterKind, Vec<Theater>>,
    format: OutputFormat,
    color: bool,
) -> Result<String, ApiError> {
    if format == OutputFormat::Json {
        let out: BTreeMap<String, Vec<&str>> = buckets
            .iter()
            .map(|(kind, theaters)| {
                (
                    kind.slug().to_string(),
                    theaters.iter().map(|t| t.location.as_str()).collect(),
                )
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&out)?);
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Chain", "Count", "Locations"]);
    for (kind, theaters) in buckets {
        let names: Vec<&str> = theaters.iter().map(|t| t.location.as_str()).collect();
        table.add_row(vec![
            kind.display_name().to_string(),
            theaters.len().to_string(),
            names.join(", "),
        ]);
    }
    Ok(format!("{}\n{}", section_title("Theaters by chain", color), table))
}
