//! CLI presentation: text and json formatters per command family.

mod lists;
mod map;

use clap::ValueEnum;
use owo_colors::OwoColorize;

pub use lists::{format_cities, format_partition, format_rooms, format_theaters, RoomRow};
pub use map::{format_frame_report, format_locate_report, FrameReport, LocateReport};

/// Output format shared by every command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn section_title(title: &str, color: bool) -> String {
    if color {
        format!("{}", title.bold().underline())
    } else {
        title.to_string()
    }
}
