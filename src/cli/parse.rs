//! CLI parse: clap types for travelkit. No behavior; definitions only.

use super::presentation::OutputFormat;
use crate::catalog::{CityRegion, TheaterKind};
use crate::geo::GeoPoint;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// travelkit - map framing and list queries for travel screens
#[derive(Debug, Parser)]
#[command(name = "travelkit")]
#[command(about = "Map framing and list queries over city, theater and chat room catalogs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable logging entirely
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List popular cities, in catalog order
    Cities {
        /// Case-insensitive city name search
        #[arg(long)]
        search: Option<String>,
        /// Only domestic or overseas cities
        #[arg(long)]
        region: Option<CityRegion>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List theaters, alphabetically
    Theaters {
        /// Only this chain (megabox, lotte-cinema, cgv)
        #[arg(long)]
        kind: Option<TheaterKind>,
        /// Case-insensitive branch name search
        #[arg(long)]
        search: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List chat rooms, most recent first
    Rooms {
        /// Case-insensitive room name search
        #[arg(long)]
        search: Option<String>,
        /// Maximum rooms to show
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Compute the map frame and region for theater pins or explicit points
    Frame {
        /// Only this chain's theaters
        #[arg(long)]
        kind: Option<TheaterKind>,
        /// Explicit point as LAT,LON; repeatable. Replaces the theater pins.
        #[arg(long = "point", allow_hyphen_values = true)]
        points: Vec<GeoPoint>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Resolve where the map centers for the current-location button
    Locate {
        /// Authorized device location as LAT,LON
        #[arg(long, allow_hyphen_values = true, conflicts_with = "denied")]
        at: Option<GeoPoint>,
        /// Simulate denied location permission
        #[arg(long)]
        denied: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Group theaters by chain
    Partition {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}
