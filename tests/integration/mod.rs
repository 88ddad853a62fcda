//! Integration tests for travelkit

mod catalog_loading;
mod cli_commands;
mod geo_framing;
mod list_query;
mod logging;
