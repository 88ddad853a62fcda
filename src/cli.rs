//! CLI domain: parse, route, help, output, and presentation only.
//! No domain logic; the route table dispatches to `geo` and `query`.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_cities, format_frame_report, format_locate_report, format_partition, format_rooms,
    format_theaters, FrameReport, LocateReport, OutputFormat, RoomRow,
};
pub use route::RunContext;
