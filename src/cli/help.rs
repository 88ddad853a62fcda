//! Command naming for logs.

use super::parse::Commands;

/// Stable name of a command, used as a log field.
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Cities { .. } => "cities",
        Commands::Theaters { .. } => "theaters",
        Commands::Rooms { .. } => "rooms",
        Commands::Frame { .. } => "frame",
        Commands::Locate { .. } => "locate",
        Commands::Partition { .. } => "partition",
    }
}
