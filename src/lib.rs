//! travelkit: map framing and list queries for travel app screens.
//!
//! Two independent, pure components sit at the core:
//!
//! - [`geo`] frames a set of map pins (centroid plus radius to the farthest
//!   pin) and derives the visible map region from it.
//! - [`query`] filters and stably orders record lists by category, name
//!   substring, or recency.
//!
//! Around them: the record [`catalog`], layered [`config`], [`logging`], and
//! the [`cli`] that drives everything from the `travelkit` binary.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod geo;
pub mod logging;
pub mod query;
