//! Frame and location presentation.

use super::{section_title, OutputFormat};
use crate::error::ApiError;
use crate::geo::{GeoFrame, LocationFocus, MapRegion};
use owo_colors::OwoColorize;
use serde::Serialize;

/// Result of the `frame` command
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameReport {
    pub points: usize,
    /// Absent when there was nothing to frame
    pub frame: Option<GeoFrame>,
    pub region: MapRegion,
    pub fallback_used: bool,
}

/// Result of the `locate` command
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocateReport {
    pub focus: LocationFocus,
    pub region: MapRegion,
}

pub fn format_frame_report(
    report: &FrameReport,
    format: OutputFormat,
    color: bool,
) -> Result<String, ApiError> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(report)?);
    }

    let mut out = section_title("Map frame", color);
    out.push_str(&format!("\n  Points: {}", report.points));
    match &report.frame {
        Some(frame) => {
            out.push_str(&format!("\n  Center: {}", frame.center));
            out.push_str(&format!("\n  Radius: {:.1} m", frame.radius_meters));
        }
        None => out.push_str("\n  Nothing to frame; showing the fallback location"),
    }
    out.push_str(&format!(
        "\n  Region: {} spanning {:.1} m",
        report.region.center, report.region.span_meters
    ));
    Ok(out)
}

pub fn format_locate_report(
    report: &LocateReport,
    format: OutputFormat,
    color: bool,
) -> Result<String, ApiError> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(report)?);
    }

    let mut out = section_title("Location", color);
    let line = match report.focus {
        LocationFocus::Current(p) => format!("Current location {}", p),
        LocationFocus::PermissionRequired(p) => {
            let msg = "Location access is denied; allow it in Settings to use the current location";
            let msg = if color {
                msg.yellow().to_string()
            } else {
                msg.to_string()
            };
            format!("{}\n  Showing {}", msg, p)
        }
        LocationFocus::Fallback(p) => format!("No location fix; showing {}", p),
    };
    out.push_str(&format!("\n  {}", line));
    out.push_str(&format!(
        "\n  Region: {} spanning {:.1} m",
        report.region.center, report.region.span_meters
    ));
    Ok(out)
}
