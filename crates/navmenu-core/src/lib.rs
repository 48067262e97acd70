pub mod config;
pub mod error;
pub mod icon;
pub mod location;
pub mod menu;
pub mod options;
pub mod report;

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use crate::config::read::read_configuration;
use crate::location::Location;
use crate::report::model::{MenuReport, ToolInfo};

pub const TOOL_NAME: &str = "navmenu";

/// JSON schema version of navmenu reports.
/// Bump only when the report shape changes semantically.
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Run the full pipeline: read the optional configuration, build the menu
/// for `location`, and wrap it in a report.
///
/// A missing `config_path` is not an error; the report then carries only
/// the two fixed sections.
pub fn build_report(
    config_path: Option<&Path>,
    location: &Location,
    tool: ToolInfo,
) -> Result<MenuReport> {
    let ctx = config_path.map(read_configuration).transpose()?;

    let menus = menu::build::build(ctx.as_ref().map(|c| &c.configuration), location);
    debug!(sections = menus.len(), location = %location, "menu built");

    Ok(MenuReport::new(
        tool,
        ctx.map(|c| c.into_input()),
        location.to_string(),
        menus,
    ))
}
