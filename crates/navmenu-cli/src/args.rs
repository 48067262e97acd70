use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "navmenu",
    version,
    about = "Build the navigation menu for a user configuration"
)]
pub struct Args {
    /// Path to a UserConfiguration JSON document; omit to build the default menu
    pub config_path: Option<PathBuf>,

    /// Current location, e.g. /Patient/123?tab=history
    #[arg(long, default_value = "/")]
    pub location: String,

    /// Output format
    #[arg(long, default_value = "json")]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Optional git commit hash for tool metadata
    #[arg(long)]
    pub commit: Option<String>,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}
