use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use navmenu_core::build_report;
use navmenu_core::location::Location;
use navmenu_core::report::{model::ToolInfo, render};

mod args;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = args::Args::parse();

    let tool = ToolInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        commit: args.commit.clone(),
    };

    let location = Location::parse(&args.location)?;
    let report = build_report(args.config_path.as_deref(), &location, tool)?;
    tracing::info!(
        sections = report.menus.len(),
        links = report.link_count(),
        "report ready"
    );

    let output = match args.format {
        args::OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        args::OutputFormat::Text => render::render_text(&report),
    };

    match args.out {
        Some(path) => std::fs::write(&path, &output)
            .with_context(|| format!("failed to write output: {}", path.display()))?,
        None => print!("{output}"),
    }

    Ok(())
}
