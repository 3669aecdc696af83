//! pageview-tracker - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Replay a JSONL host trace and print the captured page-view events
#[derive(Parser, Debug)]
#[command(name = "pageview-tracker")]
#[command(version)]
#[command(about = "Replay a host event trace through the page-view tracker")]
pub struct Args {
    /// Path to JSONL trace file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Deliver at most one scroll tick per this many trace milliseconds
    #[arg(long)]
    pub throttle_ms: Option<u64>,

    /// Pretty-print emitted events
    #[arg(long)]
    pub pretty: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config_file = pageview_tracker::config::load_config_with_precedence(args.config.clone())?;
    let merged = pageview_tracker::config::merge_config(config_file);

    // Only the file sets the log path, so logging can start before env overrides warn.
    let _log_guard = pageview_tracker::logging::init(&merged.log_file_path)?;

    let config = {
        let with_env = pageview_tracker::config::apply_env_overrides(merged);
        let pretty_override = if args.pretty { Some(true) } else { None };
        pageview_tracker::config::apply_cli_overrides(with_env, args.throttle_ms, pretty_override)
    };

    info!(config = ?config, "Configuration loaded and resolved");

    let source = pageview_tracker::source::detect_input_source(args.file.clone())?;
    info!(source = %source.describe(), "Replaying trace");

    let options = pageview_tracker::replay::ReplayOptions {
        scroll_throttle_ms: config.scroll_throttle_ms,
        pretty: config.pretty,
    };
    let stdout = std::io::stdout().lock();
    pageview_tracker::replay::replay(source.into_reader(), stdout, options)?;

    Ok(())
}
