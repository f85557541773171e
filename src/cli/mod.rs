//! CLI argument parsing for barrc.
//!
//! Uses clap derive macros for declarative argument definitions. The
//! supervisor itself lives in the `supervisor` module.

use crate::command::DEFAULT_BAR_BINARY;
use crate::process::DEFAULT_POLL_INTERVAL;
use clap::Parser;
use std::path::PathBuf;

/// barrc: launch status bars and their feeder scripts from config files.
///
/// Reads ~/.config/bar/barrc and ~/.config/bar/scriptrc, starts every
/// configured script, then every configured bar, and waits for the bars.
#[derive(Parser, Debug)]
#[command(name = "barrc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Bar config file to use instead of ~/.config/bar/barrc.
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Script config file to use instead of ~/.config/bar/scriptrc.
    #[arg(long = "scripts", value_name = "PATH")]
    pub scripts: Option<PathBuf>,

    /// Print every parsed field and parser progress.
    #[arg(short, long)]
    pub verbose: bool,

    /// List running scripts (accepted for compatibility; does nothing).
    #[arg(short, long)]
    pub list: bool,

    /// Status bar binary to launch.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_BAR_BINARY)]
    pub bar_binary: String,

    /// Delay between bar status checks, in milliseconds.
    #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL.as_millis() as u64)]
    pub poll_interval_ms: u64,

    /// Wait for every bar to exit instead of all but the last one.
    #[arg(long)]
    pub wait_all: bool,

    /// Pass -b only to bars with Position=Bottom. By default barrc passes
    /// it to top-docked bars.
    #[arg(long)]
    pub bottom_dock_flag: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
