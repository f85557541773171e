//! barrc: declarative launcher and supervisor for status bars.
//!
//! This is the main entry point for the `barrc` CLI. It parses arguments,
//! sets up logging, runs the supervisor, and maps errors to exit codes.

mod cli;
mod command;
mod config;
mod entity;
mod error;
mod exit_codes;
mod process;
mod supervisor;

use cli::Cli;
use command::DockFlag;
use config::ConfigPaths;
use error::Result;
use log::{info, warn};
use process::{Monitor, TerminationPolicy};
use std::process::ExitCode;
use std::time::Duration;
use supervisor::SupervisorOptions;

/// Lower bound for the monitor poll interval.
const MIN_POLL_INTERVAL_MS: u64 = 10;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// `-v` raises the default filter to debug; `RUST_LOG` still wins.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_filter);
    env_logger::init_from_env(env);
}

fn run(cli: Cli) -> Result<()> {
    if cli.list {
        warn!("-l: listing running scripts is not supported; ignoring");
    }

    let paths = ConfigPaths::resolve(cli.config, cli.scripts)?;

    let policy = if cli.wait_all {
        TerminationPolicy::AllBars
    } else {
        TerminationPolicy::AllButLast
    };
    let dock_flag = if cli.bottom_dock_flag {
        DockFlag::Bottom
    } else {
        DockFlag::Top
    };
    let options = SupervisorOptions {
        paths,
        bar_binary: cli.bar_binary,
        dock_flag,
        monitor: Monitor::new(
            policy,
            Duration::from_millis(cli.poll_interval_ms.max(MIN_POLL_INTERVAL_MS)),
        ),
    };

    let summary = supervisor::run(&options)?;
    info!(
        "{} scripts and {} bars started; {} of {} monitored bars exited after {} samples",
        summary.scripts_launched,
        summary.bars_launched,
        summary.report.exited,
        summary.report.total,
        summary.report.samples
    );
    Ok(())
}
