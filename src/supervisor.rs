//! The supervisor: config files in, running processes out.
//!
//! Both config files are parsed before anything is launched, so a fatal
//! config error never leaves half the processes running. Scripts start
//! first, then bars, each in config order.

use crate::command::DockFlag;
use crate::config::{ConfigPaths, ParsedConfig, load_bar_config, load_script_config};
use crate::entity::{Bar, Script};
use crate::error::{BarrcError, Result};
use crate::process::{Launched, Monitor, MonitorReport, launch_bar, launch_script};
use log::{debug, info, warn};
use std::path::Path;

/// Everything the supervisor needs to run.
#[derive(Debug, Clone)]
pub struct SupervisorOptions {
    pub paths: ConfigPaths,
    pub bar_binary: String,
    pub dock_flag: DockFlag,
    pub monitor: Monitor,
}

/// Outcome of a completed run.
#[derive(Debug)]
pub struct RunSummary {
    pub report: MonitorReport,
    pub scripts_launched: usize,
    pub bars_launched: usize,
}

/// Parse, launch, and wait.
///
/// # Returns
///
/// * `Ok(RunSummary)` - Every entity was started and the monitor finished
/// * `Err(BarrcError::ConfigNotFound | ConfigRead)` - Nothing was launched
/// * `Err(BarrcError::LaunchFailure)` - Some entities failed to start; the
///   rest were still launched and monitored
pub fn run(options: &SupervisorOptions) -> Result<RunSummary> {
    let bars = load_bar_config(&options.paths.bar)?;
    let scripts = load_scripts(&options.paths)?;

    report_skipped(&options.paths.bar, &bars);
    report_skipped(&options.paths.scripts, &scripts);

    debug!("{} scripts detected.", scripts.entities.len());
    for script in &scripts.entities {
        debug!("{}", script);
    }
    debug!("{} bars detected.", bars.entities.len());
    for bar in &bars.entities {
        debug!("{}", bar);
    }

    let (launched_scripts, mut launched_bars) =
        launch_all(scripts.entities, bars.entities, options);

    let report = options.monitor.run(&mut launched_bars);
    info!("Finished.");

    let failures = count_failed(&launched_scripts) + count_failed(&launched_bars);
    let summary = RunSummary {
        report,
        scripts_launched: launched_scripts.len() - count_failed(&launched_scripts),
        bars_launched: launched_bars.len() - count_failed(&launched_bars),
    };

    if failures > 0 {
        return Err(BarrcError::LaunchFailure(format!(
            "{} of {} entities could not be started",
            failures,
            launched_scripts.len() + launched_bars.len()
        )));
    }
    Ok(summary)
}

/// Start every script, then every bar, each in config order.
fn launch_all(
    scripts: Vec<Script>,
    bars: Vec<Bar>,
    options: &SupervisorOptions,
) -> (Vec<Launched<Script>>, Vec<Launched<Bar>>) {
    let launched_scripts: Vec<_> = scripts.into_iter().map(launch_script).collect();
    let launched_bars: Vec<_> = bars
        .into_iter()
        .map(|bar| launch_bar(bar, &options.bar_binary, options.dock_flag))
        .collect();
    (launched_scripts, launched_bars)
}

fn report_skipped<T>(path: &Path, parsed: &ParsedConfig<T>) {
    if !parsed.diagnostics.is_empty() {
        info!(
            "{}: {} lines skipped",
            path.display(),
            parsed.diagnostics.len()
        );
    }
}

fn count_failed<E>(launched: &[Launched<E>]) -> usize {
    launched.iter().filter(|l| l.is_failed()).count()
}

/// A missing script config is only fatal when its path was given
/// explicitly.
fn load_scripts(paths: &ConfigPaths) -> Result<ParsedConfig<Script>> {
    match load_script_config(&paths.scripts) {
        Err(BarrcError::ConfigNotFound { path }) if !paths.scripts_explicit => {
            warn!(
                "No script config at {}; starting bars only",
                path.display()
            );
            Ok(ParsedConfig::empty())
        }
        other => other,
    }
}
