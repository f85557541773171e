//! Process launching and lifecycle monitoring.
//!
//! - Launcher: spawns one process per entity, without waiting on it
//! - Monitor: samples launched bars until the termination policy is met

mod launcher;
mod monitor;

pub use launcher::{Launched, ProcessState, launch_bar, launch_script};
pub use monitor::{DEFAULT_POLL_INTERVAL, Monitor, MonitorReport, TerminationPolicy};
