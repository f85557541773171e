//! Lifecycle monitor for launched bars.
//!
//! The monitor samples each tracked process, counts how many have exited,
//! and stops once the [`TerminationPolicy`] is satisfied. Scripts are not
//! monitored.

use super::launcher::{Launched, ProcessState};
use log::{debug, warn};
use std::io;
use std::thread;
use std::time::Duration;

/// Delay between samples.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Something the monitor can sample.
pub trait ProcessProbe {
    /// Whether this process counts toward the total at all.
    fn is_tracked(&self) -> bool {
        true
    }

    /// Sample the process without blocking.
    fn has_exited(&mut self) -> io::Result<bool>;
}

impl<E> ProcessProbe for Launched<E> {
    fn is_tracked(&self) -> bool {
        !matches!(
            self.state(),
            ProcessState::Unstarted | ProcessState::Failed(_)
        )
    }

    fn has_exited(&mut self) -> io::Result<bool> {
        Ok(matches!(self.refresh()?, ProcessState::Exited(_)))
    }
}

/// When the supervisor may stop waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminationPolicy {
    /// Stop once all but one tracked bar have exited. This leaves the last
    /// bar running on its own and is the historical behavior of barrc.
    #[default]
    AllButLast,
    /// Stop only when every tracked bar has exited.
    AllBars,
}

impl TerminationPolicy {
    pub fn should_terminate(&self, total: usize, exited: usize) -> bool {
        match self {
            TerminationPolicy::AllButLast => exited >= total.saturating_sub(1),
            TerminationPolicy::AllBars => exited >= total,
        }
    }
}

/// Summary of a finished monitoring run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorReport {
    /// Tracked processes (failed spawns excluded).
    pub total: usize,
    pub exited: usize,
    /// Number of sampling passes made.
    pub samples: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct Monitor {
    pub policy: TerminationPolicy,
    pub interval: Duration,
}

impl Default for Monitor {
    fn default() -> Self {
        Self {
            policy: TerminationPolicy::default(),
            interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl Monitor {
    pub fn new(policy: TerminationPolicy, interval: Duration) -> Self {
        Self { policy, interval }
    }

    /// Sample `probes` until the policy says to stop.
    ///
    /// A probe that cannot be sampled is counted as exited.
    pub fn run<P: ProcessProbe>(&self, probes: &mut [P]) -> MonitorReport {
        let total = probes.iter().filter(|p| p.is_tracked()).count();
        debug!(
            "Monitoring {} processes ({:?}, every {:?})",
            total, self.policy, self.interval
        );

        let mut samples = 0;
        loop {
            samples += 1;
            let mut exited = 0;
            for probe in probes.iter_mut().filter(|p| p.is_tracked()) {
                let done = probe.has_exited().unwrap_or_else(|e| {
                    warn!("failed to check process status: {}", e);
                    true
                });
                if done {
                    exited += 1;
                }
            }

            if self.policy.should_terminate(total, exited) {
                debug!("{} of {} processes exited", exited, total);
                return MonitorReport {
                    total,
                    exited,
                    samples,
                };
            }

            thread::sleep(self.interval);
        }
    }
}
