//! Process launcher.
//!
//! Spawns are non-blocking and never retried. stdout of every child is
//! discarded and stderr is inherited so bar and script errors reach the
//! terminal. A FIFO is streamed into a bar by a `cat` feeder child whose
//! stdout pipe becomes the bar's stdin.

use crate::command::{
    CommandError, DockFlag, LaunchSpec, StdinSource, build_bar_command, build_script_command,
};
use crate::entity::{Bar, Script};
use log::{debug, error, info, warn};
use std::io;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::Instant;
use thiserror::Error;

/// Why an entity could not be started.
#[derive(Error, Debug)]
pub enum SpawnError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("failed to execute '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to start FIFO reader for '{}': {source}", fifo.display())]
    Feeder {
        fifo: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Lifecycle of a launched entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessState {
    Unstarted,
    Running,
    /// Exit code, `None` when killed by a signal.
    Exited(Option<i32>),
    /// The spawn failed; the entity is not monitored.
    Failed(String),
}

/// Child processes started for one entity.
#[derive(Debug)]
pub struct RunningProcess {
    child: Child,
    feeder: Option<Child>,
    started_at: Instant,
}

impl RunningProcess {
    pub fn id(&self) -> u32 {
        self.child.id()
    }
}

/// Spawn the process described by `spec`.
pub fn launch(spec: &LaunchSpec) -> Result<RunningProcess, SpawnError> {
    let mut feeder = None;
    let stdin = match &spec.stdin {
        StdinSource::Null => Stdio::null(),
        StdinSource::Fifo(fifo) => {
            let mut cat = Command::new("cat")
                .arg(fifo)
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::inherit())
                .spawn()
                .map_err(|e| SpawnError::Feeder {
                    fifo: fifo.clone(),
                    source: e,
                })?;
            let pipe = cat.stdout.take();
            feeder = Some(cat);
            match pipe {
                Some(pipe) => Stdio::from(pipe),
                None => Stdio::null(),
            }
        }
    };

    let spawned = Command::new(&spec.program)
        .args(spec.argv())
        .stdin(stdin)
        .stdout(Stdio::null())
        .stderr(Stdio::inherit())
        .spawn();

    match spawned {
        Ok(child) => Ok(RunningProcess {
            child,
            feeder,
            started_at: Instant::now(),
        }),
        Err(e) => {
            if let Some(mut cat) = feeder {
                let _ = cat.kill();
                let _ = cat.wait();
            }
            Err(SpawnError::Spawn {
                program: spec.program.clone(),
                source: e,
            })
        }
    }
}

/// An entity together with its process.
#[derive(Debug)]
pub struct Launched<E> {
    pub entity: E,
    /// The invocation, when the entity could be translated into one.
    pub spec: Option<LaunchSpec>,
    state: ProcessState,
    process: Option<RunningProcess>,
}

impl<E> Launched<E> {
    /// Wrap an entity that has not been started.
    pub fn unstarted(entity: E) -> Self {
        Self {
            entity,
            spec: None,
            state: ProcessState::Unstarted,
            process: None,
        }
    }

    fn start(entity: E, spec: Result<LaunchSpec, CommandError>) -> Self {
        let mut launched = Self::unstarted(entity);
        let result = spec.map_err(SpawnError::from).and_then(|spec| {
            let running = launch(&spec);
            launched.spec = Some(spec);
            running
        });

        match result {
            Ok(process) => {
                launched.state = ProcessState::Running;
                launched.process = Some(process);
            }
            Err(e) => launched.state = ProcessState::Failed(e.to_string()),
        }
        launched
    }

    pub fn state(&self) -> &ProcessState {
        &self.state
    }

    /// OS process id while the entity is running.
    pub fn pid(&self) -> Option<u32> {
        match self.state {
            ProcessState::Running => self.process.as_ref().map(RunningProcess::id),
            _ => None,
        }
    }

    /// When the process was spawned. `None` if it never started.
    pub fn started_at(&self) -> Option<Instant> {
        self.process.as_ref().map(|process| process.started_at)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, ProcessState::Failed(_))
    }

    /// Check the child without blocking and record an exit.
    ///
    /// Exited and failed states are final.
    pub fn refresh(&mut self) -> io::Result<&ProcessState> {
        if self.state != ProcessState::Running {
            return Ok(&self.state);
        }
        let Some(process) = self.process.as_mut() else {
            return Ok(&self.state);
        };

        if let Some(status) = process.child.try_wait()? {
            debug!(
                "pid {} exited with {:?} after {:?}",
                process.child.id(),
                status.code(),
                process.started_at.elapsed()
            );
            self.state = ProcessState::Exited(status.code());
        }
        if let Some(feeder) = process.feeder.as_mut() {
            // Reap the reader if it finished; it may outlive the bar.
            let _ = feeder.try_wait();
        }
        Ok(&self.state)
    }
}

/// Build and spawn a bar.
pub fn launch_bar(bar: Bar, binary: &str, dock_flag: DockFlag) -> Launched<Bar> {
    let spec = build_bar_command(&bar, binary, dock_flag);
    let launched = Launched::start(bar, Ok(spec));
    if let Some(spec) = &launched.spec {
        info!(
            "Launching bar #{}: {}",
            launched.entity.id,
            spec.command_line()
        );
    }

    match launched.state() {
        ProcessState::Failed(reason) => error!("bar #{}: {}", launched.entity.id, reason),
        _ => debug!(
            "bar #{} running as pid {}",
            launched.entity.id,
            launched.pid().unwrap_or_default()
        ),
    }
    launched
}

/// Build and spawn a script.
pub fn launch_script(script: Script) -> Launched<Script> {
    let spec = build_script_command(&script);
    match &spec {
        Ok(spec) => info!(
            "Launching script '{}': {}",
            script.label(),
            spec.command_line()
        ),
        Err(e) => warn!("script '{}' not launched: {}", script.label(), e),
    }
    if script.poll {
        debug!(
            "script '{}' requests polling every {}; started once",
            script.label(),
            script.frequency.as_deref().unwrap_or("?")
        );
    }

    let launched = Launched::start(script, spec);
    if let ProcessState::Failed(reason) = launched.state() {
        error!("script '{}': {}", launched.entity.label(), reason);
    }
    launched
}
