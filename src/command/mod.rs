//! Translation of entities into process invocations.
//!
//! Everything here is pure: the same entity always yields the same
//! [`LaunchSpec`]. Arguments are kept as discrete argv entries and are never
//! passed through a shell; [`LaunchSpec::command_line`] renders the
//! equivalent shell form only for logs and diagnostics.

mod bar;
mod script;

pub use bar::{DEFAULT_BAR_BINARY, DockFlag, build_bar_command};
pub use script::{CommandError, build_script_command};

use std::path::PathBuf;

/// One argv entry with its display style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// Passed and displayed as-is (shell-quoted only when needed).
    Plain(String),
    /// One or more values displayed single-quoted and comma-separated,
    /// e.g. `'Sans-10', 'Mono-8'`. Passed as a single argv entry joined
    /// with `", "`.
    Quoted(Vec<String>),
}

impl Arg {
    pub fn plain(value: impl Into<String>) -> Self {
        Arg::Plain(value.into())
    }

    pub fn quoted(value: impl Into<String>) -> Self {
        Arg::Quoted(vec![value.into()])
    }

    /// The string handed to the process.
    pub fn to_argv(&self) -> String {
        match self {
            Arg::Plain(value) => value.clone(),
            Arg::Quoted(values) => values.join(", "),
        }
    }

    fn render(&self) -> String {
        match self {
            Arg::Plain(value) => shell_display(value),
            Arg::Quoted(values) => values
                .iter()
                .map(|v| single_quote(v))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

fn single_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

/// Quote a word for display unless it is made only of shell-safe characters.
fn shell_display(value: &str) -> String {
    let safe = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_=/,.+:@%".contains(c));
    if safe {
        value.to_string()
    } else {
        single_quote(value)
    }
}

/// Where a launched process reads its standard input from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StdinSource {
    Null,
    /// Stream a named pipe into stdin, like `cat <fifo> | program`.
    Fifo(PathBuf),
}

/// A fully resolved process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec {
    pub program: String,
    pub args: Vec<Arg>,
    pub stdin: StdinSource,
}

impl LaunchSpec {
    /// Arguments as passed to the process, without the program name.
    pub fn argv(&self) -> Vec<String> {
        self.args.iter().map(Arg::to_argv).collect()
    }

    /// Shell rendering of the invocation.
    pub fn command_line(&self) -> String {
        let mut line = String::new();
        if let StdinSource::Fifo(fifo) = &self.stdin {
            line.push_str("cat ");
            line.push_str(&shell_display(&fifo.to_string_lossy()));
            line.push_str(" | ");
        }
        line.push_str(&shell_display(&self.program));
        for arg in &self.args {
            line.push(' ');
            line.push_str(&arg.render());
        }
        line
    }
}
