//! Script command construction.

use super::{Arg, LaunchSpec, StdinSource};
use crate::entity::Script;
use thiserror::Error;

/// A script whose config cannot be turned into a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("script '{name}' has no Path")]
    EmptyPath { name: String },

    #[error("failed to parse arguments for script '{name}': {message}")]
    Arguments { name: String, message: String },
}

/// Build the invocation for a script: its path followed by its argument
/// string split with shell word rules.
pub fn build_script_command(script: &Script) -> Result<LaunchSpec, CommandError> {
    if script.path.is_empty() {
        return Err(CommandError::EmptyPath {
            name: script.name.clone(),
        });
    }

    let words = shell_words::split(&script.arguments).map_err(|e| CommandError::Arguments {
        name: script.name.clone(),
        message: e.to_string(),
    })?;

    Ok(LaunchSpec {
        program: script.path.clone(),
        args: words.into_iter().map(Arg::Plain).collect(),
        stdin: StdinSource::Null,
    })
}
