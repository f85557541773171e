//! Error types for the barrc CLI.
//!
//! Only failures that stop the supervisor live here. Problems with a single
//! config line are reported as [`crate::config::types::ParseDiagnostic`] values and
//! problems starting a single entity are kept on that entity's process state.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for barrc operations.
#[derive(Error, Debug)]
pub enum BarrcError {
    /// A required config file does not exist.
    #[error("Cannot locate config: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// A config file exists but could not be read.
    #[error("failed to read config file '{}': {message}", path.display())]
    ConfigRead { path: PathBuf, message: String },

    /// User provided invalid arguments or the environment is unusable.
    #[error("{0}")]
    UserError(String),

    /// One or more entities could not be launched.
    #[error("Launch failed: {0}")]
    LaunchFailure(String),
}

impl BarrcError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            BarrcError::ConfigNotFound { .. } => exit_codes::CONFIG_FAILURE,
            BarrcError::ConfigRead { .. } => exit_codes::CONFIG_FAILURE,
            BarrcError::UserError(_) => exit_codes::USER_ERROR,
            BarrcError::LaunchFailure(_) => exit_codes::LAUNCH_FAILURE,
        }
    }
}

/// Result type alias for barrc operations.
pub type Result<T> = std::result::Result<T, BarrcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_share_exit_code() {
        let missing = BarrcError::ConfigNotFound {
            path: PathBuf::from("/nope/barrc"),
        };
        let unreadable = BarrcError::ConfigRead {
            path: PathBuf::from("/nope/barrc"),
            message: "permission denied".to_string(),
        };
        assert_eq!(missing.exit_code(), exit_codes::CONFIG_FAILURE);
        assert_eq!(unreadable.exit_code(), exit_codes::CONFIG_FAILURE);
    }

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = BarrcError::UserError("no home directory".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn launch_failure_has_correct_exit_code() {
        let err = BarrcError::LaunchFailure("1 of 3 entities".to_string());
        assert_eq!(err.exit_code(), exit_codes::LAUNCH_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = BarrcError::ConfigNotFound {
            path: PathBuf::from("/home/me/.config/bar/barrc"),
        };
        assert_eq!(
            err.to_string(),
            "Cannot locate config: /home/me/.config/bar/barrc"
        );

        let err = BarrcError::ConfigRead {
            path: PathBuf::from("/tmp/barrc"),
            message: "is a directory".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read config file '/tmp/barrc': is a directory"
        );
    }
}
