//! Config loading for barrc.
//!
//! Two line-oriented files drive the supervisor: `barrc` describes the bars
//! and `scriptrc` the helper scripts. Both parsers are tolerant: unknown
//! keys and malformed lines are skipped, and only file-level I/O problems
//! are errors.

mod bar;
mod line;
mod paths;
mod script;
pub mod types;


pub use bar::load_bar_config;
pub use paths::ConfigPaths;
pub use script::load_script_config;
pub use types::ParsedConfig;

use crate::error::{BarrcError, Result};
use log::debug;
use std::io::ErrorKind;
use std::path::Path;

/// Read a config file, mapping a missing file to `ConfigNotFound`.
fn read_config(path: &Path) -> Result<String> {
    debug!("Attempting to open file: {}", path.display());

    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => BarrcError::ConfigNotFound {
            path: path.to_path_buf(),
        },
        _ => BarrcError::ConfigRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        },
    })?;

    debug!("{} opened.", path.display());
    Ok(text)
}
