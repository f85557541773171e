//! Entity records built from the bar and script config files.
//!
//! Entities are plain declarative data. Runtime process state is tracked by
//! the launcher alongside the entity (see [`crate::process::Launched`]) so
//! records stay comparable and cloneable.

mod bar;
mod script;

pub use bar::{Bar, DockPosition};
pub use script::{Script, ScriptPosition};
