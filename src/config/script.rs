//! Script config parser.
//!
//! Records are positional: each `Name` line starts a new script, even when
//! the name itself is empty, and every following attribute line applies to
//! that script until the next `Name` line.

use super::line::{normalize_color, parse_bool, split_directive};
use super::read_config;
use super::types::{ParseDiagnostic, ParsedConfig};
use crate::entity::{Script, ScriptPosition};
use crate::error::Result;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Key that starts a new script record.
pub const NAME_KEY: &str = "Name";

type ScriptSetter = fn(&mut Script, &str) -> std::result::Result<(), ()>;

fn script_setter(key: &str) -> Option<ScriptSetter> {
    let setter: ScriptSetter = match key {
        "Path" => |s, v| {
            s.path = v.to_string();
            Ok(())
        },
        "Arguments" => |s, v| {
            s.arguments = v.to_string();
            Ok(())
        },
        "Poll" => |s, v| {
            s.poll = parse_bool(v).ok_or(())?;
            Ok(())
        },
        "Frequency" => |s, v| {
            s.frequency = Some(v.to_string());
            Ok(())
        },
        "FIFO" => |s, v| {
            s.fifo = Some(PathBuf::from(v));
            Ok(())
        },
        "Position" => |s, v| {
            s.position = ScriptPosition::from_config(v).ok_or(())?;
            Ok(())
        },
        "SwapColor" => |s, v| {
            s.swap_color = parse_bool(v).ok_or(())?;
            Ok(())
        },
        "BColor" => |s, v| {
            s.background = normalize_color(v).ok_or(())?;
            Ok(())
        },
        "FColor" => |s, v| {
            s.foreground = normalize_color(v).ok_or(())?;
            Ok(())
        },
        "UColor" => |s, v| {
            s.underline_color = normalize_color(v).ok_or(())?;
            Ok(())
        },
        "Clickable" => |s, v| {
            s.clickable = parse_bool(v).ok_or(())?;
            Ok(())
        },
        "OnClick" => |s, v| {
            s.on_click = Some(v.to_string());
            Ok(())
        },
        "Underline" => |s, v| {
            s.underline = parse_bool(v).ok_or(())?;
            Ok(())
        },
        "Overline" => |s, v| {
            s.overline = parse_bool(v).ok_or(())?;
            Ok(())
        },
        _ => return None,
    };
    Some(setter)
}

#[derive(Debug, Default)]
struct ScriptAccumulator {
    scripts: Vec<Script>,
    diagnostics: Vec<ParseDiagnostic>,
}

impl ScriptAccumulator {
    fn apply_line(&mut self, line_no: usize, line: &str) {
        let Some(directive) = split_directive(line) else {
            return;
        };

        if directive.key == NAME_KEY {
            self.scripts
                .push(Script::named(directive.value.unwrap_or_default()));
            debug!(
                "New script reference detected: '{}' (running total: {})",
                directive.value.unwrap_or_default(),
                self.scripts.len()
            );
            return;
        }

        let Some(setter) = script_setter(directive.key) else {
            return;
        };

        let Some(script) = self.scripts.last_mut() else {
            let diagnostic = ParseDiagnostic::orphan_attribute(line_no, directive.key);
            warn!("{}", diagnostic);
            self.diagnostics.push(diagnostic);
            return;
        };

        let Some(value) = directive.value else {
            return;
        };

        if setter(script, value).is_err() {
            let diagnostic = ParseDiagnostic::invalid_value(line_no, directive.key, value);
            debug!("script '{}': {}", script.name, diagnostic);
            self.diagnostics.push(diagnostic);
        }
    }

    fn finish(self) -> ParsedConfig<Script> {
        ParsedConfig {
            entities: self.scripts,
            diagnostics: self.diagnostics,
        }
    }
}

/// Parse script config text.
pub fn parse_script_config(text: &str) -> ParsedConfig<Script> {
    let mut acc = ScriptAccumulator::default();
    for (index, line) in text.lines().enumerate() {
        acc.apply_line(index + 1, line);
    }
    acc.finish()
}

/// Read and parse a script config file.
pub fn load_script_config(path: &Path) -> Result<ParsedConfig<Script>> {
    let text = read_config(path)?;
    let parsed = parse_script_config(&text);
    debug!(
        "{} scripts detected in {}",
        parsed.entities.len(),
        path.display()
    );
    Ok(parsed)
}
