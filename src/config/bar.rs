//! Bar config parser.
//!
//! Every directive line carries a bar reference marker (`1*Geometry=...`).
//! The first line naming an id creates the bar; later lines with the same
//! id update it in place. Comment lines, unknown keys and lines without a
//! marker are skipped without comment.

use super::line::{normalize_color, parse_bool, split_directive, take_bar_marker};
use super::read_config;
use super::types::{ParseDiagnostic, ParsedConfig};
use crate::entity::{Bar, DockPosition};
use crate::error::Result;
use log::debug;
use std::path::{Path, PathBuf};

/// Display index used when `Monitor` is set to something non-numeric.
const FALLBACK_MONITOR: u32 = 1;

/// Setter outcome: `Err(())` means the value was rejected and the field
/// was left alone.
type BarSetter = fn(&mut Bar, &str) -> std::result::Result<(), ()>;

fn bar_setter(key: &str) -> Option<BarSetter> {
    let setter: BarSetter = match key {
        "Geometry" | "Geometery" => |bar, v| {
            bar.geometry = Some(v.to_string());
            Ok(())
        },
        "Position" => |bar, v| {
            bar.dock = DockPosition::from_config(v).ok_or(())?;
            Ok(())
        },
        "ForceDock" => |bar, v| {
            bar.force_dock = parse_bool(v).ok_or(())?;
            Ok(())
        },
        "Permanent" => |bar, v| {
            bar.permanent = parse_bool(v).ok_or(())?;
            Ok(())
        },
        "FIFO" => |bar, v| {
            bar.fifo = Some(PathBuf::from(v));
            Ok(())
        },
        "Monitor" | "Sdir" => |bar, v| {
            bar.render_monitor = Some(v.parse::<u32>().unwrap_or(FALLBACK_MONITOR));
            Ok(())
        },
        "FontOne" | "Font1" => |bar, v| {
            bar.font_primary = Some(v.to_string());
            Ok(())
        },
        "FontTwo" | "Font2" => |bar, v| {
            bar.font_secondary = Some(v.to_string());
            Ok(())
        },
        "ULWidth" => |bar, v| {
            bar.underline_width = v.parse::<i16>().map_err(|_| ())?.into();
            Ok(())
        },
        "BColor" => |bar, v| {
            bar.background = Some(normalize_color(v).ok_or(())?);
            Ok(())
        },
        "FColor" => |bar, v| {
            bar.foreground = Some(normalize_color(v).ok_or(())?);
            Ok(())
        },
        _ => return None,
    };
    Some(setter)
}

#[derive(Debug, Default)]
struct BarAccumulator {
    bars: Vec<Bar>,
    diagnostics: Vec<ParseDiagnostic>,
}

impl BarAccumulator {
    /// Return the bar with this id, creating it on first reference.
    fn bar_mut(&mut self, id: u32) -> &mut Bar {
        let index = match self.bars.iter().position(|bar| bar.id == id) {
            Some(index) => index,
            None => {
                self.bars.push(Bar::new(id));
                debug!(
                    "New bar reference detected: #{} (running total: {})",
                    id,
                    self.bars.len()
                );
                self.bars.len() - 1
            }
        };
        &mut self.bars[index]
    }

    fn apply_line(&mut self, line_no: usize, line: &str) {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return;
        }

        let Some((id, rest)) = take_bar_marker(trimmed) else {
            return;
        };
        if id == 0 {
            return;
        }

        let bar = self.bar_mut(id);
        let Some(directive) = split_directive(&rest) else {
            return;
        };
        let Some(setter) = bar_setter(directive.key) else {
            return;
        };
        let Some(value) = directive.value else {
            return;
        };

        if setter(bar, value).is_err() {
            let diagnostic = ParseDiagnostic::invalid_value(line_no, directive.key, value);
            debug!("bar #{}: {}", id, diagnostic);
            self.diagnostics.push(diagnostic);
        }
    }

    fn finish(self) -> ParsedConfig<Bar> {
        ParsedConfig {
            entities: self.bars,
            diagnostics: self.diagnostics,
        }
    }
}

/// Parse bar config text.
pub fn parse_bar_config(text: &str) -> ParsedConfig<Bar> {
    let mut acc = BarAccumulator::default();
    for (index, line) in text.lines().enumerate() {
        acc.apply_line(index + 1, line);
    }
    acc.finish()
}

/// Read and parse a bar config file.
///
/// # Returns
///
/// * `Ok(ParsedConfig)` - Bars in order of first reference
/// * `Err(BarrcError::ConfigNotFound)` - The file does not exist
/// * `Err(BarrcError::ConfigRead)` - The file exists but could not be read
pub fn load_bar_config(path: &Path) -> Result<ParsedConfig<Bar>> {
    let text = read_config(path)?;
    let parsed = parse_bar_config(&text);
    debug!("{} bars detected in {}", parsed.entities.len(), path.display());
    Ok(parsed)
}
