//! Script entity: a helper process that produces data for a bar.

use std::fmt;
use std::path::PathBuf;

/// Where the bar should place a script's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScriptPosition {
    Left,
    #[default]
    Center,
    Right,
}

impl ScriptPosition {
    /// Parse a config value, ignoring case.
    pub fn from_config(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "left" => Some(Self::Left),
            "center" | "centre" => Some(Self::Center),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptPosition::Left => "Left",
            ScriptPosition::Center => "Center",
            ScriptPosition::Right => "Right",
        }
    }
}

pub const DEFAULT_BACKGROUND: &str = "#000000";
pub const DEFAULT_FOREGROUND: &str = "#FFFFFF";

/// A configured script.
///
/// Only `path` and `arguments` drive the launch. `poll`, `frequency` and the
/// display attributes are carried for the bar's input protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    /// May be empty: a bare `Name:` line still starts a record.
    pub name: String,
    /// Executable path, or a command name resolved through `PATH`.
    pub path: String,
    /// Raw argument string, split with shell word rules at launch.
    pub arguments: String,
    pub poll: bool,
    /// Poll interval text. Not interpreted here.
    pub frequency: Option<String>,
    pub fifo: Option<PathBuf>,
    pub swap_color: bool,
    pub position: ScriptPosition,
    pub background: String,
    pub foreground: String,
    pub underline_color: String,
    pub clickable: bool,
    pub on_click: Option<String>,
    pub underline: bool,
    pub overline: bool,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            name: String::new(),
            path: String::new(),
            arguments: String::new(),
            poll: false,
            frequency: None,
            fifo: None,
            swap_color: false,
            position: ScriptPosition::default(),
            background: DEFAULT_BACKGROUND.to_string(),
            foreground: DEFAULT_FOREGROUND.to_string(),
            underline_color: DEFAULT_FOREGROUND.to_string(),
            clickable: false,
            on_click: None,
            underline: false,
            overline: false,
        }
    }
}

impl Script {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Label for logs; falls back to the path when the name is empty.
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.path
        } else {
            &self.name
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Script Name: {}", self.name)?;
        writeln!(f, "\tPath: {}", self.path)?;
        writeln!(f, "\tArguments: {}", self.arguments)?;
        writeln!(f, "\tPoll: {}", self.poll)?;
        writeln!(
            f,
            "\tFrequency: {}",
            self.frequency.as_deref().unwrap_or("")
        )?;
        writeln!(
            f,
            "\tFIFO: {}",
            self.fifo
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        )?;
        writeln!(f, "\tSwapColor: {}", self.swap_color)?;
        writeln!(f, "\tPosition: {}", self.position.as_str())?;
        writeln!(f, "\tBColor: {}", self.background)?;
        writeln!(f, "\tFColor: {}", self.foreground)?;
        writeln!(f, "\tUColor: {}", self.underline_color)?;
        writeln!(f, "\tClickable: {}", self.clickable)?;
        writeln!(f, "\tOnClick: {}", self.on_click.as_deref().unwrap_or(""))?;
        writeln!(f, "\tUnderline: {}", self.underline)?;
        write!(f, "\tOverline: {}", self.overline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_script_colors() {
        let script = Script::default();
        assert_eq!(script.background, "#000000");
        assert_eq!(script.foreground, "#FFFFFF");
        assert_eq!(script.underline_color, "#FFFFFF");
        assert_eq!(script.position, ScriptPosition::Center);
        assert!(!script.poll);
    }

    #[test]
    fn test_label_falls_back_to_path() {
        let mut script = Script::named("");
        script.path = "/usr/local/bin/clock".to_string();
        assert_eq!(script.label(), "/usr/local/bin/clock");

        script.name = "clock".to_string();
        assert_eq!(script.label(), "clock");
    }

    #[test]
    fn test_position_parsing() {
        assert_eq!(ScriptPosition::from_config("Left"), Some(ScriptPosition::Left));
        assert_eq!(ScriptPosition::from_config("RIGHT"), Some(ScriptPosition::Right));
        assert_eq!(ScriptPosition::from_config("middle"), None);
    }

    #[test]
    fn test_dump_starts_with_name() {
        let dump = Script::named("clock").to_string();
        assert!(dump.starts_with("Script Name: clock"));
        assert!(dump.contains("\tPosition: Center"));
    }
}
