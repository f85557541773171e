//! Bar entity: one instance of the external status-bar process.

use std::fmt;
use std::path::PathBuf;

/// Screen edge a bar docks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DockPosition {
    #[default]
    Top,
    Bottom,
}

impl DockPosition {
    /// Match a config value. The value only needs to contain the word.
    pub fn from_config(value: &str) -> Option<Self> {
        if value.contains("Top") {
            Some(Self::Top)
        } else if value.contains("Bottom") {
            Some(Self::Bottom)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DockPosition::Top => "Top",
            DockPosition::Bottom => "Bottom",
        }
    }
}

/// A configured bar.
///
/// Optional text attributes are `None` until a config line sets them to a
/// non-empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    /// Reference id from the `<N>*` marker, unique per config.
    pub id: u32,
    /// Geometry string such as `1920x20+0+0`, passed through verbatim.
    pub geometry: Option<String>,
    pub dock: DockPosition,
    pub force_dock: bool,
    /// Keep the bar resident instead of exiting after stdin closes.
    pub permanent: bool,
    /// Named pipe streamed into the bar's stdin.
    pub fifo: Option<PathBuf>,
    /// Display index to render on; `None` means the primary display.
    pub render_monitor: Option<u32>,
    pub font_primary: Option<String>,
    pub font_secondary: Option<String>,
    /// Raw underline width; values of 1 or less mean unset.
    pub underline_width: i32,
    pub background: Option<String>,
    pub foreground: Option<String>,
}

impl Bar {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            geometry: None,
            dock: DockPosition::default(),
            force_dock: false,
            permanent: true,
            fifo: None,
            render_monitor: None,
            font_primary: None,
            font_secondary: None,
            underline_width: 0,
            background: None,
            foreground: None,
        }
    }

    /// Underline width if it is actually configured (strictly greater than 1).
    pub fn effective_underline_width(&self) -> Option<i32> {
        (self.underline_width > 1).then_some(self.underline_width)
    }

    /// Fonts to hand to the bar. The secondary font only counts when a
    /// primary font is set.
    pub fn fonts(&self) -> Vec<&str> {
        match (&self.font_primary, &self.font_secondary) {
            (Some(primary), Some(secondary)) => vec![primary.as_str(), secondary.as_str()],
            (Some(primary), None) => vec![primary.as_str()],
            (None, _) => Vec::new(),
        }
    }
}

fn or_empty(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

/// Verbose dump used by `-v`.
impl fmt::Display for Bar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bar: #{}", self.id)?;
        writeln!(f, "\tGeo: {}", or_empty(&self.geometry))?;
        writeln!(f, "\tDock: {}", self.dock.as_str())?;
        writeln!(f, "\tForceD: {}", self.force_dock)?;
        writeln!(f, "\tPerm: {}", self.permanent)?;
        writeln!(
            f,
            "\tFIFO: {}",
            self.fifo
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        )?;
        match self.render_monitor {
            Some(monitor) => writeln!(f, "\tSDIR: {}", monitor)?,
            None => writeln!(f, "\tSDIR: primary")?,
        }
        writeln!(f, "\tF1: {}", or_empty(&self.font_primary))?;
        writeln!(f, "\tF2: {}", or_empty(&self.font_secondary))?;
        writeln!(f, "\tULW: {}", self.underline_width)?;
        writeln!(f, "\tBGC: {}", or_empty(&self.background))?;
        write!(f, "\tFGC: {}", or_empty(&self.foreground))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bar_has_documented_defaults() {
        let bar = Bar::new(3);
        assert_eq!(bar.id, 3);
        assert_eq!(bar.dock, DockPosition::Top);
        assert!(!bar.force_dock);
        assert!(bar.permanent);
        assert_eq!(bar.render_monitor, None);
        assert_eq!(bar.underline_width, 0);
        assert!(bar.geometry.is_none());
    }

    #[test]
    fn test_underline_width_of_one_is_unset() {
        let mut bar = Bar::new(1);
        bar.underline_width = 1;
        assert_eq!(bar.effective_underline_width(), None);
        bar.underline_width = 2;
        assert_eq!(bar.effective_underline_width(), Some(2));
        bar.underline_width = -4;
        assert_eq!(bar.effective_underline_width(), None);
    }

    #[test]
    fn test_secondary_font_requires_primary() {
        let mut bar = Bar::new(1);
        bar.font_secondary = Some("Mono-8".to_string());
        assert!(bar.fonts().is_empty());

        bar.font_primary = Some("Sans-10".to_string());
        assert_eq!(bar.fonts(), vec!["Sans-10", "Mono-8"]);
    }

    #[test]
    fn test_dock_position_matches_substring() {
        assert_eq!(DockPosition::from_config("Top"), Some(DockPosition::Top));
        assert_eq!(
            DockPosition::from_config("AtBottom"),
            Some(DockPosition::Bottom)
        );
        assert_eq!(DockPosition::from_config("left"), None);
    }

    #[test]
    fn test_dump_lists_every_field() {
        let mut bar = Bar::new(2);
        bar.geometry = Some("1920x20+0+0".to_string());
        let dump = bar.to_string();
        assert!(dump.starts_with("Bar: #2"));
        assert!(dump.contains("\tGeo: 1920x20+0+0"));
        assert!(dump.contains("\tSDIR: primary"));
        assert!(dump.contains("\tFGC: "));
    }
}
