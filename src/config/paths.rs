//! Config file locations.

use crate::error::{BarrcError, Result};
use std::path::{Path, PathBuf};

/// Directory under the home directory that holds both config files.
pub const CONFIG_DIR: &str = ".config/bar";
pub const BAR_CONFIG_NAME: &str = "barrc";
pub const SCRIPT_CONFIG_NAME: &str = "scriptrc";

/// Resolved paths to the bar and script configs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    pub bar: PathBuf,
    pub scripts: PathBuf,
    /// Whether the script path was given explicitly. A missing explicit
    /// script config is fatal; a missing default one is not.
    pub scripts_explicit: bool,
}

impl ConfigPaths {
    /// Default paths under `home`.
    ///
    /// Prefers `~/.config/bar/<name>`. When that file is absent and the
    /// dotfile `~/.<name>` exists, the dotfile is used instead.
    pub fn from_home(home: &Path) -> Self {
        Self {
            bar: pick_default(home, BAR_CONFIG_NAME),
            scripts: pick_default(home, SCRIPT_CONFIG_NAME),
            scripts_explicit: false,
        }
    }

    /// Resolve both paths, falling back to the current user's home
    /// directory for whichever one was not given.
    pub fn resolve(bar: Option<PathBuf>, scripts: Option<PathBuf>) -> Result<Self> {
        Self::resolve_with(bar, scripts, dirs::home_dir)
    }

    fn resolve_with(
        bar: Option<PathBuf>,
        scripts: Option<PathBuf>,
        home_dir: impl FnOnce() -> Option<PathBuf>,
    ) -> Result<Self> {
        if let (Some(bar), Some(scripts)) = (&bar, &scripts) {
            return Ok(Self {
                bar: bar.clone(),
                scripts: scripts.clone(),
                scripts_explicit: true,
            });
        }

        let home = home_dir().ok_or_else(|| {
            BarrcError::UserError(
                "could not determine home directory; pass both config paths with -c and --scripts"
                    .to_string(),
            )
        })?;
        Ok(Self::from_home(&home).with_overrides(bar, scripts))
    }

    /// Apply command line overrides.
    pub fn with_overrides(mut self, bar: Option<PathBuf>, scripts: Option<PathBuf>) -> Self {
        if let Some(bar) = bar {
            self.bar = bar;
        }
        if let Some(scripts) = scripts {
            self.scripts = scripts;
            self.scripts_explicit = true;
        }
        self
    }
}

fn pick_default(home: &Path, name: &str) -> PathBuf {
    let primary = home.join(CONFIG_DIR).join(name);
    if primary.exists() {
        return primary;
    }

    let legacy = home.join(format!(".{}", name));
    if legacy.exists() { legacy } else { primary }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_point_into_config_dir() {
        let home = TempDir::new().unwrap();
        let paths = ConfigPaths::from_home(home.path());

        assert_eq!(paths.bar, home.path().join(".config/bar/barrc"));
        assert_eq!(paths.scripts, home.path().join(".config/bar/scriptrc"));
        assert!(!paths.scripts_explicit);
    }

    #[test]
    fn test_legacy_dotfile_used_when_primary_missing() {
        let home = TempDir::new().unwrap();
        std::fs::write(home.path().join(".barrc"), "1*Geometry=1x1\n").unwrap();

        let paths = ConfigPaths::from_home(home.path());
        assert_eq!(paths.bar, home.path().join(".barrc"));
        assert_eq!(paths.scripts, home.path().join(".config/bar/scriptrc"));
    }

    #[test]
    fn test_primary_wins_over_legacy() {
        let home = TempDir::new().unwrap();
        let dir = home.path().join(CONFIG_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("barrc"), "").unwrap();
        std::fs::write(home.path().join(".barrc"), "").unwrap();

        let paths = ConfigPaths::from_home(home.path());
        assert_eq!(paths.bar, dir.join("barrc"));
    }

    #[test]
    fn test_overrides_replace_defaults() {
        let home = TempDir::new().unwrap();
        let paths = ConfigPaths::from_home(home.path())
            .with_overrides(Some(PathBuf::from("/tmp/custom.barrc")), None);

        assert_eq!(paths.bar, PathBuf::from("/tmp/custom.barrc"));
        assert!(!paths.scripts_explicit);

        let paths = paths.with_overrides(None, Some(PathBuf::from("/tmp/custom.scriptrc")));
        assert_eq!(paths.scripts, PathBuf::from("/tmp/custom.scriptrc"));
        assert!(paths.scripts_explicit);
    }

    #[test]
    fn test_explicit_paths_need_no_home_directory() {
        let paths = ConfigPaths::resolve_with(
            Some(PathBuf::from("/tmp/b")),
            Some(PathBuf::from("/tmp/s")),
            || None,
        )
        .unwrap();

        assert_eq!(paths.bar, PathBuf::from("/tmp/b"));
        assert_eq!(paths.scripts, PathBuf::from("/tmp/s"));
        assert!(paths.scripts_explicit);
    }

    #[test]
    fn test_missing_home_is_user_error_when_a_default_is_needed() {
        let err = ConfigPaths::resolve_with(Some(PathBuf::from("/tmp/b")), None, || None)
            .unwrap_err();
        assert!(matches!(err, BarrcError::UserError(_)));
    }

    #[test]
    fn test_resolve_uses_home_for_missing_paths() {
        let home = TempDir::new().unwrap();
        let home_path = home.path().to_path_buf();
        let paths = ConfigPaths::resolve_with(Some(PathBuf::from("/tmp/b")), None, || {
            Some(home_path)
        })
        .unwrap();

        assert_eq!(paths.bar, PathBuf::from("/tmp/b"));
        assert_eq!(paths.scripts, home.path().join(".config/bar/scriptrc"));
        assert!(!paths.scripts_explicit);
    }
}
