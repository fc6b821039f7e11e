// Run configuration - environment lookup and validation

use crate::error::{FooterlinkError, Result};
use log::LevelFilter;
use std::path::PathBuf;

/// Environment variable naming the directory to scan.
pub const PROJECT_HOME_VAR: &str = "PROJECT_HOME";
/// Environment variable that enables debug output when set to `True`.
pub const DEBUG_VAR: &str = "DEBUG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub root: PathBuf,
    pub debug: bool,
    pub dry_run: bool,
}

impl Config {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Config {
            root: root.into(),
            debug: false,
            dry_run: false,
        }
    }

    /// Read `PROJECT_HOME` and `DEBUG` from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. `PROJECT_HOME` falls back to the
    /// current directory; debug output needs `DEBUG` to be exactly `True`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let root = match lookup(PROJECT_HOME_VAR) {
            Some(dir) => PathBuf::from(dir),
            None => std::env::current_dir()?,
        };
        let debug = lookup(DEBUG_VAR).as_deref() == Some("True");

        Ok(Config {
            root,
            debug,
            dry_run: false,
        })
    }

    /// Make sure the root exists and is a directory.
    pub fn validate(&self) -> Result<()> {
        if !self.root.exists() {
            return Err(FooterlinkError::Config(format!(
                "Project directory does not exist: {}",
                self.root.display()
            )));
        }
        if !self.root.is_dir() {
            return Err(FooterlinkError::Config(format!(
                "Project path is not a directory: {}",
                self.root.display()
            )));
        }
        Ok(())
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_project_home_from_env() {
        let config = Config::from_lookup(lookup_from(&[("PROJECT_HOME", "/srv/docs")])).unwrap();
        assert_eq!(config.root, PathBuf::from("/srv/docs"));
        assert!(!config.debug);
        assert!(!config.dry_run);
    }

    #[test]
    fn test_project_home_defaults_to_cwd() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.root, std::env::current_dir().unwrap());
    }

    #[test]
    fn test_debug_requires_exact_true() {
        let on = Config::from_lookup(lookup_from(&[("DEBUG", "True")])).unwrap();
        assert!(on.debug);
        assert_eq!(on.log_level(), LevelFilter::Debug);

        for value in ["true", "1", "TRUE", "yes", ""] {
            let off = Config::from_lookup(lookup_from(&[("DEBUG", value)])).unwrap();
            assert!(!off.debug, "DEBUG={value:?} should not enable debug");
            assert_eq!(off.log_level(), LevelFilter::Info);
        }
    }

    #[test]
    fn test_validate_missing_root() {
        let tmp = TempDir::new().unwrap();
        let config = Config::new(tmp.path().join("nope"));
        let err = config.validate().unwrap_err();
        assert!(matches!(err, FooterlinkError::Config(_)));
    }

    #[test]
    fn test_validate_file_root() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("README.md");
        std::fs::write(&file, "# Not a dir").unwrap();
        assert!(Config::new(&file).validate().is_err());
        assert!(Config::new(tmp.path()).validate().is_ok());
    }
}
