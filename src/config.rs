//! User configuration.
//!
//! Read from `$XDG_CONFIG_HOME/visioncalc/config.toml` (or the path given on
//! the command line). A missing default file means built-in defaults.
//!
//! ```toml
//! fraction_digits = 10
//! copy_on_equals = false
//!
//! [logging]
//! level = "warn"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::calculator::{DEFAULT_FRACTION_DIGITS, MAX_FRACTION_DIGITS};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum fractional digits shown in results
    pub fraction_digits: u32,
    /// Copy the display to the clipboard whenever `=` is pressed
    pub copy_on_equals: bool,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `"warn"` or `"visioncalc=debug"`
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fraction_digits: DEFAULT_FRACTION_DIGITS,
            copy_on_equals: false,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Location of the config file when none is given explicitly.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("visioncalc").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// tried and silently skipped if absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        let contents = std::fs::read_to_string(&path).map_err(|source| Error::ConfigRead {
            path: path.clone(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| Error::ConfigParse { path, source })
    }

    /// Fractional digit cap, clamped to what the decimal type can hold.
    pub fn fraction_digits(&self) -> u32 {
        self.fraction_digits.min(MAX_FRACTION_DIGITS)
    }
}
