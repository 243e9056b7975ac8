//! Configuration for the read-only session indicator.
//!
//! Configuration is written in TOML. The only section today is
//! `[indicator]`:
//!
//! ```toml
//! [indicator]
//! # Show just the lock glyph instead of the full "R-O ... Press to LOCK" text.
//! icon-only = true
//! ```
//!
//! # Configuration Files
//!
//! The default location is `$XDG_CONFIG_HOME/rolock/config.toml` (or the
//! platform equivalent reported by [`dirs::config_dir`]). A missing file is
//! not an error and yields [`Config::default`].
//!
//! # Freshness
//!
//! Consumers read configuration through a [`ConfigProvider`] every time they
//! need it rather than caching a snapshot, so edits made between two reads
//! are always observed.

pub mod error;
pub mod provider;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use error::{ConfigError, Result};
pub use provider::{ConfigProvider, FileConfigProvider, OverrideConfig, SharedConfig};

/// Application name used for the configuration directory.
pub const APP_DIR: &str = "rolock";

/// Configuration file name inside [`APP_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// Parsed configuration file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
	/// Statusline indicator settings.
	pub indicator: IndicatorConfig,
}

/// Settings for the read-only statusline indicator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct IndicatorConfig {
	/// Render only the lock glyph, without the explanatory text.
	pub icon_only: bool,
}

impl Config {
	/// Parse a TOML string into a [`Config`].
	///
	/// Unknown keys are ignored so that newer files remain readable.
	pub fn parse(input: &str) -> Result<Self> {
		Ok(toml::from_str(input)?)
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		toml::from_str(&content).map_err(|e| ConfigError::Parse {
			path: path.to_path_buf(),
			error: e,
		})
	}
}

/// Returns the default configuration file path, if the platform has a
/// configuration directory.
pub fn default_config_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}
