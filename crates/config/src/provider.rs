//! Configuration providers.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::{Config, ConfigError, IndicatorConfig, Result};

/// Source of configuration, consulted on every read.
pub trait ConfigProvider {
	/// Returns the current configuration.
	fn load(&self) -> Result<Config>;

	/// Returns the current indicator settings.
	fn indicator(&self) -> Result<IndicatorConfig> {
		self.load().map(|config| config.indicator)
	}
}

/// Reads a TOML file from disk on every [`load`](ConfigProvider::load).
///
/// A missing file yields the default configuration; any other I/O or parse
/// failure is reported.
#[derive(Debug, Clone)]
pub struct FileConfigProvider {
	path: PathBuf,
}

impl FileConfigProvider {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl ConfigProvider for FileConfigProvider {
	fn load(&self) -> Result<Config> {
		match Config::load(&self.path) {
			Err(ConfigError::Io { error, .. }) if error.kind() == ErrorKind::NotFound => {
				debug!(path = %self.path.display(), "config.missing_file");
				Ok(Config::default())
			}
			other => other,
		}
	}
}

/// In-memory configuration that can be adjusted at runtime.
///
/// Clones share the same underlying value.
#[derive(Debug, Clone, Default)]
pub struct SharedConfig {
	inner: Arc<RwLock<Config>>,
}

impl SharedConfig {
	pub fn new(config: Config) -> Self {
		Self {
			inner: Arc::new(RwLock::new(config)),
		}
	}

	/// Replaces the whole configuration.
	pub fn replace(&self, config: Config) {
		*self.inner.write() = config;
	}

	pub fn set_icon_only(&self, icon_only: bool) {
		self.inner.write().indicator.icon_only = icon_only;
	}

	pub fn snapshot(&self) -> Config {
		*self.inner.read()
	}
}

impl ConfigProvider for SharedConfig {
	fn load(&self) -> Result<Config> {
		Ok(self.snapshot())
	}
}

/// Runtime overrides layered over another provider.
///
/// The base provider is still consulted on every load, so file edits and
/// read failures show through. Clones share the same overrides.
#[derive(Clone)]
pub struct OverrideConfig {
	base: Arc<dyn ConfigProvider + Send + Sync>,
	icon_only: Arc<RwLock<Option<bool>>>,
}

impl OverrideConfig {
	pub fn new(base: impl ConfigProvider + Send + Sync + 'static) -> Self {
		Self {
			base: Arc::new(base),
			icon_only: Arc::new(RwLock::new(None)),
		}
	}

	/// Forces `icon-only` regardless of what the base provider says.
	pub fn set_icon_only(&self, icon_only: bool) {
		*self.icon_only.write() = Some(icon_only);
	}

	/// Drops the `icon-only` override, deferring to the base provider again.
	pub fn clear_icon_only(&self) {
		*self.icon_only.write() = None;
	}

	pub fn icon_only_override(&self) -> Option<bool> {
		*self.icon_only.read()
	}
}

impl ConfigProvider for OverrideConfig {
	fn load(&self) -> Result<Config> {
		let mut config = self.base.load()?;
		if let Some(icon_only) = self.icon_only_override() {
			config.indicator.icon_only = icon_only;
		}
		Ok(config)
	}
}
