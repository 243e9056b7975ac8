use rustc_hash::FxHashSet;

/// Schemes excluded from read-only tracking by default.
///
/// These name views that are not backed by a persistable document.
pub const DEFAULT_IGNORED_SCHEMES: &[&str] = &["output", "debug", "git", "log", "settings", "search"];

/// Set of location schemes that never participate in read-only tracking.
#[derive(Debug, Clone)]
pub struct IgnoredSchemes(FxHashSet<String>);

impl IgnoredSchemes {
	pub fn new<I, S>(schemes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self(schemes.into_iter().map(Into::into).collect())
	}

	/// Ignores nothing.
	pub fn none() -> Self {
		Self(FxHashSet::default())
	}

	pub fn contains(&self, scheme: &str) -> bool {
		self.0.contains(scheme)
	}
}

impl Default for IgnoredSchemes {
	fn default() -> Self {
		Self::new(DEFAULT_IGNORED_SCHEMES.iter().copied())
	}
}
