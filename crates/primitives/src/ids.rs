use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Opaque, stable key identifying an open document.
///
/// For file-backed documents this is the canonical filesystem path; other
/// locations use their full URI. Two ids are equal iff their strings are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(Arc<str>);

impl DocumentId {
	pub fn new(id: impl Into<Arc<str>>) -> Self {
		Self(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for DocumentId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl Borrow<str> for DocumentId {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl From<&str> for DocumentId {
	fn from(id: &str) -> Self {
		Self::new(id)
	}
}

impl From<String> for DocumentId {
	fn from(id: String) -> Self {
		Self::new(id)
	}
}
