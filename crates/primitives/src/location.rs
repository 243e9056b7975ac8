use std::path::Path;

use thiserror::Error;
use url::Url;

use crate::DocumentId;

/// Scheme assigned to plain filesystem paths.
pub const FILE_SCHEME: &str = "file";

/// Errors produced when parsing a [`DocumentLocation`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
	#[error("document location is empty")]
	Empty,
	#[error("file URI does not map to a local path: {0}")]
	InvalidFileUri(String),
}

/// Where a document lives: its identity plus the scheme used to classify it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentLocation {
	id: DocumentId,
	scheme: String,
	label: String,
}

impl DocumentLocation {
	/// Parses a URI (`file:///tmp/a.txt`, `output:tasks`) or a bare path.
	///
	/// `file` URIs are identified by their decoded filesystem path so that
	/// `file:///a.txt` and `/a.txt` name the same document.
	pub fn parse(input: &str) -> Result<Self, LocationError> {
		let input = input.trim();
		if input.is_empty() {
			return Err(LocationError::Empty);
		}

		// Single-letter schemes are Windows drive prefixes, not URIs.
		match Url::parse(input) {
			Ok(url) if url.scheme().len() > 1 => Self::from_url(&url),
			_ => Ok(Self::from_path(Path::new(input))),
		}
	}

	/// Builds a `file` location from a filesystem path.
	pub fn from_path(path: &Path) -> Self {
		let id = path.to_string_lossy().into_owned();
		let label = path
			.file_name()
			.map(|name| name.to_string_lossy().into_owned())
			.unwrap_or_else(|| id.clone());
		Self {
			id: DocumentId::new(id),
			scheme: FILE_SCHEME.to_string(),
			label,
		}
	}

	fn from_url(url: &Url) -> Result<Self, LocationError> {
		if url.scheme() == FILE_SCHEME {
			let path = url
				.to_file_path()
				.map_err(|()| LocationError::InvalidFileUri(url.to_string()))?;
			return Ok(Self::from_path(&path));
		}

		let label = url
			.path()
			.rsplit('/')
			.find(|segment| !segment.is_empty())
			.map_or_else(|| url.to_string(), str::to_string);
		Ok(Self {
			id: DocumentId::new(url.as_str()),
			scheme: url.scheme().to_string(),
			label,
		})
	}

	pub fn id(&self) -> &DocumentId {
		&self.id
	}

	pub fn scheme(&self) -> &str {
		&self.scheme
	}

	/// Short human-readable name, as shown on a tab.
	pub fn label(&self) -> &str {
		&self.label
	}
}
