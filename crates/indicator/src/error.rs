use rolock_config::ConfigError;
use rolock_primitives::DocumentId;
use thiserror::Error;

/// Failure reported by the environment's authoritative read-only toggle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleError {
	#[error("document is not open: {0}")]
	UnknownDocument(DocumentId),
	#[error("read-only toggle rejected for {id}: {reason}")]
	Rejected { id: DocumentId, reason: String },
}

/// Errors surfaced by the indicator controller.
///
/// A missing active document or an ignored scheme are not errors; those
/// paths are plain no-ops.
#[derive(Debug, Error)]
pub enum IndicatorError {
	#[error("indicator configuration unavailable: {0}")]
	ConfigurationUnavailable(#[from] ConfigError),
	#[error(transparent)]
	ExternalToggle(#[from] ToggleError),
}
