use rolock_indicator::IndicatorError;
use rolock_primitives::{DocumentId, LocationError};
use thiserror::Error;

/// Errors from driving the headless editor.
#[derive(Debug, Error)]
pub enum HostError {
	#[error(transparent)]
	InvalidLocation(#[from] LocationError),
	#[error("document is not open: {0}")]
	UnknownDocument(DocumentId),
	#[error("unknown command: {0}")]
	UnknownCommand(String),
	#[error("command failed: {0}")]
	Command(#[from] IndicatorError),
}

pub type Result<T> = std::result::Result<T, HostError>;
