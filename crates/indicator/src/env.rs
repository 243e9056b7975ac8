//! Boundary between the indicator and the hosting editor.
//!
//! Everything the indicator needs from the outside world goes through
//! [`EditorEnvironment`]: focus, scheme classification, configuration, the
//! authoritative toggle, command registration and change notifications.

use std::fmt;
use std::rc::Rc;

use rolock_config::{ConfigError, IndicatorConfig};
use rolock_primitives::{BoxFutureLocal, DocumentId, DocumentLocation};

use crate::{IndicatorError, ToggleError};

/// Name of the command surface bound to the toggle action.
pub const TOGGLE_COMMAND: &str = "readonly.toggle-indicator";

/// Human-readable title for [`TOGGLE_COMMAND`].
pub const TOGGLE_COMMAND_TITLE: &str = "Toggle read-only for the active document";

/// Invocable toggle action, shared by the indicator click and the named
/// command.
pub type ToggleAction = Rc<dyn Fn() -> BoxFutureLocal<'static, Result<(), IndicatorError>>>;

/// Callback invoked by the environment for every [`IndicatorEvent`].
///
/// Errors are returned to the environment, which is responsible for
/// reporting them.
pub type EventHandler = Rc<dyn Fn(&IndicatorEvent) -> Result<(), IndicatorError>>;

/// Handle for an [`EventHandler`] registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Changes the environment reports to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndicatorEvent {
	/// Focus moved to another document, or away from all documents.
	ActiveDocumentChanged,
	/// The authoritative toggle changed membership for `id`.
	ReadOnlyMembershipChanged { id: DocumentId },
	/// Configuration may have changed.
	ConfigurationChanged,
}

impl fmt::Display for IndicatorEvent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::ActiveDocumentChanged => f.write_str("active-document-changed"),
			Self::ReadOnlyMembershipChanged { id } => write!(f, "read-only-changed({id})"),
			Self::ConfigurationChanged => f.write_str("configuration-changed"),
		}
	}
}

/// Services the hosting editor provides to the indicator.
///
/// All methods are called from the editor's event loop. Returned futures
/// are polled on that same loop and need not be `Send`.
pub trait EditorEnvironment {
	/// Whether documents with this location scheme are out of scope.
	fn is_ignored_scheme(&self, scheme: &str) -> bool;

	/// The focused document, read fresh on every call.
	fn active_document(&self) -> Option<DocumentLocation>;

	/// Tab label of the focused document.
	fn active_document_label(&self) -> Option<String>;

	/// Current indicator settings.
	fn indicator_config(&self) -> Result<IndicatorConfig, ConfigError>;

	/// Flips read-only state for `id` and updates the session store.
	///
	/// This is the single source of truth for membership changes.
	fn toggle_read_only_in_session<'a>(
		&'a self,
		id: &'a DocumentId,
	) -> BoxFutureLocal<'a, Result<(), ToggleError>>;

	/// Returns keyboard focus to the active editor surface.
	fn refocus_active_editor(&self) -> BoxFutureLocal<'_, ()>;

	fn register_command(&self, name: &'static str, action: ToggleAction);

	fn unregister_command(&self, name: &'static str);

	fn subscribe(&self, handler: EventHandler) -> SubscriptionId;

	fn unsubscribe(&self, id: SubscriptionId);
}
