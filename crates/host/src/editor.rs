//! Headless editor: open documents, focus, commands and change dispatch.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use rolock_config::{ConfigError, ConfigProvider, IndicatorConfig};
use rolock_indicator::{
	EditorEnvironment, EventHandler, IndicatorEvent, SubscriptionId, ToggleAction, ToggleError,
};
use rolock_primitives::{BoxFutureLocal, DocumentId, DocumentLocation};
use rolock_session::SessionStateStore;
use rustc_hash::FxHashMap;
use tracing::{debug, trace, warn};

use crate::{HostError, IgnoredSchemes, Result};

/// Editor environment without a UI.
///
/// Holds open documents in tab order, tracks focus, owns the authoritative
/// read-only toggle and dispatches change notifications to subscribers.
pub struct HeadlessEditor {
	store: Arc<SessionStateStore>,
	config: Box<dyn ConfigProvider>,
	ignored: IgnoredSchemes,
	documents: RefCell<Vec<DocumentLocation>>,
	active: RefCell<Option<DocumentId>>,
	commands: RefCell<FxHashMap<&'static str, ToggleAction>>,
	handlers: RefCell<Vec<(SubscriptionId, EventHandler)>>,
	next_subscription: Cell<u64>,
	focus_requests: Cell<u64>,
}

impl HeadlessEditor {
	pub fn new(store: Arc<SessionStateStore>, config: impl ConfigProvider + 'static) -> Self {
		Self {
			store,
			config: Box::new(config),
			ignored: IgnoredSchemes::default(),
			documents: RefCell::new(Vec::new()),
			active: RefCell::new(None),
			commands: RefCell::new(FxHashMap::default()),
			handlers: RefCell::new(Vec::new()),
			next_subscription: Cell::new(1),
			focus_requests: Cell::new(0),
		}
	}

	pub fn with_ignored_schemes(mut self, ignored: IgnoredSchemes) -> Self {
		self.ignored = ignored;
		self
	}

	pub fn store(&self) -> &Arc<SessionStateStore> {
		&self.store
	}

	/// Opens `location` (or focuses it if already open).
	pub fn open(&self, location: &str) -> Result<DocumentId> {
		let location = DocumentLocation::parse(location)?;
		let id = location.id().clone();
		{
			let mut documents = self.documents.borrow_mut();
			if !documents.iter().any(|doc| doc.id() == &id) {
				debug!(%id, scheme = location.scheme(), "editor.open");
				documents.push(location);
			}
		}
		self.set_active(Some(id.clone()));
		Ok(id)
	}

	/// Moves focus to an already open document.
	pub fn focus(&self, location: &str) -> Result<()> {
		let id = self.resolve_open(location)?;
		self.set_active(Some(id));
		Ok(())
	}

	/// Closes a document. If it had focus, focus moves to the neighbouring
	/// tab, preferring the one before it.
	///
	/// Read-only membership is session-scoped and survives the close.
	pub fn close(&self, location: &str) -> Result<()> {
		let id = self.resolve_open(location)?;
		let next_active = {
			let mut documents = self.documents.borrow_mut();
			let Some(index) = documents.iter().position(|doc| doc.id() == &id) else {
				return Err(HostError::UnknownDocument(id));
			};
			documents.remove(index);
			debug!(%id, "editor.close");
			documents
				.get(index.saturating_sub(1))
				.map(|doc| doc.id().clone())
		};

		let was_active = self.active.borrow().as_ref() == Some(&id);
		if was_active {
			self.set_active(next_active);
		}
		Ok(())
	}

	/// Open documents in tab order.
	pub fn documents(&self) -> Vec<DocumentLocation> {
		self.documents.borrow().clone()
	}

	/// Number of times the active editor was asked to take focus.
	pub fn focus_requests(&self) -> u64 {
		self.focus_requests.get()
	}

	pub fn has_command(&self, name: &str) -> bool {
		self.commands.borrow().contains_key(name)
	}

	pub fn subscriber_count(&self) -> usize {
		self.handlers.borrow().len()
	}

	/// Runs a registered command to completion.
	pub async fn execute_command(&self, name: &str) -> Result<()> {
		let action = self
			.commands
			.borrow()
			.get(name)
			.cloned()
			.ok_or_else(|| HostError::UnknownCommand(name.to_string()))?;
		debug!(command = name, "editor.execute_command");
		action().await?;
		Ok(())
	}

	/// Tells subscribers the configuration may have changed.
	pub fn notify_configuration_changed(&self) {
		self.dispatch(&IndicatorEvent::ConfigurationChanged);
	}

	fn resolve_open(&self, location: &str) -> Result<DocumentId> {
		let id = DocumentLocation::parse(location)?.id().clone();
		if self.documents.borrow().iter().any(|doc| doc.id() == &id) {
			Ok(id)
		} else {
			Err(HostError::UnknownDocument(id))
		}
	}

	fn set_active(&self, id: Option<DocumentId>) {
		let changed = {
			let mut active = self.active.borrow_mut();
			let changed = *active != id;
			*active = id;
			changed
		};
		if changed {
			self.dispatch(&IndicatorEvent::ActiveDocumentChanged);
		}
	}

	fn active_location(&self) -> Option<DocumentLocation> {
		let active = self.active.borrow();
		let id = active.as_ref()?;
		self.documents.borrow().iter().find(|doc| doc.id() == id).cloned()
	}

	/// Delivers `event` to every subscriber. Failures are logged and do
	/// not stop delivery to the remaining subscribers.
	fn dispatch(&self, event: &IndicatorEvent) {
		let handlers: Vec<_> = self
			.handlers
			.borrow()
			.iter()
			.map(|(id, handler)| (*id, Rc::clone(handler)))
			.collect();
		trace!(%event, subscribers = handlers.len(), "editor.dispatch");
		for (id, handler) in handlers {
			if let Err(error) = handler(event) {
				warn!(%event, subscription = id.0, %error, "editor.subscriber_failed");
			}
		}
	}
}

impl EditorEnvironment for HeadlessEditor {
	fn is_ignored_scheme(&self, scheme: &str) -> bool {
		self.ignored.contains(scheme)
	}

	fn active_document(&self) -> Option<DocumentLocation> {
		self.active_location()
	}

	fn active_document_label(&self) -> Option<String> {
		self.active_location().map(|doc| doc.label().to_string())
	}

	fn indicator_config(&self) -> std::result::Result<IndicatorConfig, ConfigError> {
		self.config.indicator()
	}

	fn toggle_read_only_in_session<'a>(
		&'a self,
		id: &'a DocumentId,
	) -> BoxFutureLocal<'a, std::result::Result<(), ToggleError>> {
		Box::pin(async move {
			if !self.documents.borrow().iter().any(|doc| doc.id() == id) {
				return Err(ToggleError::UnknownDocument(id.clone()));
			}
			tokio::task::yield_now().await;

			let read_only = if self.store.clear_read_only(id) {
				false
			} else {
				self.store.mark_read_only(id.clone());
				true
			};
			debug!(%id, read_only, "editor.read_only_toggled");
			self.dispatch(&IndicatorEvent::ReadOnlyMembershipChanged { id: id.clone() });
			Ok(())
		})
	}

	fn refocus_active_editor(&self) -> BoxFutureLocal<'_, ()> {
		Box::pin(async move {
			self.focus_requests.set(self.focus_requests.get() + 1);
			trace!("editor.refocus");
		})
	}

	fn register_command(&self, name: &'static str, action: ToggleAction) {
		if self.commands.borrow_mut().insert(name, action).is_some() {
			warn!(command = name, "editor.command_replaced");
		}
	}

	fn unregister_command(&self, name: &'static str) {
		self.commands.borrow_mut().remove(name);
	}

	fn subscribe(&self, handler: EventHandler) -> SubscriptionId {
		let id = SubscriptionId(self.next_subscription.get());
		self.next_subscription.set(id.0 + 1);
		self.handlers.borrow_mut().push((id, handler));
		id
	}

	fn unsubscribe(&self, id: SubscriptionId) {
		self.handlers.borrow_mut().retain(|(sid, _)| *sid != id);
	}
}
