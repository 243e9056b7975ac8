//! Scriptable environment for controller and session tests.

use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

use rolock_config::{ConfigError, IndicatorConfig};
use rolock_primitives::{BoxFutureLocal, DocumentId, DocumentLocation};
use rolock_session::SessionStateStore;
use tokio::sync::Notify;

use crate::{EditorEnvironment, EventHandler, IndicatorEvent, SubscriptionId, ToggleAction, ToggleError};

pub(crate) struct FakeEnv {
	pub store: Arc<SessionStateStore>,
	pub active: RefCell<Option<DocumentLocation>>,
	/// Overrides the label derived from the active document.
	pub label: RefCell<Option<Option<String>>>,
	pub icon_only: Cell<bool>,
	pub config_fails: Cell<bool>,
	pub toggle_fails: Cell<bool>,
	/// When set, the toggle waits for a notification before mutating.
	pub toggle_gate: RefCell<Option<Rc<Notify>>>,
	pub toggle_calls: RefCell<Vec<DocumentId>>,
	pub refocus_calls: Cell<usize>,
	pub commands: RefCell<Vec<(&'static str, ToggleAction)>>,
	pub handlers: RefCell<Vec<(SubscriptionId, EventHandler)>>,
	next_subscription: Cell<u64>,
}

impl FakeEnv {
	pub fn new(store: Arc<SessionStateStore>) -> Rc<Self> {
		Rc::new(Self {
			store,
			active: RefCell::new(None),
			label: RefCell::new(None),
			icon_only: Cell::new(false),
			config_fails: Cell::new(false),
			toggle_fails: Cell::new(false),
			toggle_gate: RefCell::new(None),
			toggle_calls: RefCell::new(Vec::new()),
			refocus_calls: Cell::new(0),
			commands: RefCell::new(Vec::new()),
			handlers: RefCell::new(Vec::new()),
			next_subscription: Cell::new(1),
		})
	}

	pub fn focus(&self, location: &str) {
		*self.active.borrow_mut() = Some(DocumentLocation::parse(location).unwrap());
	}

	pub fn unfocus(&self) {
		*self.active.borrow_mut() = None;
	}

	pub fn set_label(&self, label: Option<&str>) {
		*self.label.borrow_mut() = Some(label.map(str::to_string));
	}

	/// Delivers `event` to every subscriber, stopping at the first error.
	pub fn emit(&self, event: IndicatorEvent) -> Result<(), crate::IndicatorError> {
		let handlers: Vec<_> = self.handlers.borrow().iter().map(|(_, h)| Rc::clone(h)).collect();
		for handler in handlers {
			handler(&event)?;
		}
		Ok(())
	}

	pub fn command(&self, name: &str) -> Option<ToggleAction> {
		self.commands
			.borrow()
			.iter()
			.find(|(n, _)| *n == name)
			.map(|(_, action)| Rc::clone(action))
	}
}

impl EditorEnvironment for FakeEnv {
	fn is_ignored_scheme(&self, scheme: &str) -> bool {
		matches!(scheme, "output" | "git")
	}

	fn active_document(&self) -> Option<DocumentLocation> {
		self.active.borrow().clone()
	}

	fn active_document_label(&self) -> Option<String> {
		if let Some(label) = self.label.borrow().clone() {
			return label;
		}
		self.active.borrow().as_ref().map(|doc| doc.label().to_string())
	}

	fn indicator_config(&self) -> Result<IndicatorConfig, ConfigError> {
		if self.config_fails.get() {
			return Err(ConfigError::Io {
				path: PathBuf::from("/unreadable/config.toml"),
				error: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
			});
		}
		Ok(IndicatorConfig {
			icon_only: self.icon_only.get(),
		})
	}

	fn toggle_read_only_in_session<'a>(
		&'a self,
		id: &'a DocumentId,
	) -> BoxFutureLocal<'a, Result<(), ToggleError>> {
		Box::pin(async move {
			self.toggle_calls.borrow_mut().push(id.clone());
			let gate = self.toggle_gate.borrow().clone();
			if let Some(gate) = gate {
				gate.notified().await;
			}
			tokio::task::yield_now().await;

			if self.toggle_fails.get() {
				return Err(ToggleError::Rejected {
					id: id.clone(),
					reason: "file system is read-only".to_string(),
				});
			}
			if !self.store.clear_read_only(id) {
				self.store.mark_read_only(id.clone());
			}
			Ok(())
		})
	}

	fn refocus_active_editor(&self) -> BoxFutureLocal<'_, ()> {
		Box::pin(async move {
			self.refocus_calls.set(self.refocus_calls.get() + 1);
		})
	}

	fn register_command(&self, name: &'static str, action: ToggleAction) {
		self.commands.borrow_mut().push((name, action));
	}

	fn unregister_command(&self, name: &'static str) {
		self.commands.borrow_mut().retain(|(n, _)| *n != name);
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
