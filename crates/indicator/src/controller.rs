//! Reconciliation of the indicator with session state.
//!
//! The controller never changes read-only membership. It maps the current
//! store, configuration and focus onto the indicator, and forwards toggle
//! requests to the environment's authoritative toggle.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use rolock_primitives::{BoxFutureLocal, DocumentId, DocumentLocation};
use rolock_session::SessionStateStore;
use tracing::{debug, trace};

use crate::template::{TextTemplates, UNNAMED_TOOLTIP, tooltip_for};
use crate::{
	EditorEnvironment, EventHandler, Indicator, IndicatorCommand, IndicatorError, IndicatorEvent,
	IndicatorHandle, SubscriptionId, TOGGLE_COMMAND, TOGGLE_COMMAND_TITLE, ToggleAction,
};


/// Drives the session's single read-only indicator.
pub struct IndicatorController<E: EditorEnvironment + 'static> {
	env: Rc<E>,
	store: Arc<SessionStateStore>,
	subscription: Cell<Option<SubscriptionId>>,
}

impl<E: EditorEnvironment + 'static> IndicatorController<E> {
	pub fn new(env: Rc<E>, store: Arc<SessionStateStore>) -> Rc<Self> {
		Rc::new(Self {
			env,
			store,
			subscription: Cell::new(None),
		})
	}

	pub fn env(&self) -> &Rc<E> {
		&self.env
	}

	pub fn store(&self) -> &Arc<SessionStateStore> {
		&self.store
	}

	/// Creates the indicator, binds the toggle command and subscribes to
	/// environment changes.
	///
	/// Visibility follows the initially focused document: hidden without
	/// one, shown unless its scheme is ignored. The tooltip names that
	/// document regardless of lock state; text is left for the first
	/// reconciliation.
	pub fn initialize(self: &Rc<Self>) -> IndicatorHandle {
		let action = self.toggle_action();
		let indicator = IndicatorHandle::new(Indicator::new(IndicatorCommand {
			name: TOGGLE_COMMAND,
			title: TOGGLE_COMMAND_TITLE,
			action: Rc::clone(&action),
		}));
		self.env.register_command(TOGGLE_COMMAND, action);

		{
			let mut ind = indicator.borrow_mut();
			match self.env.active_document() {
				None => ind.hide(),
				Some(doc) if !self.env.is_ignored_scheme(doc.scheme()) => ind.show(),
				Some(_) => {}
			}

			let tooltip = match self.env.active_document_label() {
				Some(label) => tooltip_for(&label),
				None => UNNAMED_TOOLTIP.to_string(),
			};
			ind.set_tooltip(tooltip);
		}

		let id = self.env.subscribe(self.event_handler(&indicator));
		self.subscription.set(Some(id));
		debug!(subscription = id.0, visible = indicator.borrow().is_visible(), "indicator.initialized");
		indicator
	}

	/// Maps the read-only state of `id` onto `indicator`.
	///
	/// The locked text is always written; the unlocked text only when it
	/// differs from what is shown. The tooltip is rewritten only when the
	/// active document has a label.
	pub fn reconcile(&self, id: &DocumentId, indicator: &mut Indicator) -> Result<(), IndicatorError> {
		let config = self.env.indicator_config()?;
		let templates = TextTemplates::select(config.icon_only);

		if self.store.is_read_only(id) {
			indicator.set_text(templates.locked);
		} else if indicator.text() != templates.unlocked {
			indicator.set_text(templates.unlocked);
		}

		if let Some(label) = self.env.active_document_label() {
			indicator.set_tooltip(tooltip_for(&label));
		}

		trace!(%id, text = indicator.text(), writes = indicator.text_writes(), "indicator.reconciled");
		Ok(())
	}

	/// Requests a read-only flip for the focused document.
	///
	/// Without a focused document, or when its scheme is ignored, nothing
	/// happens. Refocus runs only after the toggle succeeds. Rendering is
	/// left to the change notification the environment sends afterwards.
	pub async fn handle_toggle_invocation(&self) -> Result<(), IndicatorError> {
		let Some(doc) = self.participating_document() else {
			trace!("indicator.toggle_skipped");
			return Ok(());
		};

		debug!(id = %doc.id(), "indicator.toggle_requested");
		self.env.toggle_read_only_in_session(doc.id()).await?;
		self.env.refocus_active_editor().await;
		Ok(())
	}

	/// Applies one environment notification to `indicator`.
	pub fn handle_event(&self, event: &IndicatorEvent, indicator: &IndicatorHandle) -> Result<(), IndicatorError> {
		trace!(%event, "indicator.event");
		let mut ind = indicator.borrow_mut();
		if ind.is_disposed() {
			return Ok(());
		}

		let doc = match event {
			IndicatorEvent::ActiveDocumentChanged => {
				let doc = self.participating_document();
				if doc.is_some() {
					ind.show();
				} else {
					ind.hide();
				}
				doc
			}
			IndicatorEvent::ReadOnlyMembershipChanged { .. } | IndicatorEvent::ConfigurationChanged => {
				self.participating_document()
			}
		};

		match doc {
			Some(doc) => self.reconcile(doc.id(), &mut ind),
			None => Ok(()),
		}
	}

	/// Releases the subscription and command registration and retires the
	/// indicator. Safe to call more than once.
	pub fn dispose(&self, indicator: &IndicatorHandle) {
		if let Some(id) = self.subscription.take() {
			self.env.unsubscribe(id);
		}

		let mut ind = indicator.borrow_mut();
		if ind.is_disposed() {
			return;
		}
		self.env.unregister_command(TOGGLE_COMMAND);
		ind.dispose();
		debug!("indicator.disposed");
	}

	/// The focused document, if it participates in read-only tracking.
	fn participating_document(&self) -> Option<DocumentLocation> {
		self.env
			.active_document()
			.filter(|doc| !self.env.is_ignored_scheme(doc.scheme()))
	}

	fn toggle_action(self: &Rc<Self>) -> ToggleAction {
		let controller = Rc::downgrade(self);
		Rc::new(move || -> BoxFutureLocal<'static, Result<(), IndicatorError>> {
			let controller = controller.clone();
			Box::pin(async move {
				match controller.upgrade() {
					Some(controller) => controller.handle_toggle_invocation().await,
					None => Ok(()),
				}
			})
		})
	}

	fn event_handler(self: &Rc<Self>, indicator: &IndicatorHandle) -> EventHandler {
		let controller = Rc::downgrade(self);
		let indicator = indicator.downgrade();
		Rc::new(move |event: &IndicatorEvent| match (controller.upgrade(), indicator.upgrade()) {
			(Some(controller), Some(indicator)) => controller.handle_event(event, &indicator),
			_ => Ok(()),
		})
	}
}
