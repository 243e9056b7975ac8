//! Session context owning the store handle, controller and indicator.

use std::rc::Rc;
use std::sync::Arc;

use rolock_session::SessionStateStore;
use tracing::debug;

use crate::{EditorEnvironment, IndicatorController, IndicatorError, IndicatorEvent, IndicatorHandle};

/// Read-only tracking for one editing session.
///
/// Created once at session start; dropping it tears the indicator down.
pub struct ReadOnlySession<E: EditorEnvironment + 'static> {
	controller: Rc<IndicatorController<E>>,
	indicator: IndicatorHandle,
}

impl<E: EditorEnvironment + 'static> ReadOnlySession<E> {
	/// Initializes the indicator and syncs it with the focused document.
	///
	/// `store` must be the same store the environment's authoritative
	/// toggle writes to.
	pub fn start(env: Rc<E>, store: Arc<SessionStateStore>) -> Result<Self, IndicatorError> {
		let controller = IndicatorController::new(env, store);
		let indicator = controller.initialize();
		let session = Self { controller, indicator };
		session
			.controller
			.handle_event(&IndicatorEvent::ActiveDocumentChanged, &session.indicator)?;
		debug!("session.started");
		Ok(session)
	}

	pub fn indicator(&self) -> &IndicatorHandle {
		&self.indicator
	}

	pub fn store(&self) -> &Arc<SessionStateStore> {
		self.controller.store()
	}

	pub fn controller(&self) -> &Rc<IndicatorController<E>> {
		&self.controller
	}

	/// Invokes the toggle action exactly as clicking the indicator does.
	pub async fn toggle(&self) -> Result<(), IndicatorError> {
		self.indicator.click().await
	}

	/// Tears the session down now rather than at drop.
	pub fn dispose(self) {}
}

impl<E: EditorEnvironment + 'static> Drop for ReadOnlySession<E> {
	fn drop(&mut self) {
		self.controller.dispose(&self.indicator);
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::TOGGLE_COMMAND;
	use crate::test_env::FakeEnv;

	#[test]
	fn start_renders_focused_document() {
		let store = SessionStateStore::shared();
		store.mark_read_only("/a.txt".into());
		let env = FakeEnv::new(Arc::clone(&store));
		env.focus("/a.txt");

		let session = ReadOnlySession::start(Rc::clone(&env), store).unwrap();
		let ind = session.indicator().borrow();
		assert!(ind.is_visible());
		assert_eq!(ind.text(), "R-O  \u{1F512}  Press to UN-LOCK");
	}

	#[test]
	fn start_without_focus_stays_hidden_and_blank() {
		let store = SessionStateStore::shared();
		let env = FakeEnv::new(Arc::clone(&store));
		let session = ReadOnlySession::start(env, store).unwrap();
		assert!(!session.indicator().borrow().is_visible());
		assert_eq!(session.indicator().borrow().text(), "");
	}

	#[test]
	fn failed_start_releases_registrations() {
		let store = SessionStateStore::shared();
		let env = FakeEnv::new(Arc::clone(&store));
		env.focus("/a.txt");
		env.config_fails.set(true);

		assert!(ReadOnlySession::start(Rc::clone(&env), store).is_err());
		assert!(env.handlers.borrow().is_empty());
		assert!(env.command(TOGGLE_COMMAND).is_none());
	}

	#[tokio::test]
	async fn toggle_then_notification_updates_indicator() {
		let store = SessionStateStore::shared();
		let env = FakeEnv::new(Arc::clone(&store));
		env.focus("/a.txt");
		let session = ReadOnlySession::start(Rc::clone(&env), Arc::clone(&store)).unwrap();

		session.toggle().await.unwrap();
		env.emit(IndicatorEvent::ReadOnlyMembershipChanged { id: "/a.txt".into() })
			.unwrap();
		assert!(session.store().is_read_only(&"/a.txt".into()));
		assert_eq!(session.indicator().borrow().text(), "R-O  \u{1F512}  Press to UN-LOCK");
	}

	#[test]
	fn dropping_session_disposes_indicator() {
		let store = SessionStateStore::shared();
		let env = FakeEnv::new(Arc::clone(&store));
		env.focus("/a.txt");
		let session = ReadOnlySession::start(Rc::clone(&env), store).unwrap();
		let indicator = session.indicator().clone();

		session.dispose();
		assert!(indicator.borrow().is_disposed());
		assert!(env.handlers.borrow().is_empty());
		assert!(env.emit(IndicatorEvent::ActiveDocumentChanged).is_ok());
	}
}
