//! Statusline indicator for session read-only state.
//!
//! A [`ReadOnlySession`] owns one [`Indicator`] and keeps it in step with
//! three independently changing inputs: which document has focus, which
//! documents the [`SessionStateStore`](rolock_session::SessionStateStore)
//! marks read-only, and the `icon-only` setting. Membership itself is only
//! ever changed by the environment's authoritative toggle; the indicator
//! merely requests it and renders the result.
//!
//! The hosting editor plugs in through [`EditorEnvironment`] and drives
//! reconciliation by notifying subscribers with [`IndicatorEvent`]s.

pub mod controller;
pub mod env;
pub mod error;
pub mod indicator;
pub mod session;
pub mod template;

#[cfg(test)]
mod test_env;

pub use controller::IndicatorController;
pub use env::{
	EditorEnvironment, EventHandler, IndicatorEvent, SubscriptionId, TOGGLE_COMMAND, TOGGLE_COMMAND_TITLE,
	ToggleAction,
};
pub use error::{IndicatorError, ToggleError};
pub use indicator::{Alignment, Indicator, IndicatorCommand, IndicatorHandle, ThemeColor};
pub use session::ReadOnlySession;
pub use template::{LOCK_CLOSED, LOCK_OPEN, TextTemplates};
