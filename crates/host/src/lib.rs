//! Headless editor environment for the read-only session indicator.
//!
//! [`HeadlessEditor`] implements [`EditorEnvironment`](rolock_indicator::EditorEnvironment)
//! without any UI: documents are opened, focused and closed by URI, the
//! authoritative toggle flips membership in the shared
//! [`SessionStateStore`](rolock_session::SessionStateStore), and every change
//! is dispatched to subscribers on the calling task.

mod editor;
mod error;
mod schemes;


pub use editor::HeadlessEditor;
pub use error::{HostError, Result};
pub use schemes::{DEFAULT_IGNORED_SCHEMES, IgnoredSchemes};
