//! Session-scoped read-only membership.
//!
//! A [`SessionStateStore`] records which documents have been marked
//! read-only during the current editing session. Nothing is persisted; the
//! store lives exactly as long as the session that owns it.
//!
//! # Ownership of mutations
//!
//! The store is written only by whoever owns the authoritative read-only
//! toggle (the editor environment). Presentation code such as the statusline
//! indicator reads it through [`SessionStateStore::is_read_only`] and never
//! decides the effect of a toggle itself.

use std::sync::Arc;

use parking_lot::RwLock;
use rolock_primitives::DocumentId;
use rustc_hash::FxHashMap;
use tracing::trace;


/// In-memory mapping from document identity to its read-only flag.
///
/// Absence of an entry means the document was never marked read-only this
/// session. Only `true` entries are ever inserted; clearing removes the
/// entry, so an entry is present iff the document is read-only.
#[derive(Debug, Default)]
pub struct SessionStateStore {
	entries: RwLock<FxHashMap<DocumentId, bool>>,
}

impl SessionStateStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty store behind a shared handle.
	pub fn shared() -> Arc<Self> {
		Arc::new(Self::new())
	}

	/// Returns whether `id` is currently marked read-only.
	///
	/// Total: unknown documents are not read-only.
	pub fn is_read_only(&self, id: &DocumentId) -> bool {
		self.entries.read().get(id).copied().unwrap_or(false)
	}

	/// Marks `id` read-only. Reserved for the authoritative toggle owner.
	///
	/// Returns `true` if the document was not already marked.
	pub fn mark_read_only(&self, id: DocumentId) -> bool {
		trace!(%id, "session.mark_read_only");
		self.entries.write().insert(id, true).is_none()
	}

	/// Clears the read-only mark for `id`. Reserved for the authoritative
	/// toggle owner.
	///
	/// Returns `true` if the document was marked.
	pub fn clear_read_only(&self, id: &DocumentId) -> bool {
		trace!(%id, "session.clear_read_only");
		self.entries.write().remove(id).is_some()
	}

	/// Number of documents currently marked read-only.
	pub fn len(&self) -> usize {
		self.entries.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.read().is_empty()
	}

	/// Sorted snapshot of the documents currently marked read-only.
	pub fn read_only_documents(&self) -> Vec<DocumentId> {
		let mut ids: Vec<_> = self.entries.read().keys().cloned().collect();
		ids.sort();
		ids
	}
}
