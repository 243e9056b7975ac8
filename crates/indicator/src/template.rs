//! Fixed indicator text and tooltip templates.

/// Glyph shown while the active document is read-only.
pub const LOCK_CLOSED: &str = "\u{1F512}";
/// Glyph shown while the active document is writable.
pub const LOCK_OPEN: &str = "\u{1F513}";

/// Locked/unlocked text pair selected by the `icon-only` setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextTemplates {
	pub locked: &'static str,
	pub unlocked: &'static str,
}

impl TextTemplates {
	pub const FULL: Self = Self {
		locked: "R-O  \u{1F512}  Press to UN-LOCK",
		unlocked: "R-O  \u{1F513}  Press to LOCK",
	};

	pub const ICON_ONLY: Self = Self {
		locked: LOCK_CLOSED,
		unlocked: LOCK_OPEN,
	};

	pub fn select(icon_only: bool) -> Self {
		if icon_only { Self::ICON_ONLY } else { Self::FULL }
	}
}

/// Tooltip markdown naming the document the toggle applies to.
pub fn tooltip_for(label: &str) -> String {
	format!("Toggle `read-only` editor status for **{label}**")
}

/// Tooltip used when no document label is available at creation.
pub const UNNAMED_TOOLTIP: &str = "Toggle `read-only` editor status";

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn full_templates_embed_glyphs() {
		assert!(TextTemplates::FULL.locked.contains(LOCK_CLOSED));
		assert!(TextTemplates::FULL.unlocked.contains(LOCK_OPEN));
	}

	#[test]
	fn select_follows_icon_only() {
		assert_eq!(TextTemplates::select(true), TextTemplates::ICON_ONLY);
		assert_eq!(TextTemplates::select(false), TextTemplates::FULL);
	}

	#[test]
	fn tooltip_names_document_in_bold() {
		assert_eq!(tooltip_for("a.txt"), "Toggle `read-only` editor status for **a.txt**");
	}
}
