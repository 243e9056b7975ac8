//! The statusline indicator element.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::trace;

use crate::{IndicatorError, ToggleAction};

/// Theme color key, resolved by the frontend at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThemeColor(pub &'static str);

impl ThemeColor {
	/// Warning-tinted statusline item background.
	pub const WARNING_BACKGROUND: Self = Self("statusline.warning-background");
	/// Foreground for the read-only indicator.
	pub const INDICATOR_FOREGROUND: Self = Self("readonly.indicator-foreground");
}

/// Statusline group an item is placed in.
///
/// The read-only indicator always sits on the left; hosts rendering a full
/// statusline also lay out right-aligned items of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
	Left,
	Right,
}

/// Command bound to the indicator's click.
#[derive(Clone)]
pub struct IndicatorCommand {
	pub name: &'static str,
	pub title: &'static str,
	pub action: ToggleAction,
}

impl fmt::Debug for IndicatorCommand {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("IndicatorCommand")
			.field("name", &self.name)
			.field("title", &self.title)
			.finish_non_exhaustive()
	}
}

/// The single statusline item reflecting the active document's lock state.
///
/// Colors, alignment and priority are fixed at creation. Text, tooltip and
/// visibility are rewritten by reconciliation.
#[derive(Debug)]
pub struct Indicator {
	text: String,
	/// Markdown naming the active document.
	tooltip: String,
	visible: bool,
	command: Option<IndicatorCommand>,
	color: ThemeColor,
	background: ThemeColor,
	alignment: Alignment,
	priority: i32,
	/// Number of text assignments since creation.
	text_writes: u64,
	disposed: bool,
}

impl Indicator {
	pub(crate) fn new(command: IndicatorCommand) -> Self {
		Self {
			text: String::new(),
			tooltip: String::new(),
			visible: false,
			command: Some(command),
			color: ThemeColor::INDICATOR_FOREGROUND,
			background: ThemeColor::WARNING_BACKGROUND,
			alignment: Alignment::Left,
			priority: 0,
			text_writes: 0,
			disposed: false,
		}
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn tooltip(&self) -> &str {
		&self.tooltip
	}

	pub fn is_visible(&self) -> bool {
		self.visible
	}

	pub fn command(&self) -> Option<&IndicatorCommand> {
		self.command.as_ref()
	}

	pub fn color(&self) -> ThemeColor {
		self.color
	}

	pub fn background(&self) -> ThemeColor {
		self.background
	}

	pub fn alignment(&self) -> Alignment {
		self.alignment
	}

	pub fn priority(&self) -> i32 {
		self.priority
	}

	pub fn text_writes(&self) -> u64 {
		self.text_writes
	}

	pub fn is_disposed(&self) -> bool {
		self.disposed
	}

	pub(crate) fn set_text(&mut self, text: &str) {
		self.text.clear();
		self.text.push_str(text);
		self.text_writes += 1;
	}

	pub(crate) fn set_tooltip(&mut self, tooltip: String) {
		self.tooltip = tooltip;
	}

	pub(crate) fn show(&mut self) {
		self.visible = true;
	}

	pub(crate) fn hide(&mut self) {
		self.visible = false;
	}

	pub(crate) fn dispose(&mut self) {
		self.visible = false;
		self.command = None;
		self.disposed = true;
	}
}

/// Shared handle to the session's indicator.
///
/// Borrows must not be held across an `.await`.
#[derive(Debug, Clone)]
pub struct IndicatorHandle(Rc<RefCell<Indicator>>);

impl IndicatorHandle {
	pub(crate) fn new(indicator: Indicator) -> Self {
		Self(Rc::new(RefCell::new(indicator)))
	}

	pub fn borrow(&self) -> Ref<'_, Indicator> {
		self.0.borrow()
	}

	pub fn borrow_mut(&self) -> RefMut<'_, Indicator> {
		self.0.borrow_mut()
	}

	pub(crate) fn downgrade(&self) -> WeakIndicatorHandle {
		WeakIndicatorHandle(Rc::downgrade(&self.0))
	}

	/// Runs the bound command, as a click on the indicator would.
	///
	/// A disposed indicator has no command and clicking it does nothing.
	pub async fn click(&self) -> Result<(), IndicatorError> {
		let action = self.borrow().command.as_ref().map(|command| Rc::clone(&command.action));
		match action {
			Some(action) => action().await,
			None => {
				trace!("indicator.click_unbound");
				Ok(())
			}
		}
	}
}

#[derive(Debug, Clone)]
pub(crate) struct WeakIndicatorHandle(Weak<RefCell<Indicator>>);

impl WeakIndicatorHandle {
	pub(crate) fn upgrade(&self) -> Option<IndicatorHandle> {
		self.0.upgrade().map(IndicatorHandle)
	}
}
