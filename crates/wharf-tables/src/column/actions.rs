//! Row-level actions

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::callback::RowCallback;

/// The closed set of row operations, in display order
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
	/// Open the read-only detail page
	View,
	/// Open the save page for the record
	Edit,
	/// Open the print page for the record
	Print,
}

impl ActionKind {
	/// All kinds in display order
	pub const ALL: [ActionKind; 3] = [ActionKind::View, ActionKind::Edit, ActionKind::Print];

	/// Lowercase name used by surfaces and routes
	pub fn as_str(&self) -> &'static str {
		match self {
			ActionKind::View => "view",
			ActionKind::Edit => "edit",
			ActionKind::Print => "print",
		}
	}
}

impl fmt::Display for ActionKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Navigation callbacks for the row actions of an action column
///
/// Only the actions given a callback are rendered; the others are omitted
/// rather than shown disabled.
///
/// ```
/// use wharf_tables::{ActionKind, RowActions};
///
/// let actions = RowActions::<String>::new()
///     .on_print(|code: &String| println!("print {}", code))
///     .on_edit(|code: &String| println!("edit {}", code));
///
/// assert_eq!(actions.kinds(), vec![ActionKind::Edit, ActionKind::Print]);
/// ```
pub struct RowActions<R> {
	view: Option<RowCallback<R>>,
	edit: Option<RowCallback<R>>,
	print: Option<RowCallback<R>>,
}

impl<R> RowActions<R> {
	/// No actions
	pub fn new() -> Self {
		Self {
			view: None,
			edit: None,
			print: None,
		}
	}

	/// Adds the View action
	pub fn on_view<F>(mut self, f: F) -> Self
	where
		F: Fn(&R) + 'static,
	{
		self.view = Some(RowCallback::new(f));
		self
	}

	/// Adds the Edit action
	pub fn on_edit<F>(mut self, f: F) -> Self
	where
		F: Fn(&R) + 'static,
	{
		self.edit = Some(RowCallback::new(f));
		self
	}

	/// Adds the Print action
	pub fn on_print<F>(mut self, f: F) -> Self
	where
		F: Fn(&R) + 'static,
	{
		self.print = Some(RowCallback::new(f));
		self
	}

	fn slot(&self, kind: ActionKind) -> Option<&RowCallback<R>> {
		match kind {
			ActionKind::View => self.view.as_ref(),
			ActionKind::Edit => self.edit.as_ref(),
			ActionKind::Print => self.print.as_ref(),
		}
	}

	/// Whether `kind` has a callback
	pub fn has(&self, kind: ActionKind) -> bool {
		self.slot(kind).is_some()
	}

	/// Supplied actions in display order
	pub fn kinds(&self) -> Vec<ActionKind> {
		ActionKind::ALL
			.into_iter()
			.filter(|kind| self.has(*kind))
			.collect()
	}

	/// Calls the callback for `kind`; returns false if it was not supplied
	pub fn invoke(&self, kind: ActionKind, row: &R) -> bool {
		match self.slot(kind) {
			Some(callback) => {
				callback.call(row);
				true
			}
			None => false,
		}
	}
}

impl<R> Default for RowActions<R> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R> Clone for RowActions<R> {
	fn clone(&self) -> Self {
		Self {
			view: self.view.clone(),
			edit: self.edit.clone(),
			print: self.print.clone(),
		}
	}
}

impl<R> fmt::Debug for RowActions<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RowActions")
			.field("kinds", &self.kinds())
			.finish()
	}
}
