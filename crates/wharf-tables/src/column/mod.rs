//! Column descriptors and the builder DSL
//!
//! This module provides the column kinds used by list screens:
//! - field columns (`text`, `enum`, `date`, `time`, `datetime`, `money`,
//!   `boolean`) rendering one formatted value
//! - status columns rendering a switch whose toggle calls a setter and then
//!   refreshes the owning data hook
//! - action columns rendering row-level View / Edit / Print operations
//! - custom columns with a caller-supplied renderer

pub mod actions;
pub mod base;
pub mod builders;
pub mod toggle;

use serde::{Deserialize, Serialize};

use crate::format::FieldKind;

// Re-exports
pub use actions::{ActionKind, RowActions};
pub use base::Column;
pub use builders::{
	ColumnBuilder, action_column, boolean_column, date_column, datetime_column, enum_column,
	money_column, status_column, text_column, time_column,
};
pub use toggle::{StatusSetter, StatusToggle, is_truthy};

/// What a column renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
	/// A formatted field value
	Field(FieldKind),
	/// A switch bound to a boolean-like status field
	Status,
	/// Row-level navigation actions
	Actions,
	/// Caller-supplied renderer
	Custom,
}

/// Whether the surrounding form creates a new record or edits one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormMode {
	/// A new record is being created
	Create,
	/// An existing record is being edited
	Edit,
}

/// Rendered content of one table cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
	/// Display text
	Text {
		/// The formatted value
		text: String,
		/// Set when the value is outside the column's enum whitelist
		flagged: bool,
	},
	/// A switch control
	Switch {
		/// Whether the switch is on
		checked: bool,
	},
	/// Action buttons, in display order
	Actions(Vec<ActionKind>),
}

impl Cell {
	/// Plain text cell
	pub fn text(text: impl Into<String>) -> Self {
		Self::Text {
			text: text.into(),
			flagged: false,
		}
	}

	/// Text cell marked as out of whitelist
	pub fn flagged(text: impl Into<String>) -> Self {
		Self::Text {
			text: text.into(),
			flagged: true,
		}
	}

	/// The text of a text cell
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Text { text, .. } => Some(text),
			_ => None,
		}
	}

	/// Whether the cell is marked as out of whitelist
	pub fn is_flagged(&self) -> bool {
		matches!(self, Self::Text { flagged: true, .. })
	}
}
