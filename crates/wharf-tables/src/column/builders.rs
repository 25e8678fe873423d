//! Column builder DSL
//!
//! [`ColumnBuilder`] creates columns sharing one [`Formatter`]. The free
//! functions (`text_column`, `date_column`, ...) use a builder with the
//! default display settings and cover most screens.
//!
//! ```
//! use serde_json::json;
//! use wharf_tables::{Cell, ColumnBuilder};
//! use wharf_conf::DisplaySettings;
//!
//! let mut settings = DisplaySettings::default();
//! settings.boolean.yes = "Ya".to_string();
//! let columns = ColumnBuilder::with_settings(settings);
//!
//! let insured = columns.boolean("insured", "Insured");
//! assert_eq!(insured.render(&json!({ "insured": true })), Cell::text("Ya"));
//! ```

use std::rc::Rc;
use wharf_conf::DisplaySettings;

use super::actions::RowActions;
use super::base::Column;
use super::toggle::StatusToggle;
use crate::accessor::Accessor;
use crate::format::{FieldKind, Formatter};
use crate::whitelist::EnumWhitelist;

/// Factory for columns sharing one formatter
#[derive(Debug, Clone, Default)]
pub struct ColumnBuilder {
	formatter: Rc<Formatter>,
}

impl ColumnBuilder {
	/// Builder using `formatter`
	pub fn new(formatter: Rc<Formatter>) -> Self {
		Self { formatter }
	}

	/// Builder using a formatter created from `settings`
	pub fn with_settings(settings: DisplaySettings) -> Self {
		Self::new(Rc::new(Formatter::new(settings)))
	}

	/// The shared formatter
	pub fn formatter(&self) -> &Rc<Formatter> {
		&self.formatter
	}

	fn field<R: 'static>(
		&self,
		accessor: impl Into<Accessor<R>>,
		title: impl Into<String>,
		kind: FieldKind,
	) -> Column<R> {
		Column::field(accessor, title, kind, Rc::clone(&self.formatter))
	}

	/// Plain text column
	pub fn text<R: 'static>(&self, accessor: impl Into<Accessor<R>>, title: impl Into<String>) -> Column<R> {
		self.field(accessor, title, FieldKind::Text)
	}

	/// Categorical column documented by `whitelist`
	///
	/// Values render unchanged; values outside the whitelist are flagged.
	pub fn enumeration<R: 'static>(
		&self,
		accessor: impl Into<Accessor<R>>,
		title: impl Into<String>,
		whitelist: EnumWhitelist,
	) -> Column<R> {
		self.field(accessor, title, FieldKind::Enum(whitelist))
	}

	/// Date column
	pub fn date<R: 'static>(&self, accessor: impl Into<Accessor<R>>, title: impl Into<String>) -> Column<R> {
		self.field(accessor, title, FieldKind::Date)
	}

	/// Time-of-day column
	pub fn time<R: 'static>(&self, accessor: impl Into<Accessor<R>>, title: impl Into<String>) -> Column<R> {
		self.field(accessor, title, FieldKind::Time)
	}

	/// Timestamp column
	pub fn datetime<R: 'static>(
		&self,
		accessor: impl Into<Accessor<R>>,
		title: impl Into<String>,
	) -> Column<R> {
		self.field(accessor, title, FieldKind::DateTime)
	}

	/// Currency column
	pub fn money<R: 'static>(&self, accessor: impl Into<Accessor<R>>, title: impl Into<String>) -> Column<R> {
		self.field(accessor, title, FieldKind::Money)
	}

	/// Yes / no column
	pub fn boolean<R: 'static>(
		&self,
		accessor: impl Into<Accessor<R>>,
		title: impl Into<String>,
	) -> Column<R> {
		self.field(accessor, title, FieldKind::Boolean)
	}

	/// Status switch column
	pub fn status<R: 'static>(
		&self,
		accessor: impl Into<Accessor<R>>,
		title: impl Into<String>,
		toggle: StatusToggle<R>,
	) -> Column<R> {
		Column::status(accessor, title, toggle, Rc::clone(&self.formatter))
	}

	/// Row action column
	pub fn actions<R: 'static>(&self, title: impl Into<String>, actions: RowActions<R>) -> Column<R> {
		Column::actions(title, actions, Rc::clone(&self.formatter))
	}
}

/// Plain text column with default settings
pub fn text_column<R: 'static>(accessor: impl Into<Accessor<R>>, title: impl Into<String>) -> Column<R> {
	ColumnBuilder::default().text(accessor, title)
}

/// Categorical column with default settings
pub fn enum_column<R: 'static>(
	accessor: impl Into<Accessor<R>>,
	title: impl Into<String>,
	whitelist: EnumWhitelist,
) -> Column<R> {
	ColumnBuilder::default().enumeration(accessor, title, whitelist)
}

/// Date column with default settings
pub fn date_column<R: 'static>(accessor: impl Into<Accessor<R>>, title: impl Into<String>) -> Column<R> {
	ColumnBuilder::default().date(accessor, title)
}

/// Time-of-day column with default settings
pub fn time_column<R: 'static>(accessor: impl Into<Accessor<R>>, title: impl Into<String>) -> Column<R> {
	ColumnBuilder::default().time(accessor, title)
}

/// Timestamp column with default settings
pub fn datetime_column<R: 'static>(
	accessor: impl Into<Accessor<R>>,
	title: impl Into<String>,
) -> Column<R> {
	ColumnBuilder::default().datetime(accessor, title)
}

/// Currency column with default settings
pub fn money_column<R: 'static>(accessor: impl Into<Accessor<R>>, title: impl Into<String>) -> Column<R> {
	ColumnBuilder::default().money(accessor, title)
}

/// Yes / no column with default settings
pub fn boolean_column<R: 'static>(
	accessor: impl Into<Accessor<R>>,
	title: impl Into<String>,
) -> Column<R> {
	ColumnBuilder::default().boolean(accessor, title)
}

/// Status switch column
pub fn status_column<R: 'static>(
	accessor: impl Into<Accessor<R>>,
	title: impl Into<String>,
	toggle: StatusToggle<R>,
) -> Column<R> {
	ColumnBuilder::default().status(accessor, title, toggle)
}

/// Row action column
pub fn action_column<R: 'static>(title: impl Into<String>, actions: RowActions<R>) -> Column<R> {
	ColumnBuilder::default().actions(title, actions)
}
