//! The column descriptor

use futures::FutureExt;
use futures::future::{self, LocalBoxFuture};
use serde_json::Value;
use std::fmt;
use std::rc::Rc;

use super::actions::{ActionKind, RowActions};
use super::toggle::{StatusToggle, is_truthy};
use super::{Cell, ColumnKind, FormMode};
use crate::accessor::Accessor;
use crate::error::{Result, TableError};
use crate::format::{FieldKind, Formatter, is_blank};
use crate::money_input::MoneyInput;

type Renderer<R> = Rc<dyn Fn(&R) -> Cell>;

/// Declarative description of one table column
///
/// A column knows its key and title, how to read its value from a row and
/// how to render it. Status columns additionally carry a [`StatusToggle`],
/// action columns a set of [`RowActions`].
///
/// Columns are cheap to clone and are meant to be rebuilt on every render
/// pass of the owning page.
pub struct Column<R> {
	key: String,
	title: String,
	kind: ColumnKind,
	accessor: Accessor<R>,
	renderer: Renderer<R>,
	toggle: Option<StatusToggle<R>>,
	actions: Option<RowActions<R>>,
	formatter: Rc<Formatter>,
	disabled_on_create: bool,
	orderable: bool,
	visible: bool,
}

impl<R: 'static> Column<R> {
	/// Column rendering one formatted field
	pub fn field(
		accessor: impl Into<Accessor<R>>,
		title: impl Into<String>,
		kind: FieldKind,
		formatter: Rc<Formatter>,
	) -> Self {
		let accessor = accessor.into();
		let renderer: Renderer<R> = {
			let accessor = accessor.clone();
			let formatter = Rc::clone(&formatter);
			Rc::new(move |row: &R| {
				let value = accessor.get(row);
				let text = formatter.format(&kind, value.as_ref());
				match kind {
					FieldKind::Enum(whitelist) if !is_blank(value.as_ref()) && !whitelist.contains(&text) => {
						tracing::debug!(
							column = accessor.key(),
							whitelist = whitelist.name(),
							value = %text,
							"value outside whitelist"
						);
						Cell::flagged(text)
					}
					_ => Cell::text(text),
				}
			})
		};
		Self::with_parts(accessor, title, ColumnKind::Field(kind), renderer, formatter)
	}

	/// Column showing a switch for a boolean-like field
	pub fn status(
		accessor: impl Into<Accessor<R>>,
		title: impl Into<String>,
		toggle: StatusToggle<R>,
		formatter: Rc<Formatter>,
	) -> Self {
		let accessor = accessor.into();
		let renderer: Renderer<R> = {
			let accessor = accessor.clone();
			Rc::new(move |row: &R| Cell::Switch {
				checked: is_truthy(accessor.get(row).as_ref()),
			})
		};
		let mut column = Self::with_parts(accessor, title, ColumnKind::Status, renderer, formatter);
		column.toggle = Some(toggle);
		column.orderable = false;
		column
	}

	/// Column rendering row actions; its key is `actions`
	pub fn actions(title: impl Into<String>, actions: RowActions<R>, formatter: Rc<Formatter>) -> Self {
		let kinds = actions.kinds();
		let renderer: Renderer<R> = Rc::new(move |_: &R| Cell::Actions(kinds.clone()));
		let accessor = Accessor::lens("actions", |_: &R| None::<Value>);
		let mut column = Self::with_parts(accessor, title, ColumnKind::Actions, renderer, formatter);
		column.actions = Some(actions);
		column.orderable = false;
		column
	}

	/// Column with a caller-supplied renderer
	///
	/// ```
	/// use serde_json::{Value, json};
	/// use wharf_tables::{Accessor, Cell, Column};
	///
	/// let route = Column::custom(
	///     Accessor::<Value>::path("route"),
	///     "Route",
	///     |row: &Value| {
	///         let from = row["origin"].as_str().unwrap_or_default();
	///         let to = row["destination"].as_str().unwrap_or_default();
	///         Cell::text(format!("{} - {}", from, to))
	///     },
	/// );
	///
	/// let row = json!({ "origin": "Surabaya", "destination": "Makassar" });
	/// assert_eq!(route.render(&row), Cell::text("Surabaya - Makassar"));
	/// ```
	pub fn custom<F>(accessor: impl Into<Accessor<R>>, title: impl Into<String>, renderer: F) -> Self
	where
		F: Fn(&R) -> Cell + 'static,
	{
		Self::with_parts(
			accessor.into(),
			title,
			ColumnKind::Custom,
			Rc::new(renderer),
			Rc::new(Formatter::default()),
		)
	}

	fn with_parts(
		accessor: Accessor<R>,
		title: impl Into<String>,
		kind: ColumnKind,
		renderer: Renderer<R>,
		formatter: Rc<Formatter>,
	) -> Self {
		Self {
			key: accessor.key().to_string(),
			title: title.into(),
			kind,
			accessor,
			renderer,
			toggle: None,
			actions: None,
			formatter,
			disabled_on_create: false,
			orderable: true,
			visible: true,
		}
	}
}

impl<R> Column<R> {
	/// Sets whether this column is orderable
	pub fn orderable(mut self, orderable: bool) -> Self {
		self.orderable = orderable;
		self
	}

	/// Sets whether this column is visible
	pub fn visible(mut self, visible: bool) -> Self {
		self.visible = visible;
		self
	}

	/// Marks the field as read-only while creating a record
	pub fn disabled_on_create(mut self, disabled: bool) -> Self {
		self.disabled_on_create = disabled;
		self
	}

	/// Overrides the column key (defaults to the accessor key)
	pub fn with_key(mut self, key: impl Into<String>) -> Self {
		self.key = key.into();
		self
	}

	/// Identifier used for placement, sorting and dispatch
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Header text
	pub fn title(&self) -> &str {
		&self.title
	}

	/// What the column renders
	pub fn kind(&self) -> ColumnKind {
		self.kind
	}

	/// The field accessor
	pub fn accessor(&self) -> &Accessor<R> {
		&self.accessor
	}

	/// Whether the column can be ordered by
	pub fn is_orderable(&self) -> bool {
		self.orderable
	}

	/// Whether the column is shown
	pub fn is_visible(&self) -> bool {
		self.visible
	}

	/// Whether the matching form field is read-only in `mode`
	pub fn is_disabled(&self, mode: FormMode) -> bool {
		self.disabled_on_create && mode == FormMode::Create
	}

	/// Raw field value of `row`
	pub fn value(&self, row: &R) -> Option<Value> {
		self.accessor.get(row)
	}

	/// Renders the cell for `row`; never fails
	pub fn render(&self, row: &R) -> Cell {
		(self.renderer)(row)
	}

	/// The status toggle of a status column
	pub fn status_toggle(&self) -> Option<&StatusToggle<R>> {
		self.toggle.as_ref()
	}

	/// The row actions of an action column
	pub fn row_actions(&self) -> Option<&RowActions<R>> {
		self.actions.as_ref()
	}

	/// Flips the status of `row` to `new_value`
	///
	/// Fails with [`TableError::NotToggleColumn`] on other column kinds.
	pub fn toggle(&self, new_value: bool, row: &R) -> LocalBoxFuture<'static, Result<()>> {
		match &self.toggle {
			Some(toggle) => toggle.toggle(&self.key, new_value, row),
			None => future::ready(Err(TableError::NotToggleColumn(self.key.clone()))).boxed_local(),
		}
	}

	/// Runs the row action `kind` for `row`
	///
	/// Actions that were not supplied are not rendered; invoking one anyway
	/// is an error rather than a silent no-op.
	pub fn invoke_action(&self, kind: ActionKind, row: &R) -> Result<()> {
		let invoked = self
			.actions
			.as_ref()
			.is_some_and(|actions| actions.invoke(kind, row));
		if invoked {
			Ok(())
		} else {
			tracing::warn!(column = %self.key, action = %kind, "row action not available");
			Err(TableError::ActionNotAvailable {
				column: self.key.clone(),
				action: kind,
			})
		}
	}

	/// Masked input prefilled from `row`, for money columns only
	pub fn money_input(&self, row: &R) -> Option<MoneyInput> {
		match self.kind {
			ColumnKind::Field(FieldKind::Money) => Some(MoneyInput::from_value(
				self.accessor.get(row).as_ref(),
				Rc::clone(&self.formatter),
			)),
			_ => None,
		}
	}
}

impl<R> Clone for Column<R> {
	fn clone(&self) -> Self {
		Self {
			key: self.key.clone(),
			title: self.title.clone(),
			kind: self.kind,
			accessor: self.accessor.clone(),
			renderer: Rc::clone(&self.renderer),
			toggle: self.toggle.clone(),
			actions: self.actions.clone(),
			formatter: Rc::clone(&self.formatter),
			disabled_on_create: self.disabled_on_create,
			orderable: self.orderable,
			visible: self.visible,
		}
	}
}

impl<R> fmt::Debug for Column<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Column")
			.field("key", &self.key)
			.field("title", &self.title)
			.field("kind", &self.kind)
			.field("toggle", &self.toggle)
			.field("actions", &self.actions)
			.field("orderable", &self.orderable)
			.field("visible", &self.visible)
			.finish_non_exhaustive()
	}
}
