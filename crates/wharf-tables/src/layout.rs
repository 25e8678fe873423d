//! Report layout
//!
//! The contract handed to the rendering surface: a title, the ordered
//! column descriptors, the current rows and a loading flag. The surface
//! draws [`ReportLayout::headers`] and [`ReportLayout::render_rows`] and
//! routes clicks back through [`ReportLayout::toggle`] and
//! [`ReportLayout::invoke_action`].

use futures::FutureExt;
use futures::future::{self, LocalBoxFuture};
use std::fmt;

use crate::column::{ActionKind, Cell, Column};
use crate::error::{Result, TableError};

/// Where a column is inserted into a [`ColumnSet`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
	/// Before every other column
	Start,
	/// After every other column
	End,
	/// At the given position, clamped to the end
	Index(usize),
	/// Directly before the column with this key
	Before(String),
	/// Directly after the column with this key
	After(String),
}

/// Ordered list of columns
pub struct ColumnSet<R> {
	columns: Vec<Column<R>>,
}

impl<R> ColumnSet<R> {
	/// Empty set
	pub fn new() -> Self {
		Self {
			columns: Vec::new(),
		}
	}

	/// Appends a column
	pub fn push(&mut self, column: Column<R>) {
		self.columns.push(column);
	}

	/// Builder form of [`ColumnSet::push`]
	pub fn with(mut self, column: Column<R>) -> Self {
		self.push(column);
		self
	}

	/// Inserts `column` at `placement`
	///
	/// Fails with [`TableError::UnknownColumn`] when a `Before`/`After`
	/// anchor does not exist; the set is left unchanged.
	pub fn place(&mut self, column: Column<R>, placement: Placement) -> Result<()> {
		let index = match placement {
			Placement::Start => 0,
			Placement::End => self.columns.len(),
			Placement::Index(index) => index.min(self.columns.len()),
			Placement::Before(anchor) => self.position(&anchor)?,
			Placement::After(anchor) => self.position(&anchor)? + 1,
		};
		self.columns.insert(index, column);
		Ok(())
	}

	fn position(&self, key: &str) -> Result<usize> {
		self.columns
			.iter()
			.position(|column| column.key() == key)
			.ok_or_else(|| TableError::UnknownColumn(key.to_string()))
	}

	/// Column with the given key
	pub fn get(&self, key: &str) -> Option<&Column<R>> {
		self.columns.iter().find(|column| column.key() == key)
	}

	/// All columns in display order
	pub fn columns(&self) -> &[Column<R>] {
		&self.columns
	}

	/// Keys in display order
	pub fn keys(&self) -> Vec<&str> {
		self.columns.iter().map(Column::key).collect()
	}

	/// Number of columns
	pub fn len(&self) -> usize {
		self.columns.len()
	}

	/// Whether the set has no columns
	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}

	fn visible(&self) -> impl Iterator<Item = &Column<R>> {
		self.columns.iter().filter(|column| column.is_visible())
	}
}

impl<R> Default for ColumnSet<R> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R> Clone for ColumnSet<R> {
	fn clone(&self) -> Self {
		Self {
			columns: self.columns.clone(),
		}
	}
}

impl<R> FromIterator<Column<R>> for ColumnSet<R> {
	fn from_iter<I: IntoIterator<Item = Column<R>>>(iter: I) -> Self {
		Self {
			columns: iter.into_iter().collect(),
		}
	}
}

impl<R> fmt::Debug for ColumnSet<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(&self.columns).finish()
	}
}

/// Everything a surface needs to draw one list screen
pub struct ReportLayout<R> {
	title: String,
	columns: ColumnSet<R>,
	rows: Vec<R>,
	loading: bool,
}

impl<R> ReportLayout<R> {
	/// Layout without rows
	pub fn new(title: impl Into<String>, columns: ColumnSet<R>) -> Self {
		Self {
			title: title.into(),
			columns,
			rows: Vec::new(),
			loading: false,
		}
	}

	/// Sets the rows
	pub fn rows(mut self, rows: Vec<R>) -> Self {
		self.rows = rows;
		self
	}

	/// Sets the loading flag
	pub fn loading(mut self, loading: bool) -> Self {
		self.loading = loading;
		self
	}

	/// Page title
	pub fn title(&self) -> &str {
		&self.title
	}

	/// The column set
	pub fn columns(&self) -> &ColumnSet<R> {
		&self.columns
	}

	/// Current rows
	pub fn data(&self) -> &[R] {
		&self.rows
	}

	/// Whether a fetch is in flight
	pub fn is_loading(&self) -> bool {
		self.loading
	}

	/// Titles of the visible columns
	pub fn headers(&self) -> Vec<&str> {
		self.columns.visible().map(Column::title).collect()
	}

	/// One rendered cell per visible column, for every row
	pub fn render_rows(&self) -> Vec<Vec<Cell>> {
		self.rows
			.iter()
			.map(|row| self.columns.visible().map(|column| column.render(row)).collect())
			.collect()
	}

	fn row(&self, index: usize) -> Result<&R> {
		self.rows.get(index).ok_or(TableError::RowOutOfRange {
			index,
			len: self.rows.len(),
		})
	}

	fn column(&self, key: &str) -> Result<&Column<R>> {
		self.columns
			.get(key)
			.ok_or_else(|| TableError::UnknownColumn(key.to_string()))
	}

	/// Flips the status switch of column `key` in row `index`
	pub fn toggle(&self, key: &str, index: usize, new_value: bool) -> LocalBoxFuture<'static, Result<()>> {
		match self.column(key).and_then(|column| Ok((column, self.row(index)?))) {
			Ok((column, row)) => column.toggle(new_value, row),
			Err(err) => future::ready(Err(err)).boxed_local(),
		}
	}

	/// Runs row action `kind` of column `key` for row `index`
	pub fn invoke_action(&self, key: &str, index: usize, kind: ActionKind) -> Result<()> {
		let column = self.column(key)?;
		column.invoke_action(kind, self.row(index)?)
	}
}

impl<R: fmt::Debug> fmt::Debug for ReportLayout<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ReportLayout")
			.field("title", &self.title)
			.field("columns", &self.columns)
			.field("rows", &self.rows)
			.field("loading", &self.loading)
			.finish()
	}
}
