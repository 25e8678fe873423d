//! Error types for table operations

use crate::column::ActionKind;

/// Result alias for table operations
pub type Result<T> = std::result::Result<T, TableError>;

/// Errors raised by column interactions and layout configuration
///
/// Rendering never produces these: a missing field renders as an empty
/// cell. They only come from toggles, row actions and column placement.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum TableError {
	/// The record has no value at the column's identifying key path
	#[error("Record has no identifying key at '{path}' for column '{column}'")]
	MissingKey {
		/// Column whose toggle was invoked
		column: String,
		/// Key path that failed to resolve
		path: String,
	},

	/// The status setter rejected the new value
	#[error("Failed to update status of '{key}': {cause}")]
	StatusUpdate {
		/// Identifying key of the record
		key: String,
		/// Error returned by the setter
		cause: anyhow::Error,
	},

	/// The column is not a status toggle column
	#[error("Column '{0}' has no status toggle")]
	NotToggleColumn(String),

	/// The column does not offer the requested row action
	#[error("Action {action} is not available on column '{column}'")]
	ActionNotAvailable {
		/// Column the action was invoked on
		column: String,
		/// The omitted action
		action: ActionKind,
	},

	/// No column with the given key exists
	#[error("Unknown column: {0}")]
	UnknownColumn(String),

	/// Row index outside the current data
	#[error("Row {index} out of range ({len} rows)")]
	RowOutOfRange {
		/// Requested index
		index: usize,
		/// Number of rows
		len: usize,
	},
}
