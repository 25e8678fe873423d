//! Data table building blocks for wharf list screens
//!
//! Every master-data and document screen of a back office follows the same
//! pattern: fetch rows, describe columns, toggle a status, navigate to a
//! save or print page. This crate holds the reusable half of that pattern.
//!
//! # Features
//!
//! - **Field Accessors**: dotted paths into nested JSON records, or typed
//!   lenses over Rust DTOs. Missing segments resolve to `None`, never panic.
//! - **Formatters**: text, enum, date, time, money (Rupiah) and boolean
//!   rendering driven by [`wharf_conf::DisplaySettings`].
//! - **Masked Money Input**: raw digits while focused, currency when blurred.
//! - **Column DSL**: [`text_column`], [`date_column`], [`money_column`],
//!   [`status_column`], [`action_column`] and friends.
//! - **Report Layout**: the contract handed to the rendering surface.
//!
//! # Architecture
//!
//! ```text
//! ReportLayout ── ColumnSet ── Column ─┬─ Accessor ── resolve()
//!                                      ├─ Formatter ── DisplaySettings
//!                                      ├─ StatusToggle ── setter + refresh
//!                                      └─ RowActions ── View / Edit / Print
//! ```
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use wharf_tables::{Cell, date_column, text_column};
//!
//! let record = json!({
//!     "code": "DN-0001",
//!     "jobOrder": { "inquiryDetail": { "etd": "2024-03-01" } }
//! });
//!
//! let code = text_column("code", "Code");
//! let etd = date_column("jobOrder.inquiryDetail.etd", "ETD");
//!
//! assert_eq!(code.render(&record), Cell::text("DN-0001"));
//! assert_eq!(etd.render(&record), Cell::text("01-03-2024"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod accessor;
pub mod callback;
pub mod column;
pub mod error;
pub mod format;
pub mod layout;
pub mod money_input;
pub mod whitelist;

// Re-exports for convenience
pub use accessor::{Accessor, FieldPath, Record, resolve};
pub use callback::{Callback, RowCallback};
pub use column::{
	ActionKind, Cell, Column, ColumnBuilder, ColumnKind, FormMode, RowActions, StatusSetter,
	StatusToggle, action_column, boolean_column, date_column, datetime_column, enum_column,
	money_column, status_column, text_column, time_column,
};
pub use error::{Result, TableError};
pub use format::{FieldKind, Formatter, is_blank, parse_money};
pub use layout::{ColumnSet, Placement, ReportLayout};
pub use money_input::MoneyInput;
pub use whitelist::EnumWhitelist;
