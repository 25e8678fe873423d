//! # Wharf
//!
//! A generic CRUD table and action framework for logistics back-office
//! screens.
//!
//! A back office is dozens of near-identical list screens over master data
//! (customers, ports, vessels, vehicles) and operational documents
//! (delivery notes, packing lists, loading orders). Each one fetches rows,
//! describes columns, toggles a status and navigates to a save or print
//! page. Wharf provides those four steps once:
//!
//! - [`tables`]: field accessors, formatters, the column builder DSL and the
//!   report layout handed to the rendering surface
//! - [`pages`]: the action data hook, reactive signals and navigation state
//! - [`conf`]: display settings (locale, Rupiah formatting, date patterns,
//!   boolean tokens) from TOML or `WHARF_*` environment variables
//!
//! ## Feature Flags
//!
//! - `tables` - column DSL, formatters and layout
//! - `pages` - action hook and navigation (implies `tables`)
//! - `conf` - settings loading
//! - `full` (default) - everything
//!
//! ## Quick Example
//!
//! ```rust
//! use futures::executor::LocalPool;
//! use serde_json::{Value, json};
//! use wharf::prelude::*;
//!
//! let mut pool = LocalPool::new();
//! let notes = Action::new(
//!     |()| async {
//!         Ok(vec![json!({
//!             "code": "DN-0001",
//!             "jobOrder": { "inquiryDetail": { "etd": "2024-03-01" } },
//!             "freight": 1250000
//!         })])
//!     },
//!     pool.spawner(),
//! );
//! notes.activate(());
//! pool.run_until_stalled();
//!
//! let columns = ColumnSet::new()
//!     .with(text_column("code", "Code"))
//!     .with(date_column("jobOrder.inquiryDetail.etd", "ETD"))
//!     .with(money_column("freight", "Freight"));
//! let layout: ReportLayout<Value> = ReportLayout::new("Delivery Notes", columns)
//!     .rows(notes.state().value.unwrap_or_default());
//!
//! assert_eq!(
//!     layout.render_rows()[0],
//!     vec![Cell::text("DN-0001"), Cell::text("01-03-2024"), Cell::text("Rp 1.250.000")]
//! );
//! ```

#![warn(missing_docs)]

#[cfg(feature = "conf")]
pub use wharf_conf as conf;
#[cfg(feature = "pages")]
pub use wharf_pages as pages;
#[cfg(feature = "tables")]
pub use wharf_tables as tables;

/// Everything a list page needs in one import
pub mod prelude {
	#[cfg(feature = "conf")]
	pub use wharf_conf::{DisplaySettings, SettingsError};

	#[cfg(feature = "tables")]
	pub use wharf_tables::{
		Accessor, ActionKind, Callback, Cell, Column, ColumnBuilder, ColumnSet, FieldKind, FormMode,
		Formatter, MoneyInput, Placement, ReportLayout, RowActions, StatusToggle, TableError,
		action_column, boolean_column, date_column, datetime_column, enum_column, money_column,
		status_column, text_column, time_column,
		whitelist::{CARGO_UNITS, CONTAINER_SIZES, DOCUMENT_STATUSES, TRUCK_TYPES},
	};

	#[cfg(feature = "pages")]
	pub use wharf_pages::{
		Action, ActionError, ActionState, EntityRoutes, NavigationState, Refresh, ResolutionPolicy,
		Signal, use_action, use_refresh,
	};
}
