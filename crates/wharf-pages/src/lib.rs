//! Page-level plumbing for wharf list screens
//!
//! A list page wires one asynchronous fetch to a table. This crate holds
//! the reusable half of that wiring:
//!
//! - **Action Data Hook**: [`Action`] tracks loading and result state of a
//!   producer, re-runs it only when its arguments change by value, skips it
//!   while an argument is absent and exposes a stable [`Refresh`] handle.
//! - **Reactive Signal**: [`Signal`] publishes state changes to rendering
//!   surfaces.
//! - **Navigation**: [`NavigationState`] derives the menu selection from the
//!   current route; [`EntityRoutes`] builds list / save / print routes.
//!
//! ## Architecture
//!
//! ```text
//! page render pass
//!   ├─ use_action(&action, args) ── Action ── producer (spawned on LocalSpawn)
//!   │                                  └─ Signal<ActionState<R>> ──> surface
//!   └─ columns ── status_column(.., refresh) ── Refresh ──> Action::refresh
//! ```
//!
//! ## Example
//!
//! ```
//! use futures::executor::LocalPool;
//! use serde_json::{Value, json};
//! use wharf_pages::{Action, use_action, use_refresh};
//! use wharf_tables::{ColumnSet, ReportLayout, StatusToggle, status_column, text_column};
//!
//! let mut pool = LocalPool::new();
//! let customers = Action::new(
//!     |()| async { Ok(vec![json!({ "code": "C001", "isActive": true })]) },
//!     pool.spawner(),
//! );
//!
//! let _ = use_action(&customers, ());
//! pool.run_until_stalled();
//! let (state, _refresh) = use_action(&customers, ());
//!
//! let toggle = StatusToggle::new("code", |_code: String, _active: bool| async { Ok(()) }, use_refresh(&customers));
//! let columns = ColumnSet::new()
//!     .with(text_column("code", "Code"))
//!     .with(status_column("isActive", "Active", toggle));
//! let layout: ReportLayout<Value> = ReportLayout::new("Customers", columns)
//!     .rows(state.value.unwrap_or_default())
//!     .loading(state.is_pending);
//!
//! assert_eq!(layout.render_rows().len(), 1);
//! ```

#![warn(missing_docs)]

pub mod action;
pub mod error;
pub mod navigation;
pub mod reactive;

// Re-exports for convenience
pub use action::{
	Action, ActionState, Dependencies, Presence, Refresh, ResolutionPolicy,
};
pub use error::ActionError;
pub use navigation::{EntityRoutes, NavigationState, menu_key};
pub use reactive::{Signal, Subscription, use_action, use_refresh};
