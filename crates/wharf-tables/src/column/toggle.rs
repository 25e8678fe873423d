//! Status toggles
//!
//! A status column shows a switch for a boolean-like field. Flipping it
//! sends the record's identifying key and the new value to a caller-supplied
//! setter. On success the owning data hook is refreshed so the row shows
//! the server-confirmed state; on failure the error goes back to the caller
//! and nothing is refreshed. The record itself is never mutated.

use futures::FutureExt;
use futures::future::{self, LocalBoxFuture};
use serde_json::Value;
use std::fmt;
use std::future::Future;
use std::rc::Rc;

use crate::accessor::Accessor;
use crate::callback::Callback;
use crate::error::{Result, TableError};
use crate::format::is_blank;

/// Asynchronous setter receiving `(identifying key, new value)`
pub type StatusSetter = Rc<dyn Fn(String, bool) -> LocalBoxFuture<'static, anyhow::Result<()>>>;

/// Interprets a boolean-like field value
///
/// Booleans map directly, numbers are on when non-zero, and the strings
/// `true`, `1`, `yes`, `y` and `active` (any case) are on.
pub fn is_truthy(value: Option<&Value>) -> bool {
	match value {
		Some(Value::Bool(b)) => *b,
		Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
		Some(Value::String(s)) => matches!(
			s.trim().to_ascii_lowercase().as_str(),
			"true" | "1" | "yes" | "y" | "active"
		),
		_ => false,
	}
}

/// Key rendering used for setter calls: strings as is, other scalars via JSON
fn key_string(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

/// The side-effecting half of a status column
pub struct StatusToggle<R> {
	key: Accessor<R>,
	setter: StatusSetter,
	refresh: Callback,
}

impl<R> StatusToggle<R> {
	/// Creates a toggle
	///
	/// # Arguments
	///
	/// * `key` - Accessor for the record's identifying key (e.g. `"code"`)
	/// * `setter` - Async status setter; must fail when the update fails
	/// * `refresh` - Called after a successful update, typically the data
	///   hook's refresh handle
	pub fn new<F, Fut>(key: impl Into<Accessor<R>>, setter: F, refresh: impl Into<Callback>) -> Self
	where
		F: Fn(String, bool) -> Fut + 'static,
		Fut: Future<Output = anyhow::Result<()>> + 'static,
	{
		Self {
			key: key.into(),
			setter: Rc::new(move |key, value| setter(key, value).boxed_local()),
			refresh: refresh.into(),
		}
	}

	/// Accessor of the identifying key
	pub fn key(&self) -> &Accessor<R> {
		&self.key
	}

	/// Sends `new_value` for `row` to the setter
	///
	/// The setter is called immediately; the returned future completes once
	/// it settles. A missing identifying key fails without calling the
	/// setter.
	pub fn toggle(&self, column: &str, new_value: bool, row: &R) -> LocalBoxFuture<'static, Result<()>> {
		let key = match self.key.get(row) {
			Some(value) if !is_blank(Some(&value)) => key_string(&value),
			_ => {
				tracing::warn!(column, path = self.key.key(), "status toggle without identifying key");
				return future::ready(Err(TableError::MissingKey {
					column: column.to_string(),
					path: self.key.key().to_string(),
				}))
				.boxed_local();
			}
		};

		tracing::debug!(column, key = %key, value = new_value, "toggling status");
		let pending = (self.setter)(key.clone(), new_value);
		let refresh = self.refresh.clone();

		async move {
			match pending.await {
				Ok(()) => {
					refresh.call(());
					Ok(())
				}
				Err(cause) => {
					tracing::warn!(key = %key, error = %cause, "status update rejected");
					Err(TableError::StatusUpdate { key, cause })
				}
			}
		}
		.boxed_local()
	}
}

impl<R> Clone for StatusToggle<R> {
	fn clone(&self) -> Self {
		Self {
			key: self.key.clone(),
			setter: Rc::clone(&self.setter),
			refresh: self.refresh.clone(),
		}
	}
}

impl<R> fmt::Debug for StatusToggle<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("StatusToggle")
			.field("key", &self.key)
			.finish_non_exhaustive()
	}
}
