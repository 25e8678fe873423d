//! Observable state of an action

use std::fmt;
use std::rc::Rc;

use crate::error::ActionError;

/// Which resolution is kept when several producer calls overlap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolutionPolicy {
	/// Every resolution overwrites the value, in resolution order
	#[default]
	LastResolved,
	/// Only the most recently started call may set the value; older ones
	/// are discarded when they settle
	LatestTriggered,
}

/// Result state owned by one [`Action`](crate::Action)
///
/// `value` is `None` until the first successful resolution. A failed
/// resolution keeps the previous value and records the error.
pub struct ActionState<R> {
	/// Last stored result
	pub value: Option<R>,
	/// Whether a producer call is in flight
	pub is_pending: bool,
	/// Error of the last failed resolution, cleared by the next success
	pub error: Option<Rc<ActionError>>,
}

impl<R> ActionState<R> {
	/// Whether a value was ever stored
	pub fn is_loaded(&self) -> bool {
		self.value.is_some()
	}
}

impl<R> Default for ActionState<R> {
	fn default() -> Self {
		Self {
			value: None,
			is_pending: false,
			error: None,
		}
	}
}

impl<R: Clone> Clone for ActionState<R> {
	fn clone(&self) -> Self {
		Self {
			value: self.value.clone(),
			is_pending: self.is_pending,
			error: self.error.clone(),
		}
	}
}

impl<R: fmt::Debug> fmt::Debug for ActionState<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ActionState")
			.field("value", &self.value)
			.field("is_pending", &self.is_pending)
			.field("error", &self.error.as_ref().map(|e| e.to_string()))
			.finish()
	}
}
