//! Cloneable callback wrappers
//!
//! Column descriptors are rebuilt on every render pass, so the callbacks
//! they carry must be cheap to clone and keep a stable identity. Both
//! wrappers hold an `Rc`; the table layer is single-threaded.

use std::fmt;
use std::rc::Rc;

/// A cloneable callback taking `Args` and returning `Ret`
///
/// ```
/// use wharf_tables::Callback;
///
/// let double = Callback::new(|x: i32| x * 2);
/// let same = double.clone();
/// assert_eq!(same.call(21), 42);
/// ```
pub struct Callback<Args = (), Ret = ()> {
	inner: Rc<dyn Fn(Args) -> Ret + 'static>,
}

impl<Args, Ret> Callback<Args, Ret> {
	/// Wraps a function or closure
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + 'static,
	{
		Self { inner: Rc::new(f) }
	}

	/// Calls the callback
	pub fn call(&self, args: Args) -> Ret {
		(self.inner)(args)
	}
}

impl Callback<(), ()> {
	/// Callback that does nothing
	pub fn noop() -> Self {
		Self::new(|()| {})
	}
}

impl<Args, Ret> Clone for Callback<Args, Ret> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<Args, Ret> fmt::Debug for Callback<Args, Ret> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Callback")
			.field("inner", &"<function>")
			.finish()
	}
}

/// A cloneable callback receiving a borrowed row
///
/// Used for row-level navigation (view, edit, print).
pub struct RowCallback<R> {
	inner: Rc<dyn Fn(&R) + 'static>,
}

impl<R> RowCallback<R> {
	/// Wraps a function or closure
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(&R) + 'static,
	{
		Self { inner: Rc::new(f) }
	}

	/// Calls the callback with the row
	pub fn call(&self, row: &R) {
		(self.inner)(row)
	}
}

impl<R> Clone for RowCallback<R> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<R> fmt::Debug for RowCallback<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RowCallback")
			.field("inner", &"<function>")
			.finish()
	}
}
