//! Signal - observable value cell
//!
//! `Signal<T>` holds a value shared by all of its clones. Writers replace or
//! update the value; subscribers are notified after every write.
//!
//! ## Key Features
//!
//! - **Shared**: clones observe the same value via `Rc<RefCell<T>>`.
//! - **Change Notification**: `set()` and `update()` call every subscriber
//!   once the value borrow is released, so subscribers may read or even
//!   write the signal again.
//! - **Single-threaded**: not `Send`; lives on the UI thread with the page
//!   that owns it.
//!
//! ## Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use wharf_pages::reactive::Signal;
//!
//! let count = Signal::new(0);
//! let seen = Rc::new(Cell::new(0));
//!
//! let subscription = count.subscribe({
//!     let count = count.clone();
//!     let seen = Rc::clone(&seen);
//!     move || seen.set(count.get())
//! });
//!
//! count.set(42);
//! assert_eq!(seen.get(), 42);
//!
//! count.unsubscribe(subscription);
//! count.update(|n| *n += 1);
//! assert_eq!(seen.get(), 42);
//! assert_eq!(count.get(), 43);
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

type Subscriber = Rc<dyn Fn()>;

/// Handle identifying one subscriber of a [`Signal`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

struct SignalInner<T> {
	value: RefCell<T>,
	subscribers: RefCell<Vec<(Subscription, Subscriber)>>,
	next_id: Cell<u64>,
}

/// An observable value shared by all clones
///
/// ## Cloning
///
/// `Signal<T>` is cheap to clone; all clones share the same value and the
/// same subscriber list.
pub struct Signal<T> {
	inner: Rc<SignalInner<T>>,
}

impl<T> Signal<T> {
	/// Create a new Signal with the given initial value
	pub fn new(value: T) -> Self {
		Self {
			inner: Rc::new(SignalInner {
				value: RefCell::new(value),
				subscribers: RefCell::new(Vec::new()),
				next_id: Cell::new(0),
			}),
		}
	}

	/// Get a clone of the current value
	pub fn get(&self) -> T
	where
		T: Clone,
	{
		self.inner.value.borrow().clone()
	}

	/// Read the current value without cloning it
	pub fn with<U>(&self, f: impl FnOnce(&T) -> U) -> U {
		f(&self.inner.value.borrow())
	}

	/// Replace the value and notify subscribers
	pub fn set(&self, value: T) {
		*self.inner.value.borrow_mut() = value;
		self.notify();
	}

	/// Update the value in place and notify subscribers once
	pub fn update<F>(&self, f: F)
	where
		F: FnOnce(&mut T),
	{
		f(&mut self.inner.value.borrow_mut());
		self.notify();
	}

	/// Register `f` to be called after every write
	pub fn subscribe<F>(&self, f: F) -> Subscription
	where
		F: Fn() + 'static,
	{
		let id = Subscription(self.inner.next_id.get());
		self.inner.next_id.set(id.0 + 1);
		self.inner.subscribers.borrow_mut().push((id, Rc::new(f)));
		id
	}

	/// Remove a subscriber; returns false if it was already removed
	pub fn unsubscribe(&self, subscription: Subscription) -> bool {
		let mut subscribers = self.inner.subscribers.borrow_mut();
		let before = subscribers.len();
		subscribers.retain(|(id, _)| *id != subscription);
		subscribers.len() != before
	}

	/// Number of active subscribers
	pub fn subscriber_count(&self) -> usize {
		self.inner.subscribers.borrow().len()
	}

	/// Whether both signals share the same value
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.inner, &other.inner)
	}

	fn notify(&self) {
		// Snapshot so subscribers can (un)subscribe while being notified
		let subscribers: Vec<Subscriber> = self
			.inner
			.subscribers
			.borrow()
			.iter()
			.map(|(_, f)| Rc::clone(f))
			.collect();
		for subscriber in subscribers {
			subscriber();
		}
	}
}

impl<T> Clone for Signal<T> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<T: Default> Default for Signal<T> {
	fn default() -> Self {
		Self::new(T::default())
	}
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Signal")
			.field("value", &*self.inner.value.borrow())
			.field("subscribers", &self.subscriber_count())
			.finish()
	}
}
