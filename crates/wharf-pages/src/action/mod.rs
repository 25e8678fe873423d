//! Action data hook
//!
//! An [`Action`] binds an asynchronous producer (typically a fetch) to the
//! render cycle of one page:
//!
//! - [`Action::activate`] is called on every render pass with the current
//!   argument tuple. The producer runs on the first activation and whenever
//!   the arguments differ by value from the previous ones; value-equal
//!   tuples built fresh on each pass do not trigger a call.
//! - While any argument is absent the producer is not called and the state
//!   keeps its previous value.
//! - [`Action::refresh`] (or a [`Refresh`] handle) re-runs the producer with
//!   the current arguments, once per call.
//!
//! Calls are never cancelled or de-duplicated. With the default
//! [`ResolutionPolicy::LastResolved`] every resolution overwrites the value
//! in the order the futures settle, which may differ from the order they
//! were started.
//!
//! Producer futures run on a caller-supplied [`LocalSpawn`] executor and
//! only hold a weak reference to the action: once the action is dropped
//! their results are discarded.
//!
//! ```
//! use futures::executor::LocalPool;
//! use wharf_pages::Action;
//!
//! let mut pool = LocalPool::new();
//! let customers = Action::new(
//!     |(page,): (Option<u32>,)| async move {
//!         Ok(vec![format!("customer page {}", page.unwrap_or_default())])
//!     },
//!     pool.spawner(),
//! );
//!
//! customers.activate((Some(1),));
//! pool.run_until_stalled();
//!
//! let state = customers.state();
//! assert_eq!(state.value, Some(vec!["customer page 1".to_string()]));
//! assert!(!state.is_pending);
//! ```

pub mod deps;
pub mod state;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use futures::task::{LocalSpawn, LocalSpawnExt};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::future::Future;
use std::rc::{Rc, Weak};
use wharf_tables::Callback;

pub use deps::{Dependencies, Presence};
pub use state::{ActionState, ResolutionPolicy};

use crate::error::ActionError;
use crate::reactive::Signal;

type Producer<A, R> = Rc<dyn Fn(A) -> LocalBoxFuture<'static, anyhow::Result<R>>>;

trait RefreshTarget {
	fn refresh(&self);
}

struct Inner<A, R> {
	this: Weak<Inner<A, R>>,
	producer: Producer<A, R>,
	spawner: Rc<dyn LocalSpawn>,
	policy: ResolutionPolicy,
	args: RefCell<Option<A>>,
	generation: Cell<u64>,
	in_flight: Cell<usize>,
	state: Signal<ActionState<R>>,
}

impl<A: Dependencies, R: 'static> Inner<A, R> {
	fn activate(&self, args: A) {
		{
			let mut current = self.args.borrow_mut();
			if current.as_ref() == Some(&args) {
				tracing::trace!("action arguments unchanged");
				return;
			}
			*current = Some(args.clone());
		}

		if args.is_complete() {
			self.invoke(args);
		} else {
			tracing::trace!("action argument absent, producer not invoked");
		}
	}

	fn invoke(&self, args: A) {
		let generation = self.generation.get() + 1;
		self.generation.set(generation);
		self.in_flight.set(self.in_flight.get() + 1);
		tracing::debug!(generation, "invoking action");
		self.state.update(|state| state.is_pending = true);

		let pending = (self.producer)(args);
		let this = self.this.clone();
		let task = async move {
			let result = pending.await;
			match this.upgrade() {
				Some(inner) => inner.settle(generation, result),
				None => tracing::trace!(generation, "action dropped before resolution"),
			}
		};

		if let Err(err) = self.spawner.spawn_local(task) {
			tracing::error!(generation, error = %err, "failed to spawn action");
			self.in_flight.set(self.in_flight.get().saturating_sub(1));
			let is_pending = self.in_flight.get() > 0;
			self.state.update(|state| {
				state.is_pending = is_pending;
				state.error = Some(Rc::new(ActionError::Spawn(err)));
			});
		}
	}

	fn settle(&self, generation: u64, result: anyhow::Result<R>) {
		self.in_flight.set(self.in_flight.get().saturating_sub(1));
		let is_pending = self.in_flight.get() > 0;
		let latest = self.generation.get();

		if self.policy == ResolutionPolicy::LatestTriggered && generation != latest {
			tracing::debug!(generation, latest, "discarding stale resolution");
			self.state.update(|state| state.is_pending = is_pending);
			return;
		}

		match result {
			Ok(value) => {
				tracing::debug!(generation, "action resolved");
				self.state.update(|state| {
					state.value = Some(value);
					state.error = None;
					state.is_pending = is_pending;
				});
			}
			Err(err) => {
				tracing::error!(generation, error = %err, "action failed");
				self.state.update(|state| {
					state.error = Some(Rc::new(ActionError::Producer(err)));
					state.is_pending = is_pending;
				});
			}
		}
	}
}

impl<A: Dependencies, R: 'static> RefreshTarget for Inner<A, R> {
	fn refresh(&self) {
		let args = self.args.borrow().clone();
		match args {
			Some(args) if args.is_complete() => self.invoke(args),
			Some(_) => tracing::trace!("refresh skipped, action argument absent"),
			None => tracing::trace!("refresh skipped, action never activated"),
		}
	}
}

/// Asynchronous data source bound to one page
///
/// `A` is the argument tuple (see [`Dependencies`]), `R` the resolved value.
/// The action exclusively owns its [`ActionState`]; dropping it discards
/// results of calls still in flight.
pub struct Action<A, R> {
	inner: Rc<Inner<A, R>>,
}

impl<A: Dependencies, R: 'static> Action<A, R> {
	/// Creates an action with [`ResolutionPolicy::LastResolved`]
	///
	/// # Arguments
	///
	/// * `producer` - Called with the argument tuple; resolves with the new
	///   value, or an error signalling fetch failure
	/// * `spawner` - Executor running the producer futures
	pub fn new<F, Fut, S>(producer: F, spawner: S) -> Self
	where
		F: Fn(A) -> Fut + 'static,
		Fut: Future<Output = anyhow::Result<R>> + 'static,
		S: LocalSpawn + 'static,
	{
		Self::with_policy(producer, spawner, ResolutionPolicy::default())
	}

	/// Creates an action with an explicit resolution policy
	pub fn with_policy<F, Fut, S>(producer: F, spawner: S, policy: ResolutionPolicy) -> Self
	where
		F: Fn(A) -> Fut + 'static,
		Fut: Future<Output = anyhow::Result<R>> + 'static,
		S: LocalSpawn + 'static,
	{
		let producer: Producer<A, R> = Rc::new(move |args| producer(args).boxed_local());
		let spawner: Rc<dyn LocalSpawn> = Rc::new(spawner);
		let inner = Rc::new_cyclic(|this| Inner {
			this: this.clone(),
			producer,
			spawner,
			policy,
			args: RefCell::new(None),
			generation: Cell::new(0),
			in_flight: Cell::new(0),
			state: Signal::new(ActionState::default()),
		});
		Self { inner }
	}

	/// Feeds the current argument tuple; call on every render pass
	pub fn activate(&self, args: A) {
		self.inner.activate(args);
	}

	/// Re-runs the producer with the current arguments
	pub fn refresh(&self) {
		RefreshTarget::refresh(&*self.inner);
	}

	/// Stable handle to [`Action::refresh`]
	///
	/// Every call returns a handle equal to the previous ones. Handles do not
	/// keep the action alive.
	pub fn refresher(&self) -> Refresh {
		let target: Weak<dyn RefreshTarget> = self.inner.this.clone();
		Refresh { target }
	}

	/// Snapshot of the current state
	pub fn state(&self) -> ActionState<R>
	where
		R: Clone,
	{
		self.inner.state.get()
	}

	/// Reads the current state without cloning it
	pub fn with_state<U>(&self, f: impl FnOnce(&ActionState<R>) -> U) -> U {
		self.inner.state.with(f)
	}

	/// Signal publishing every state change
	pub fn signal(&self) -> Signal<ActionState<R>> {
		self.inner.state.clone()
	}

	/// Whether a producer call is in flight
	pub fn is_pending(&self) -> bool {
		self.inner.in_flight.get() > 0
	}

	/// Number of producer calls started so far
	pub fn invocations(&self) -> u64 {
		self.inner.generation.get()
	}

	/// Last activated argument tuple
	pub fn arguments(&self) -> Option<A> {
		self.inner.args.borrow().clone()
	}

	/// The resolution policy
	pub fn policy(&self) -> ResolutionPolicy {
		self.inner.policy
	}
}

impl<A, R> fmt::Debug for Action<A, R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Action")
			.field("policy", &self.inner.policy)
			.field("invocations", &self.inner.generation.get())
			.field("in_flight", &self.inner.in_flight.get())
			.finish_non_exhaustive()
	}
}

/// Cloneable handle re-running an action's producer
///
/// Usable from nested closures such as status toggle callbacks. Refreshing
/// after the action was dropped does nothing.
#[derive(Clone)]
pub struct Refresh {
	target: Weak<dyn RefreshTarget>,
}

impl Refresh {
	/// Re-runs the producer of the action, if it is still alive
	pub fn refresh(&self) {
		match self.target.upgrade() {
			Some(target) => target.refresh(),
			None => tracing::trace!("refresh of a dropped action ignored"),
		}
	}

	/// Whether the action still exists
	pub fn is_alive(&self) -> bool {
		self.target.strong_count() > 0
	}
}

impl PartialEq for Refresh {
	fn eq(&self, other: &Self) -> bool {
		Weak::ptr_eq(&self.target, &other.target)
	}
}

impl Eq for Refresh {}

impl fmt::Debug for Refresh {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Refresh")
			.field("alive", &self.is_alive())
			.finish()
	}
}

impl From<Refresh> for Callback {
	fn from(refresh: Refresh) -> Self {
		Callback::new(move |()| refresh.refresh())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use futures::channel::oneshot;
	use futures::executor::LocalPool;
	use futures::task::{LocalFutureObj, SpawnError};
	use proptest::prelude::*;
	use rstest::*;

	type Calls = Rc<RefCell<Vec<Option<u8>>>>;
	type Replies = Rc<RefCell<Vec<oneshot::Sender<anyhow::Result<u32>>>>>;

	#[fixture]
	fn pool() -> LocalPool {
		LocalPool::new()
	}

	fn counting_action(pool: &LocalPool) -> (Action<(Option<u8>,), String>, Calls) {
		let calls = Calls::default();
		let action = Action::new(
			{
				let calls = Rc::clone(&calls);
				move |(id,): (Option<u8>,)| {
					calls.borrow_mut().push(id);
					async move { Ok(format!("customer-{}", id.unwrap_or_default())) }
				}
			},
			pool.spawner(),
		);
		(action, calls)
	}

	fn controlled_action(pool: &LocalPool, policy: ResolutionPolicy) -> (Action<(u32,), u32>, Replies) {
		let replies = Replies::default();
		let action = Action::with_policy(
			{
				let replies = Rc::clone(&replies);
				move |_: (u32,)| {
					let (tx, rx) = oneshot::channel();
					replies.borrow_mut().push(tx);
					async move { rx.await.unwrap_or_else(|canceled| Err(canceled.into())) }
				}
			},
			pool.spawner(),
			policy,
		);
		(action, replies)
	}

	fn reply(replies: &Replies, index: usize, result: anyhow::Result<u32>) {
		let sender = replies.borrow_mut().remove(index);
		assert!(sender.send(result).is_ok());
	}

	struct RefusingSpawner;

	impl LocalSpawn for RefusingSpawner {
		fn spawn_local_obj(&self, _future: LocalFutureObj<'static, ()>) -> Result<(), SpawnError> {
			Err(SpawnError::shutdown())
		}
	}

	#[rstest]
	fn test_first_activation_invokes_once(mut pool: LocalPool) {
		let (action, calls) = counting_action(&pool);

		action.activate((Some(1),));
		assert!(action.state().is_pending);
		pool.run_until_stalled();

		let state = action.state();
		assert_eq!(state.value.as_deref(), Some("customer-1"));
		assert!(!state.is_pending);
		assert!(state.error.is_none());
		assert_eq!(*calls.borrow(), vec![Some(1)]);
	}

	#[rstest]
	fn test_value_equal_arguments_do_not_refetch(mut pool: LocalPool) {
		let (action, calls) = counting_action(&pool);

		for _ in 0..5 {
			// fresh tuple on every render pass
			action.activate((Some(1),));
			pool.run_until_stalled();
		}

		assert_eq!(calls.borrow().len(), 1);
		assert_eq!(action.invocations(), 1);
	}

	#[rstest]
	fn test_changed_arguments_refetch(mut pool: LocalPool) {
		let (action, calls) = counting_action(&pool);

		action.activate((Some(1),));
		pool.run_until_stalled();
		action.activate((Some(2),));
		action.activate((Some(2),));
		pool.run_until_stalled();

		assert_eq!(*calls.borrow(), vec![Some(1), Some(2)]);
		assert_eq!(action.state().value.as_deref(), Some("customer-2"));
	}

	#[rstest]
	fn test_absent_argument_never_invokes(mut pool: LocalPool) {
		let (action, calls) = counting_action(&pool);

		action.activate((None,));
		action.activate((None,));
		action.refresh();
		pool.run_until_stalled();

		assert!(calls.borrow().is_empty());
		let state = action.state();
		assert!(state.value.is_none());
		assert!(!state.is_pending);

		action.activate((Some(5),));
		pool.run_until_stalled();
		assert_eq!(*calls.borrow(), vec![Some(5)]);
	}

	#[rstest]
	fn test_absent_argument_keeps_previous_value(mut pool: LocalPool) {
		let (action, calls) = counting_action(&pool);

		action.activate((Some(3),));
		pool.run_until_stalled();
		action.activate((None,));
		pool.run_until_stalled();

		assert_eq!(calls.borrow().len(), 1);
		assert_eq!(action.state().value.as_deref(), Some("customer-3"));
		assert_eq!(action.arguments(), Some((None,)));
	}

	#[rstest]
	fn test_refresh_invokes_once_per_call(mut pool: LocalPool) {
		let count = Rc::new(Cell::new(0_u32));
		let action = Action::new(
			{
				let count = Rc::clone(&count);
				move |()| {
					count.set(count.get() + 1);
					let n = count.get();
					async move { Ok(n) }
				}
			},
			pool.spawner(),
		);

		action.refresh();
		assert_eq!(count.get(), 0);

		action.activate(());
		action.refresh();
		action.refresher().refresh();
		action.refresh();
		pool.run_until_stalled();

		assert_eq!(count.get(), 4);
		assert_eq!(action.invocations(), 4);
		assert!(action.state().value.is_some());
	}

	#[rstest]
	fn test_last_resolved_wins(mut pool: LocalPool) {
		let (action, replies) = controlled_action(&pool, ResolutionPolicy::LastResolved);

		action.activate((1,));
		action.activate((2,));
		pool.run_until_stalled();
		assert_eq!(replies.borrow().len(), 2);

		// second call settles first
		reply(&replies, 1, Ok(20));
		pool.run_until_stalled();
		let state = action.state();
		assert_eq!(state.value, Some(20));
		assert!(state.is_pending);

		reply(&replies, 0, Ok(10));
		pool.run_until_stalled();
		let state = action.state();
		assert_eq!(state.value, Some(10));
		assert!(!state.is_pending);
	}

	#[rstest]
	fn test_latest_triggered_discards_stale(mut pool: LocalPool) {
		let (action, replies) = controlled_action(&pool, ResolutionPolicy::LatestTriggered);
		assert_eq!(action.policy(), ResolutionPolicy::LatestTriggered);

		action.activate((1,));
		action.activate((2,));
		pool.run_until_stalled();

		reply(&replies, 1, Ok(20));
		pool.run_until_stalled();
		reply(&replies, 0, Ok(10));
		pool.run_until_stalled();

		let state = action.state();
		assert_eq!(state.value, Some(20));
		assert!(!state.is_pending);
	}

	#[rstest]
	fn test_producer_error_keeps_value(mut pool: LocalPool) {
		let (action, replies) = controlled_action(&pool, ResolutionPolicy::default());

		action.activate((1,));
		pool.run_until_stalled();
		reply(&replies, 0, Ok(10));
		pool.run_until_stalled();

		action.refresh();
		pool.run_until_stalled();
		reply(&replies, 0, Err(anyhow::anyhow!("gateway timeout")));
		pool.run_until_stalled();

		let state = action.state();
		assert_eq!(state.value, Some(10));
		assert!(!state.is_pending);
		let error = state.error.expect("error recorded");
		assert!(matches!(*error, ActionError::Producer(_)));
		assert!(error.to_string().contains("gateway timeout"));

		action.refresh();
		pool.run_until_stalled();
		reply(&replies, 0, Ok(11));
		pool.run_until_stalled();

		let state = action.state();
		assert_eq!(state.value, Some(11));
		assert!(state.error.is_none());
	}

	#[rstest]
	fn test_spawn_failure_is_recorded() {
		let action = Action::new(|()| async { Ok(1_u8) }, RefusingSpawner);

		action.activate(());

		let state = action.state();
		assert!(!state.is_pending);
		assert!(state.value.is_none());
		assert!(matches!(state.error.as_deref(), Some(ActionError::Spawn(_))));
	}

	#[rstest]
	fn test_refresh_handle_is_stable_and_weak(mut pool: LocalPool) {
		let (action, calls) = counting_action(&pool);
		action.activate((Some(1),));

		let first = action.refresher();
		let second = action.refresher();
		assert_eq!(first, second);
		assert!(first.is_alive());

		let callback: Callback = second.into();
		callback.call(());
		pool.run_until_stalled();
		assert_eq!(calls.borrow().len(), 2);

		drop(action);
		assert!(!first.is_alive());
		first.refresh();
		pool.run_until_stalled();
		assert_eq!(calls.borrow().len(), 2);
	}

	#[rstest]
	fn test_drop_discards_in_flight_results(mut pool: LocalPool) {
		let (action, replies) = controlled_action(&pool, ResolutionPolicy::default());
		action.activate((1,));
		pool.run_until_stalled();

		let signal = action.signal();
		drop(action);

		reply(&replies, 0, Ok(10));
		pool.run_until_stalled();
		assert!(signal.with(|state| state.value.is_none()));
	}

	#[rstest]
	fn test_signal_notifies_on_start_and_settle(mut pool: LocalPool) {
		let (action, _calls) = counting_action(&pool);
		let notifications = Rc::new(Cell::new(0));
		action.signal().subscribe({
			let notifications = Rc::clone(&notifications);
			move || notifications.set(notifications.get() + 1)
		});

		action.activate((Some(1),));
		assert_eq!(notifications.get(), 1);
		pool.run_until_stalled();
		assert_eq!(notifications.get(), 2);
	}

	proptest! {
		/// Property: the producer runs exactly once per change to a complete
		/// argument tuple
		#[test]
		fn prop_invocations_follow_argument_changes(
			args in prop::collection::vec(prop::option::of(0_u8..3), 0..40)
		) {
			let pool = LocalPool::new();
			let (action, calls) = counting_action(&pool);

			let mut expected = 0;
			let mut previous: Option<Option<u8>> = None;
			for arg in &args {
				action.activate((*arg,));
				if previous != Some(*arg) && arg.is_some() {
					expected += 1;
				}
				previous = Some(*arg);
			}

			prop_assert_eq!(calls.borrow().len(), expected);
		}
	}
}
