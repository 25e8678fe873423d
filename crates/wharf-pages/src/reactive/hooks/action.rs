//! Action hooks: use_action and use_refresh

use wharf_tables::Callback;

use crate::action::{Action, ActionState, Dependencies, Refresh};

/// Feeds this render pass's arguments to `action` and returns its state
///
/// The producer only runs when `args` differ by value from the previous
/// pass, so building the tuple afresh on every pass is fine.
///
/// # Returns
///
/// The current state and the stable refresh handle
///
/// # Example
///
/// ```
/// use futures::executor::LocalPool;
/// use wharf_pages::{Action, use_action};
///
/// let mut pool = LocalPool::new();
/// let ports = Action::new(|()| async { Ok(vec!["Tanjung Priok", "Tanjung Perak"]) }, pool.spawner());
///
/// let (state, refresh) = use_action(&ports, ());
/// assert!(state.is_pending);
///
/// pool.run_until_stalled();
/// let (state, same) = use_action(&ports, ());
/// assert_eq!(state.value.map(|ports| ports.len()), Some(2));
/// assert_eq!(refresh, same);
/// ```
pub fn use_action<A, R>(action: &Action<A, R>, args: A) -> (ActionState<R>, Refresh)
where
	A: Dependencies,
	R: Clone + 'static,
{
	action.activate(args);
	(action.state(), action.refresher())
}

/// Refresh handle of `action` as a table [`Callback`]
///
/// Meant for the `refresh` argument of a status toggle.
pub fn use_refresh<A, R>(action: &Action<A, R>) -> Callback
where
	A: Dependencies,
	R: 'static,
{
	action.refresher().into()
}
