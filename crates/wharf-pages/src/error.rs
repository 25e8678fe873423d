//! Error types for the action hook

use futures::task::SpawnError;

/// Errors recorded in [`ActionState::error`](crate::ActionState::error)
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
	/// The executor refused the producer future
	#[error("Failed to spawn action: {0}")]
	Spawn(#[from] SpawnError),

	/// The producer resolved with an error
	#[error("Action failed: {0:#}")]
	Producer(anyhow::Error),
}
