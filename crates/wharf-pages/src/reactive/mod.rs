//! Reactive primitives
//!
//! A deliberately small layer: a [`Signal`] holds a value and notifies its
//! subscribers whenever the value is replaced or updated. Action state is
//! published through a signal so rendering surfaces can re-render when a
//! fetch settles. The [`hooks`] module holds the per-render-pass helpers.

pub mod hooks;
pub mod signal;

pub use hooks::{use_action, use_refresh};
pub use signal::{Signal, Subscription};
