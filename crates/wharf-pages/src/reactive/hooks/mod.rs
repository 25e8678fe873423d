//! Page hooks
//!
//! Thin render-pass helpers over [`Action`](crate::Action).

pub mod action;

pub use action::{use_action, use_refresh};
