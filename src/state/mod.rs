//! Application state management module.
//!
//! This module contains the state driving the terminal screens, including:
//! - Main `State` struct holding settings, the screening form and the view stack
//! - Navigation types (View) and the landing rules
//! - Profile editor form types
//! - State error handling

mod error;
mod form;
mod navigation;

pub use error::StateError;
pub use form::{ProfileEditor, ProfileField};
pub use navigation::{landing_view, result_view, status_text, View, NO_SUBMISSION};

#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
