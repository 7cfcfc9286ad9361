//! Event handling module.
//!
//! This module contains the handler for terminal events: key presses are
//! polled on a separate thread and applied to state on the main thread.

pub mod terminal;
