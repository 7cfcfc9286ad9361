//! Daily COVID health screening in the terminal.
//!
//! The screening flow lives in `screening` and `state` and runs without a
//! terminal; `ui`, `events` and `app` drive it interactively.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod export;
pub mod logger;
pub mod screening;
pub mod state;
pub mod store;
pub mod ui;
