//! Reusable UI widget components.
//!
//! This module contains the content paragraph builders shared by the screens
//! and the saved images, plus styling utilities.

pub mod content;
pub mod styling;
