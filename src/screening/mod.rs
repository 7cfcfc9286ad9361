//! Screening domain module.
//!
//! This module holds the screening model, independent of any terminal code:
//! - Profile and survey result values
//! - The screening form state machine
//! - Date formatting for headlines
//! - Screen content builders and external links

pub mod content;
pub mod date;
mod error;
pub mod form;
pub mod links;
mod profile;
mod survey;

pub use date::ScreenDate;
pub use error::ScreeningError;
pub use form::{FormState, ScreeningForm, SubmitGate, PROFILE_WARNING};
pub use links::{Browser, ExternalLink, SystemBrowser};
pub use profile::{Profile, CONTACT_DOMAIN, HEALTH_CENTER_EMAIL};
pub use survey::{distant_past, Answer, Outcome, SurveyResult};
