//! Dialogue management for the support assistant
//!
//! Features:
//! - Static bilingual response catalog
//! - Trigger phrase sets with their three matching disciplines
//! - Rule-ordered reply selector with empathy injection
//! - Two-phase conversation controller with an exit-confirmation
//!   sub-dialogue

pub mod catalog;
pub mod controller;
pub mod phrases;
pub mod selector;

pub use catalog::{ResponseCatalog, BANNER, FALLBACK_FAREWELL};
pub use controller::{Controller, DialogPhase, SessionState, TurnOutcome};
pub use selector::ReplySelector;
