//! Core traits and types for the support assistant
//!
//! This crate provides foundational types used across all other crates:
//! - Capability traits for the external collaborators (language
//!   identification, sentiment polarity scoring)
//! - Language and script definitions
//! - Error types

pub mod error;
pub mod language;
pub mod traits;

pub use error::{Error, Result};
pub use language::{Language, Script};
pub use traits::{LanguageDetector, SentimentScorer};
