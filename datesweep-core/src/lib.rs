// Datesweep Core Library
//
// Markdown date hygiene with an ordered, configurable rule pipeline.
// Main interface for sweeping stale date annotations out of documents.

pub mod config;
pub mod dates;
pub mod error;
pub mod processor;
pub mod rules;
pub mod storage;
pub mod types;

// Re-export main types and functions for easy use
pub use config::CleanConfig;
pub use error::CleanError;
pub use processor::{CleanOutcome, DocumentCleaner};
pub use rules::{DebugConfig, RuleEngine};
pub use types::*;
