// Main rules module - delegates to semantic sub-modules
// This file coordinates the rule system but actual implementations are in:
// - engine.rs: RuleEngine and shared utilities
// - marker_lines.rs: Standalone/separator/embedded date-marker handling
// - heading_dates.rs: Dated heading rewrites
// - inline_dates.rs: Parenthetical inline date stripping
// - placeholder_cleanup.rs: Final empty-placeholder removal

pub mod engine;
pub mod heading_dates;
pub mod inline_dates;
pub mod marker_lines;
pub mod placeholder_cleanup;

pub use engine::*;
