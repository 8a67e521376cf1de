//! CLI command handlers.
//!
//! Testable handlers invoked by main.rs; argument parsing stays in
//! main.rs, the business logic lives here.

mod compare;

pub use compare::run_compare;

// Re-export config types used by handlers
pub use crate::config::{BehaviorConfig, CompareConfig, ComparePaths, OutputConfig};
