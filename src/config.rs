//! Configuration types for a comparison run.
//!
//! Assembled by `main.rs` from CLI arguments and handed to the command
//! handler. The debug toggle lives here as an explicit value so the core
//! and the reporters stay deterministic and testable independent of any
//! logging setup.

use crate::compare::ScoreWeights;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Input paths for a comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparePaths {
    /// The XML file being checked
    pub primary: PathBuf,
    /// The ground-truth XML file it is checked against
    pub basis: PathBuf,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the report files are written into
    pub out_dir: PathBuf,
    /// Generate one HTML page per analyzed tag
    pub html: bool,
    /// Write a JSON dump of the report
    pub json: bool,
    /// Dump each parsed element tree to an outfile (debugging aid)
    pub tree_dumps: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            html: false,
            json: false,
            tree_dumps: false,
        }
    }
}

/// Behavior flags.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Include closest-match detail in the console output
    pub debug: bool,
    /// Suppress non-essential console output
    pub quiet: bool,
}

/// Complete configuration for one comparison run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareConfig {
    pub paths: ComparePaths,
    pub output: OutputConfig,
    pub behavior: BehaviorConfig,
    /// Score weights for the comparator
    pub weights: ScoreWeights,
}

impl CompareConfig {
    /// Create a config for the given input paths with default settings.
    pub fn new(primary: impl Into<PathBuf>, basis: impl Into<PathBuf>) -> Self {
        Self {
            paths: ComparePaths {
                primary: primary.into(),
                basis: basis.into(),
            },
            output: OutputConfig::default(),
            behavior: BehaviorConfig::default(),
            weights: ScoreWeights::default(),
        }
    }
}
