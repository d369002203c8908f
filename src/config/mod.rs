//! Run configuration for a training invocation
//!
//! A [`RunConfiguration`] is built exactly once, from the command line, before
//! any other work starts. It is immutable thereafter and owned by whichever
//! mode runner the CLI dispatches to.

use std::fmt;

use clap::ValueEnum;

/// Execution mode selected with `--mode`. A closed set; anything outside it
/// is rejected at parse time.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Performs training and validation
    #[default]
    Train,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Train => write!(f, "train"),
        }
    }
}

/// The resolved option values of one training run.
///
/// Every field is populated, either from the invocation or from the documented
/// default. Numeric fields are intentionally unvalidated: the loader passes
/// through whatever parsed, and downstream code decides what e.g. a
/// non-positive batch size means.
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfiguration {
    pub mode: Mode,
    pub batch_size: i64,
    pub epochs: i64,
    pub learning_rate: f64,
    pub workers: i64,
    pub device: String,
}

impl Default for RunConfiguration {
    fn default() -> Self {
        Self {
            mode: Mode::Train,
            batch_size: 10,
            epochs: 20,
            learning_rate: 0.001,
            workers: 4,
            device: "cuda".to_string(),
        }
    }
}
