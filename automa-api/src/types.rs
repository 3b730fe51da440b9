//! API type definitions
//!
//! Input and output types for loading and checking.

use automa_core::{TraceStep, Verdict};

/// Result of checking one input string against a loaded automaton
#[derive(Debug, Clone)]
pub struct CheckOutput {
    /// Final classification
    pub verdict: Verdict,
    /// One step per consumed symbol
    pub trace: Vec<TraceStep>,
    /// The loaded machine re-serialized in config format
    /// (present when `RunConfig::dump_machine` is set)
    pub machine_dump: Option<String>,
}

impl CheckOutput {
    /// Whether the input was accepted
    pub fn is_accepted(&self) -> bool {
        self.verdict.is_accepted()
    }
}
