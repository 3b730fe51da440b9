//! Execution trace
//!
//! One `TraceStep` per consumed input symbol. The trace is part of the
//! observable contract of a run; front-ends decide how to render it.

use serde::Serialize;

/// A single consumed symbol: the state before, the symbol, the state after
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    /// State before the step
    pub from: String,
    /// The one-character symbol consumed
    pub symbol: char,
    /// State after the step
    pub to: String,
}

impl TraceStep {
    pub fn new(from: impl Into<String>, symbol: char, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            symbol,
            to: to.into(),
        }
    }
}

impl std::fmt::Display for TraceStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -{}-> {}", self.from, self.symbol, self.to)
    }
}
