//! Test helpers
//!
//! End-to-end helpers: parse a config source and run an input through it.

use automa_core::config::reader;
use automa_core::runtime::{self, Outcome};
use automa_core::Dfa;

/// The reference configuration from the format documentation
pub const SAMPLE_CONFIG: &str = "\
s1,s2,s3
0,1
s1
s3
s1,0,s2
s2,1,s3
s3,0,s1
";

/// Parse `source` and walk `input` through the resulting automaton
pub fn check(source: &str, input: &str) -> Result<Outcome, String> {
    let dfa = load(source)?;
    Ok(runtime::run(&dfa, input))
}

/// Parse `source` into a `Dfa`
pub fn load(source: &str) -> Result<Dfa, String> {
    reader::parse(source).map_err(|e| format!("config error: {}", e))
}

/// Collect a trace as `from-symbol-to` strings for compact assertions
pub fn trace_lines(outcome: &Outcome) -> Vec<String> {
    outcome.trace.iter().map(|s| s.to_string()).collect()
}
