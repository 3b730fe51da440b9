//! Config writer
//!
//! Serializes a `Dfa` back to the five-section text format. Parsing the
//! result yields an identical automaton (round-trip), which also backs the
//! CLI's machine-dump output.

use crate::machine::dfa::Dfa;

/// Serialize `dfa` in the five-section config format
pub fn write(dfa: &Dfa) -> String {
    let mut out = String::new();
    out.push_str(&dfa.states.join(","));
    out.push('\n');
    out.push_str(&dfa.alphabet.join(","));
    out.push('\n');
    out.push_str(&dfa.initial_state);
    out.push('\n');
    out.push_str(&dfa.accepting_states.join(","));
    out.push('\n');
    for t in &dfa.transitions {
        out.push_str(&format!("{},{},{}\n", t.from, t.symbol, t.to));
    }
    out
}
