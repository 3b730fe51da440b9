//! DFA value type
//!
//! A passive aggregate built once by the config reader and read-only
//! afterwards. It exclusively owns every state and symbol string; the
//! whole table is dropped as a unit.

use serde::Serialize;

/// One entry of the transition table: `(from, symbol, to)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition {
    /// Source state
    pub from: String,
    /// Alphabet symbol
    pub symbol: String,
    /// Destination state
    pub to: String,
}

impl Transition {
    /// Create a transition from owned fields
    pub fn new(
        from: impl Into<String>,
        symbol: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            symbol: symbol.into(),
            to: to.into(),
        }
    }
}

/// A deterministic finite automaton
///
/// `states`, `alphabet` and `accepting_states` are semantically sets;
/// declaration order is preserved because the config format is ordered
/// and the writer must round-trip it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dfa {
    /// Declared states (Q)
    pub states: Vec<String>,
    /// Declared alphabet (Σ)
    pub alphabet: Vec<String>,
    /// Transition table, in declaration order
    pub transitions: Vec<Transition>,
    /// Initial state (q0)
    pub initial_state: String,
    /// Accepting states (F), possibly empty
    pub accepting_states: Vec<String>,
}

impl Dfa {
    /// Transition lookup: first declaration-order match of `(from, symbol)`
    ///
    /// Returns `None` when no entry matches. If a malformed configuration
    /// declares two transitions for the same `(from, symbol)` pair, the
    /// first one wins; the tie-break is deliberate, not an error.
    pub fn transition(&self, from: &str, symbol: &str) -> Option<&str> {
        self.transitions
            .iter()
            .find(|t| t.from == from && t.symbol == symbol)
            .map(|t| t.to.as_str())
    }

    /// Whether `state` is in the accepting set
    pub fn is_accepting(&self, state: &str) -> bool {
        self.accepting_states.iter().any(|s| s == state)
    }

    /// Whether `state` was declared in the state set
    pub fn has_state(&self, state: &str) -> bool {
        self.states.iter().any(|s| s == state)
    }

    /// Whether `symbol` was declared in the alphabet
    pub fn has_symbol(&self, symbol: &str) -> bool {
        self.alphabet.iter().any(|s| s == symbol)
    }
}
