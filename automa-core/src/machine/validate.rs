//! Invariant validation pass
//!
//! The config reader accepts any shape of automaton; this pass checks the
//! structural invariants after construction and reports every violation at
//! once instead of deferring failure to an undefined transition at run time.
//!
//! Opt-in via `ParserConfig::strict` so the documented run-time behavior of
//! unchecked automata stays reachable by default.

use thiserror::Error;
use tracing::debug;

use super::dfa::Dfa;

/// A single violated invariant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// Initial state not in the declared state set
    #[error("initial state '{state}' is not a declared state")]
    UndeclaredInitialState { state: String },

    /// A transition endpoint (from or to) not in the declared state set
    #[error("transition #{index}: state '{state}' is not a declared state")]
    UndeclaredTransitionState { index: usize, state: String },

    /// A transition symbol not in the declared alphabet
    #[error("transition #{index}: symbol '{symbol}' is not in the alphabet")]
    UndeclaredTransitionSymbol { index: usize, symbol: String },

    /// An accepting state not in the declared state set
    #[error("accepting state '{state}' is not a declared state")]
    UndeclaredAcceptingState { state: String },

    /// Two transitions share `(from, symbol)` with differing destinations
    #[error("transition #{index}: duplicate pair ('{from}', '{symbol}'); the first declaration wins")]
    DuplicateTransition {
        index: usize,
        from: String,
        symbol: String,
    },

    /// Alphabet token longer than one character can never match a
    /// one-character run-time symbol
    #[error("alphabet symbol '{symbol}' is longer than one character and can never be matched")]
    UnmatchableSymbol { symbol: String },
}

/// Validation failure: every violated invariant, in detection order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "automaton failed validation ({} violations):", self.violations.len())?;
        for v in &self.violations {
            writeln!(f, "  - {}", v)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Check all structural invariants of `dfa`
///
/// Returns `Ok(())` for a well-formed automaton, otherwise the full list
/// of violations in detection order.
pub fn validate(dfa: &Dfa) -> Result<(), ValidationError> {
    let mut violations = Vec::new();

    if !dfa.has_state(&dfa.initial_state) {
        violations.push(Violation::UndeclaredInitialState {
            state: dfa.initial_state.clone(),
        });
    }

    for (index, t) in dfa.transitions.iter().enumerate() {
        if !dfa.has_state(&t.from) {
            violations.push(Violation::UndeclaredTransitionState {
                index,
                state: t.from.clone(),
            });
        }
        if !dfa.has_state(&t.to) {
            violations.push(Violation::UndeclaredTransitionState {
                index,
                state: t.to.clone(),
            });
        }
        if !dfa.has_symbol(&t.symbol) {
            violations.push(Violation::UndeclaredTransitionSymbol {
                index,
                symbol: t.symbol.clone(),
            });
        }

        // determinism: an earlier entry with the same (from, symbol) shadows this one
        let shadowed = dfa.transitions[..index]
            .iter()
            .any(|earlier| earlier.from == t.from && earlier.symbol == t.symbol);
        if shadowed {
            violations.push(Violation::DuplicateTransition {
                index,
                from: t.from.clone(),
                symbol: t.symbol.clone(),
            });
        }
    }

    for state in &dfa.accepting_states {
        if !dfa.has_state(state) {
            violations.push(Violation::UndeclaredAcceptingState {
                state: state.clone(),
            });
        }
    }

    for symbol in &dfa.alphabet {
        if symbol.chars().count() > 1 {
            violations.push(Violation::UnmatchableSymbol {
                symbol: symbol.clone(),
            });
        }
    }

    if violations.is_empty() {
        debug!(target: "automa::validator", "automaton passed validation");
        Ok(())
    } else {
        debug!(
            target: "automa::validator",
            violations = violations.len(),
            "automaton failed validation"
        );
        Err(ValidationError { violations })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::dfa::Transition;

    fn well_formed() -> Dfa {
        Dfa {
            states: vec!["s1".into(), "s2".into(), "s3".into()],
            alphabet: vec!["0".into(), "1".into()],
            transitions: vec![
                Transition::new("s1", "0", "s2"),
                Transition::new("s2", "1", "s3"),
            ],
            initial_state: "s1".into(),
            accepting_states: vec!["s3".into()],
        }
    }

    #[test]
    fn test_well_formed_passes() {
        assert!(validate(&well_formed()).is_ok());
    }

    #[test]
    fn test_undeclared_initial_state() {
        let mut dfa = well_formed();
        dfa.initial_state = "q0".into();
        let err = validate(&dfa).unwrap_err();
        assert_eq!(
            err.violations,
            vec![Violation::UndeclaredInitialState { state: "q0".into() }]
        );
    }

    #[test]
    fn test_undeclared_transition_endpoints() {
        let mut dfa = well_formed();
        dfa.transitions.push(Transition::new("s9", "0", "s8"));
        let err = validate(&dfa).unwrap_err();
        assert_eq!(
            err.violations,
            vec![
                Violation::UndeclaredTransitionState {
                    index: 2,
                    state: "s9".into()
                },
                Violation::UndeclaredTransitionState {
                    index: 2,
                    state: "s8".into()
                },
            ]
        );
    }

    #[test]
    fn test_undeclared_symbol() {
        let mut dfa = well_formed();
        dfa.transitions.push(Transition::new("s1", "2", "s2"));
        let err = validate(&dfa).unwrap_err();
        assert_eq!(
            err.violations,
            vec![Violation::UndeclaredTransitionSymbol {
                index: 2,
                symbol: "2".into()
            }]
        );
    }

    #[test]
    fn test_undeclared_accepting_state() {
        let mut dfa = well_formed();
        dfa.accepting_states.push("s7".into());
        let err = validate(&dfa).unwrap_err();
        assert_eq!(
            err.violations,
            vec![Violation::UndeclaredAcceptingState { state: "s7".into() }]
        );
    }

    #[test]
    fn test_duplicate_transition_reported_once() {
        let mut dfa = well_formed();
        dfa.transitions.push(Transition::new("s1", "0", "s3"));
        let err = validate(&dfa).unwrap_err();
        assert_eq!(
            err.violations,
            vec![Violation::DuplicateTransition {
                index: 2,
                from: "s1".into(),
                symbol: "0".into()
            }]
        );
    }

    #[test]
    fn test_unmatchable_symbol() {
        let mut dfa = well_formed();
        dfa.alphabet.push("ab".into());
        let err = validate(&dfa).unwrap_err();
        assert_eq!(
            err.violations,
            vec![Violation::UnmatchableSymbol { symbol: "ab".into() }]
        );
    }

    #[test]
    fn test_all_violations_collected() {
        let dfa = Dfa {
            states: vec!["s1".into()],
            alphabet: vec!["ab".into()],
            transitions: vec![
                Transition::new("s1", "0", "s2"),
                Transition::new("s1", "0", "s3"),
            ],
            initial_state: "q0".into(),
            accepting_states: vec!["s9".into()],
        };
        let err = validate(&dfa).unwrap_err();
        // q0, s2, symbol 0, s3, symbol 0 (again), duplicate, s9, ab
        assert_eq!(err.violations.len(), 8);
        let display = err.to_string();
        assert!(display.contains("8 violations"));
        assert!(display.contains("initial state 'q0'"));
    }
}
