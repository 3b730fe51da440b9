//! Execution engine
//!
//! Walks an input string through a borrowed `Dfa`, one character at a
//! time, and classifies it. The walk is total: every run ends in exactly
//! one of `Accepted`, `Rejected`, or `Stuck`, and identical inputs always
//! produce identical outcomes.

use tracing::{debug, trace};

use super::trace::TraceStep;
use crate::machine::dfa::Dfa;

/// Final classification of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Input exhausted in an accepting state
    Accepted { state: String },
    /// Input exhausted in a non-accepting state
    Rejected { state: String },
    /// No transition for `(state, symbol)`; terminal and non-accepting,
    /// a normal outcome rather than an error
    Stuck { state: String, symbol: char },
}

impl Verdict {
    /// Whether the input was accepted
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted { .. })
    }

    /// The state the run ended in
    pub fn state(&self) -> &str {
        match self {
            Verdict::Accepted { state } | Verdict::Rejected { state } => state,
            Verdict::Stuck { state, .. } => state,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Accepted { state } => write!(f, "accepted in state '{}'", state),
            Verdict::Rejected { state } => write!(f, "rejected in state '{}'", state),
            Verdict::Stuck { state, symbol } => {
                write!(f, "stuck in state '{}' on symbol '{}'", state, symbol)
            }
        }
    }
}

/// Result of one run: the verdict plus the consumed-symbol trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub verdict: Verdict,
    pub trace: Vec<TraceStep>,
}

/// Run `input` through `dfa` from its initial state
///
/// Each input character forms a one-character symbol looked up via
/// `Dfa::transition`. A lookup miss stops the walk immediately with
/// `Stuck`; exhausted input is classified by membership of the final
/// state in the accepting set.
pub fn run(dfa: &Dfa, input: &str) -> Outcome {
    let mut current = dfa.initial_state.as_str();
    let mut steps = Vec::new();

    for symbol in input.chars() {
        let key = symbol.to_string();
        match dfa.transition(current, &key) {
            Some(next) => {
                trace!(
                    target: "automa::engine",
                    from = current,
                    %symbol,
                    to = next,
                    "step"
                );
                steps.push(TraceStep::new(current, symbol, next));
                current = next;
            }
            None => {
                debug!(
                    target: "automa::engine",
                    state = current,
                    %symbol,
                    "no transition defined"
                );
                return Outcome {
                    verdict: Verdict::Stuck {
                        state: current.to_string(),
                        symbol,
                    },
                    trace: steps,
                };
            }
        }
    }

    let verdict = if dfa.is_accepting(current) {
        Verdict::Accepted {
            state: current.to_string(),
        }
    } else {
        Verdict::Rejected {
            state: current.to_string(),
        }
    };
    debug!(target: "automa::engine", %verdict, steps = steps.len(), "run finished");

    Outcome {
        verdict,
        trace: steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::dfa::Transition;

    fn sample_dfa() -> Dfa {
        Dfa {
            states: vec!["s1".into(), "s2".into(), "s3".into()],
            alphabet: vec!["0".into(), "1".into()],
            transitions: vec![
                Transition::new("s1", "0", "s2"),
                Transition::new("s2", "1", "s3"),
                Transition::new("s3", "0", "s1"),
            ],
            initial_state: "s1".into(),
            accepting_states: vec!["s3".into()],
        }
    }

    #[test]
    fn test_rejected_run() {
        let outcome = run(&sample_dfa(), "0");
        assert_eq!(outcome.verdict, Verdict::Rejected { state: "s2".into() });
        assert_eq!(outcome.trace, vec![TraceStep::new("s1", '0', "s2")]);
    }

    #[test]
    fn test_accepted_run() {
        let outcome = run(&sample_dfa(), "01");
        assert!(outcome.verdict.is_accepted());
        assert_eq!(outcome.verdict.state(), "s3");
        assert_eq!(
            outcome.trace,
            vec![
                TraceStep::new("s1", '0', "s2"),
                TraceStep::new("s2", '1', "s3"),
            ]
        );
    }

    #[test]
    fn test_stuck_run() {
        let outcome = run(&sample_dfa(), "2");
        assert_eq!(
            outcome.verdict,
            Verdict::Stuck {
                state: "s1".into(),
                symbol: '2'
            }
        );
        assert!(outcome.trace.is_empty());
    }

    #[test]
    fn test_stuck_keeps_partial_trace() {
        let outcome = run(&sample_dfa(), "02");
        assert_eq!(
            outcome.verdict,
            Verdict::Stuck {
                state: "s2".into(),
                symbol: '2'
            }
        );
        assert_eq!(outcome.trace, vec![TraceStep::new("s1", '0', "s2")]);
    }

    #[test]
    fn test_empty_input_classifies_initial_state() {
        let outcome = run(&sample_dfa(), "");
        assert_eq!(outcome.verdict, Verdict::Rejected { state: "s1".into() });
        assert!(outcome.trace.is_empty());

        let mut accepting_start = sample_dfa();
        accepting_start.accepting_states = vec!["s1".into()];
        assert!(run(&accepting_start, "").verdict.is_accepted());
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(
            Verdict::Stuck {
                state: "s1".into(),
                symbol: '2'
            }
            .to_string(),
            "stuck in state 's1' on symbol '2'"
        );
    }
}
