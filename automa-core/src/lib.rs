//! Automa Core - DFA simulator core (pure logic, no IO)
//!
//! Contains the DFA model, the config reader/writer, the invariant
//! validation pass, and the execution engine.
//! Only operates on in-memory data structures, no file IO or terminal output.
//!
//! Configuration is passed explicitly via parameters, not via global state.

pub mod config;
pub mod machine;
pub mod runtime;

// Re-export common types
pub use config::{ConfigError, Section};
pub use machine::{validate, Dfa, Transition, ValidationError, Violation};
pub use runtime::{run, Outcome, TraceStep, Verdict};

// Re-export config types from automa-config
pub use automa_config::{EngineConfig, ParserConfig, Phase};
