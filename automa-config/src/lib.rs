//! Automa Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Automa crates.

/// Configuration for parser behavior
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Whether to run the invariant validation pass after parsing
    pub strict: bool,
}

/// Configuration for the execution engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Whether to collect and render a step-by-step trace
    pub trace: bool,
}

/// Execution phase enum for phase-specific configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Parser,
    Validator,
    Engine,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Parser => "parser",
            Phase::Validator => "validator",
            Phase::Engine => "engine",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("automa::{}", self.as_str())
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { strict: false }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { trace: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parser_config() {
        let cfg = ParserConfig::default();
        assert!(!cfg.strict);
    }

    #[test]
    fn test_default_engine_config() {
        let cfg = EngineConfig::default();
        assert!(cfg.trace);
    }

    #[test]
    fn test_phase_as_str() {
        assert_eq!(Phase::Parser.as_str(), "parser");
        assert_eq!(Phase::Engine.target(), "automa::engine");
    }
}
