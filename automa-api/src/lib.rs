//! Automa API - Execution orchestration layer
//!
//! Provides the unified checking interface, including:
//! - Load/check flow orchestration
//! - Configuration abstraction (RunConfig)
//! - Unified error handling (AutomaError)
//!
//! For CLI convenience, this crate provides a global singleton API.
//! For library use, prefer the explicit `check(source, input, &config)` API.

use std::path::Path;

use tracing::{debug, info};

use automa_core::config::{reader, writer};
use automa_core::machine::validate;
use automa_core::runtime;

// Re-export config
pub mod config;
pub use config::{config as get_config, init as init_config, is_initialized, RunConfig};

// Re-export config types from automa_config
pub use automa_config::{EngineConfig, ParserConfig, Phase};

// Re-export error and types
pub mod error;
pub mod types;
pub use error::{AutomaError, ConfigError, ErrorReport, ValidationError};
pub use types::CheckOutput;

// Re-export core types
pub use automa_config;
pub use automa_core::{Dfa, Outcome, TraceStep, Transition, Verdict};

/// Load an automaton from config text with explicit configuration
///
/// Runs the invariant validation pass when `config.parser.strict` is set.
pub fn load(source: &str, config: &RunConfig) -> Result<Dfa, AutomaError> {
    let dfa = reader::parse(source)?;
    if config.parser.strict {
        validate(&dfa)?;
    }
    debug!(
        states = dfa.states.len(),
        transitions = dfa.transitions.len(),
        strict = config.parser.strict,
        "automaton loaded"
    );
    Ok(dfa)
}

/// Load an automaton from a config file
///
/// Any failure opening or reading the file is fatal and surfaced as
/// `AutomaError::Io` before any execution.
pub fn load_file(path: impl AsRef<Path>, config: &RunConfig) -> Result<Dfa, AutomaError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)
        .map_err(|e| AutomaError::Io(format!("'{}': {}", path.display(), e)))?;
    load(&source, config)
}

/// Check one input string with explicit configuration
///
/// This is the recommended API for library users.
pub fn check(source: &str, input: &str, config: &RunConfig) -> Result<CheckOutput, AutomaError> {
    info!("starting check");

    let dfa = load(source, config)?;
    let output = check_machine(&dfa, input, config);

    info!("check completed");
    Ok(output)
}

/// Check one input string against an already-loaded automaton
pub fn check_machine(dfa: &Dfa, input: &str, config: &RunConfig) -> CheckOutput {
    let machine_dump = config.dump_machine.then(|| writer::write(dfa));

    let outcome = runtime::run(dfa, input);
    let trace = if config.engine.trace {
        outcome.trace
    } else {
        Vec::new()
    };

    CheckOutput {
        verdict: outcome.verdict,
        trace,
        machine_dump,
    }
}

// ==================== Legacy API (using global config) ====================

/// Check one input string (uses global config)
///
/// # Panics
/// If global config is not initialized
pub fn check_source(source: &str, input: &str) -> Result<CheckOutput, AutomaError> {
    let config = get_config();
    check(source, input, config)
}

/// Quick check with default config (auto-initializes if needed)
pub fn quick_check(source: &str, input: &str) -> Result<CheckOutput, AutomaError> {
    if !is_initialized() {
        init_config(RunConfig::default());
    }
    check_source(source, input)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "s1,s2,s3\n0,1\ns1\ns3\ns1,0,s2\ns2,1,s3\ns3,0,s1\n";

    #[test]
    fn test_check_with_explicit_config() {
        let config = RunConfig::default();
        let output = check(SAMPLE, "01", &config).unwrap();
        assert!(output.is_accepted());
        assert_eq!(output.trace.len(), 2);
        assert!(output.machine_dump.is_none());
    }

    #[test]
    fn test_check_stuck_is_not_an_error() {
        let config = RunConfig::default();
        let output = check(SAMPLE, "2", &config).unwrap();
        assert_eq!(
            output.verdict,
            Verdict::Stuck {
                state: "s1".into(),
                symbol: '2'
            }
        );
    }

    #[test]
    fn test_check_parse_failure() {
        let config = RunConfig::default();
        let err = check("s1\n0\n", "x", &config).unwrap_err();
        assert_eq!(err.phase(), "parser");
    }

    #[test]
    fn test_strict_mode_rejects_ill_formed() {
        let source = "s1\n0\nq0\ns1\n";
        let lax = RunConfig::default();
        assert!(check(source, "", &lax).is_ok());

        let strict = RunConfig {
            parser: ParserConfig { strict: true },
            ..RunConfig::default()
        };
        let err = check(source, "", &strict).unwrap_err();
        assert_eq!(err.phase(), "validator");
    }

    #[test]
    fn test_dump_machine() {
        let config = RunConfig {
            dump_machine: true,
            ..RunConfig::default()
        };
        let output = check(SAMPLE, "0", &config).unwrap();
        let dump = output.machine_dump.unwrap();
        assert!(dump.starts_with("s1,s2,s3\n"));
    }

    #[test]
    fn test_trace_suppressed_when_disabled() {
        let config = RunConfig {
            engine: EngineConfig { trace: false },
            ..RunConfig::default()
        };
        let output = check(SAMPLE, "01", &config).unwrap();
        assert!(output.is_accepted());
        assert!(output.trace.is_empty());
    }

    #[test]
    fn test_load_file_missing_path() {
        let config = RunConfig::default();
        let err = load_file("/nonexistent/automa.conf", &config).unwrap_err();
        assert_eq!(err.phase(), "io");
    }

    #[test]
    fn test_quick_check() {
        let output = quick_check(SAMPLE, "0").unwrap();
        assert!(!output.is_accepted());
    }
}
