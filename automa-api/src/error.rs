//! API error types
//!
//! Unified error type and structured error reports for front-ends.

use thiserror::Error;

/// Config parse error (structured)
pub use automa_core::config::ConfigError;

/// Validation error (structured)
pub use automa_core::machine::ValidationError;

/// Automa error type
#[derive(Error, Debug, Clone)]
pub enum AutomaError {
    /// Configuration parse error (structured)
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Invariant validation error (strict mode)
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Configuration source could not be read
    #[error("cannot read configuration: {0}")]
    Io(String),
}

impl AutomaError {
    /// Config line number the error refers to (if any)
    pub fn line(&self) -> Option<usize> {
        match self {
            AutomaError::Config(e) => Some(e.line()),
            _ => None,
        }
    }

    /// Phase name the error belongs to
    pub fn phase(&self) -> &'static str {
        match self {
            AutomaError::Config(_) => "parser",
            AutomaError::Validation(_) => "validator",
            AutomaError::Io(_) => "io",
        }
    }

    /// Convert to a structured error report
    ///
    /// Front-ends format it as they need: the CLI prints it, upper layers
    /// can serialize it.
    pub fn to_report(&self) -> ErrorReport {
        match self {
            AutomaError::Config(e) => ErrorReport {
                phase: "parser",
                line: Some(e.line()),
                error_kind: config_error_kind(e).to_string(),
                message: e.to_string(),
            },
            AutomaError::Validation(e) => ErrorReport {
                phase: "validator",
                line: None,
                error_kind: "InvariantViolation".to_string(),
                message: e.to_string(),
            },
            AutomaError::Io(msg) => ErrorReport {
                phase: "io",
                line: None,
                error_kind: "IoError".to_string(),
                message: msg.clone(),
            },
        }
    }
}

fn config_error_kind(e: &ConfigError) -> &'static str {
    match e {
        ConfigError::MissingSection { .. } => "MissingSection",
        ConfigError::EmptySection { .. } => "EmptySection",
        ConfigError::MalformedTransition { .. } => "MalformedTransition",
    }
}

/// Structured error report
///
/// Upper layers (CLI, tooling) format this according to their own needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorReport {
    /// Phase: parser, validator, io
    pub phase: &'static str,
    /// Config line number (1-based, if any)
    pub line: Option<usize>,
    /// Error kind (for programmatic handling)
    pub error_kind: String,
    /// Human-readable message
    pub message: String,
}

impl std::fmt::Display for ErrorReport {
    /// Default CLI-friendly format
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "[line {}] {} error: {}", line, self.phase, self.message),
            None => write!(f, "[{}] error: {}", self.phase, self.message),
        }
    }
}

impl ErrorReport {
    /// Convert to JSON (for tool integration)
    ///
    /// Built by hand so the report type stays serde-free.
    pub fn to_json(&self) -> String {
        let line = self
            .line
            .map(|l| l.to_string())
            .unwrap_or_else(|| "null".to_string());

        format!(
            r#"{{"phase":"{}","line":{},"error_kind":"{}","message":"{}"}}"#,
            self.phase,
            line,
            escape_json(&self.error_kind),
            escape_json(&self.message)
        )
    }

    /// Short format (for terminals)
    pub fn to_short(&self) -> String {
        format!("{}: {}", self.phase, self.message)
    }
}

/// Minimal JSON string escaping
fn escape_json(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
