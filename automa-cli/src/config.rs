//! CLI configuration
//!
//! CLI-specific log configuration: a global level with optional per-phase
//! overrides.

use tracing::Level;

/// CLI log configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: Level,
    pub parser: Option<Level>,
    pub validator: Option<Level>,
    pub engine: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::ERROR,
            parser: None,
            validator: None,
            engine: None,
        }
    }
}

impl LogConfig {
    /// Get log level for a specific target
    pub fn level_for(&self, target: &str) -> Level {
        match target {
            "automa::parser" => self.parser.unwrap_or(self.global),
            "automa::validator" => self.validator.unwrap_or(self.global),
            "automa::engine" => self.engine.unwrap_or(self.global),
            _ => self.global,
        }
    }
}

/// Parse a log level string
pub fn parse_log_level(s: &str) -> Option<Level> {
    match s.to_lowercase().as_str() {
        "silent" => Some(Level::ERROR), // silent = only errors
        "error" => Some(Level::ERROR),
        "warn" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}
