//! API layer configuration
//!
//! Contains the execution configuration `RunConfig` and a global singleton
//! (for CLI use).

use automa_config::{EngineConfig, ParserConfig};
use once_cell::sync::OnceCell;

/// Execution configuration
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Whether to dump the loaded machine back in config format
    pub dump_machine: bool,
    /// Parser configuration
    pub parser: ParserConfig,
    /// Engine configuration
    pub engine: EngineConfig,
}

// Global config singleton for CLI convenience
static GLOBAL_CONFIG: OnceCell<RunConfig> = OnceCell::new();

/// Initialize global configuration (must be called once before any operation)
///
/// # Panics
/// If config is already initialized
pub fn init(config: RunConfig) {
    GLOBAL_CONFIG
        .set(config)
        .expect("Config already initialized");
}

/// Get global config reference
///
/// # Panics
/// If config is not initialized
pub fn config() -> &'static RunConfig {
    GLOBAL_CONFIG.get().expect("Config not initialized")
}

/// Check if config is initialized
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}
