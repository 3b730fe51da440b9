//! Platform-specific front-end helpers

mod cli;

pub use cli::{print_error_with_source, print_source_context};
