//! Configuration text format
//!
//! Reader and writer for the five-section DFA config format, plus the
//! section layout and structured parse errors.

pub mod error;
pub mod reader;
pub mod section;
pub mod writer;

pub use error::ConfigError;
pub use reader::parse;
pub use section::{Section, HEADER_LINES};
pub use writer::write;
