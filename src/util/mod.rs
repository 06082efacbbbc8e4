//! Utility modules for dockergen

pub mod logging;

pub use logging::{init_logging, parse_level, LoggingConfig};
