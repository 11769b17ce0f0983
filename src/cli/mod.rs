//! Command Line Interface for the Rinku graph engine.

pub mod args;
pub mod commands;

// Re-export commonly used types
pub use args::*;
pub use commands::*;
