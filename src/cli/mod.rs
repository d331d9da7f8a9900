//! Command line interface for pickline.

pub mod args;
pub mod commands;
pub mod log_gate;
pub mod output;

// Re-export commonly used types
pub use args::*;
pub use commands::*;
pub use log_gate::*;
pub use output::*;
