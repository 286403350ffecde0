//! CLI argument parsing and command dispatch

pub mod args;
pub mod exit_codes;
pub mod registry;

// Re-export types for convenient access
pub use args::{ColorMode, GlobalArgs};
pub use registry::{Action, Registry};
