//! CLI support for the `lh` binary.

pub mod args;
pub mod commands;
pub mod context;

pub use context::CommandContext;
