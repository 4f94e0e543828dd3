//! Tooling & Integration Layer
//!
//! Command-line host for the launcher. Wires the console adapters in
//! [`crate::host`] to the registry and panel controller.

pub mod cli;

pub use cli::{Cli, CliAdapters, CliContext, Commands};
