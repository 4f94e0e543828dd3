//! Agent Launcher: preset-driven launching of AI coding agents
//!
//! Keeps an ordered list of command presets in a key-value store, exposes
//! add/edit/delete/launch over it, and drives a panel UI through host ports.

pub mod config;
pub mod error;
pub mod host;
pub mod logging;
pub mod panel;
pub mod preset;
pub mod registry;
pub mod storage;
pub mod tooling;

pub use error::{ApiError, StorageError};
pub use preset::{default_presets, Preset, PresetFields};
pub use registry::{LaunchOutcome, PresetRegistry, SharedRegistry};
pub use storage::{KeyValueStore, MemoryStore, SledStore};
