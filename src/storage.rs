//! Key-value store port and adapters.

pub mod contract;
pub mod memory;
pub mod persistence;

pub use contract::{KeyValueStore, PRESETS_KEY};
pub use memory::MemoryStore;
pub use persistence::SledStore;
