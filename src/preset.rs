//! Preset records: the launchable command entries owned by the registry.

pub mod defaults;
pub mod id;
pub mod model;

pub use defaults::{default_presets, DEFAULT_AGENT_TAG};
pub use id::PresetIdGenerator;
pub use model::{Preset, PresetFields, CUSTOM_AGENT, DEFAULT_COLOR, DEFAULT_ICON, DEFAULT_NAME};
