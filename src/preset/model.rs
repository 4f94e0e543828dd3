//! Preset record and the add/edit field set.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Agent tag stamped on every preset created or edited by the user.
pub const CUSTOM_AGENT: &str = "custom";
/// Name used when the user leaves the field blank.
pub const DEFAULT_NAME: &str = "Unnamed";
/// Icon used when the user leaves the field blank.
pub const DEFAULT_ICON: &str = "\u{1F916}";
/// Accent color used when the user leaves the field blank.
pub const DEFAULT_COLOR: &str = "#a78bfa";

/// One launchable command with its display identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub agent: String,
    pub icon: String,
    /// Literal terminal text; never parsed.
    pub command: String,
    #[serde(default)]
    pub color: String,
}

impl Preset {
    /// Build a user preset from raw fields, applying the blank-field defaults.
    pub fn from_fields(id: String, fields: PresetFields) -> Self {
        Self {
            id,
            name: non_blank_or(fields.name, DEFAULT_NAME),
            description: fields.description.unwrap_or_default(),
            agent: CUSTOM_AGENT.to_string(),
            icon: non_blank_or(fields.icon, DEFAULT_ICON),
            command: fields.command.unwrap_or_default(),
            color: non_blank_or(fields.color, DEFAULT_COLOR),
        }
    }

    /// True for presets created or edited by the user.
    pub fn is_custom(&self) -> bool {
        self.agent == CUSTOM_AGENT
    }

    /// Current values as a field set, used to prefill the edit prompt.
    pub fn to_fields(&self) -> PresetFields {
        PresetFields {
            name: Some(self.name.clone()),
            description: Some(self.description.clone()),
            command: Some(self.command.clone()),
            icon: Some(self.icon.clone()),
            color: Some(self.color.clone()),
        }
    }
}

fn non_blank_or(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => default.to_string(),
    }
}

/// Add/edit input. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl PresetFields {
    pub const NAME: &'static str = "name";
    pub const DESCRIPTION: &'static str = "description";
    pub const COMMAND: &'static str = "command";
    pub const ICON: &'static str = "icon";
    pub const COLOR: &'static str = "color";

    /// Field set with just a name and command.
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            command: Some(command.into()),
            ..Self::default()
        }
    }

    /// Read fields out of a prompt result keyed by field id.
    pub fn from_prompt_map(map: &HashMap<String, String>) -> Self {
        Self {
            name: map.get(Self::NAME).cloned(),
            description: map.get(Self::DESCRIPTION).cloned(),
            command: map.get(Self::COMMAND).cloned(),
            icon: map.get(Self::ICON).cloned(),
            color: map.get(Self::COLOR).cloned(),
        }
    }

    /// True when no field was supplied at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.command.is_none()
            && self.icon.is_none()
            && self.color.is_none()
    }
}
