//! View-model the host renders as preset cards.

use crate::preset::Preset;
use serde::{Deserialize, Serialize};

pub const PANEL_ID: &str = "launcher-panel";
pub const PANEL_TITLE: &str = "AI Agent Launcher";
pub const PANEL_SUBTITLE: &str = "Launch AI coding agents with preset configurations";
pub const ADD_LABEL: &str = "+ Add New Preset";

/// Buttons on each card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardAction {
    Launch,
    Edit,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetCard {
    pub preset_id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub command: String,
    pub actions: Vec<CardAction>,
}

impl From<&Preset> for PresetCard {
    fn from(preset: &Preset) -> Self {
        Self {
            preset_id: preset.id.clone(),
            name: preset.name.clone(),
            description: preset.description.clone(),
            icon: preset.icon.clone(),
            color: preset.color.clone(),
            command: preset.command.clone(),
            actions: vec![CardAction::Launch, CardAction::Edit, CardAction::Delete],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelView {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub cards: Vec<PresetCard>,
    pub add_label: String,
}

impl PanelView {
    /// One card per preset, in list order.
    pub fn from_presets(presets: &[Preset]) -> Self {
        Self {
            id: PANEL_ID.to_string(),
            title: PANEL_TITLE.to_string(),
            subtitle: PANEL_SUBTITLE.to_string(),
            cards: presets.iter().map(PresetCard::from).collect(),
            add_label: ADD_LABEL.to_string(),
        }
    }
}
