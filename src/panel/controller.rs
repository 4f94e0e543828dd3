//! Panel action dispatch.
//!
//! One action maps to one registry operation. Prompts run before the
//! operation; the panel is re-rendered and a notification shown after it.

use crate::error::ApiError;
use crate::host::{
    Notification, NotificationSink, PanelSurface, PromptButton, PromptCollaborator, PromptField,
    PromptRequest, TerminalSink, BUTTON_CANCEL, BUTTON_CONFIRM, BUTTON_SAVE,
};
use crate::panel::palette::{PaletteAction, PaletteCommand};
use crate::panel::view::PanelView;
use crate::preset::{Preset, PresetFields, DEFAULT_COLOR, DEFAULT_ICON};
use crate::registry::{PresetRegistry, SharedRegistry};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Discrete events emitted by the panel UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum PanelAction {
    Launch { preset_id: String },
    Add,
    Edit { preset_id: String },
    Delete { preset_id: String },
    Toggle,
}

/// Glue between the host collaborators and a registry owned by the caller.
pub struct PanelController {
    terminal: Arc<dyn TerminalSink>,
    notifications: Arc<dyn NotificationSink>,
    prompt: Arc<dyn PromptCollaborator>,
    surface: Arc<dyn PanelSurface>,
}

impl PanelController {
    pub fn new(
        terminal: Arc<dyn TerminalSink>,
        notifications: Arc<dyn NotificationSink>,
        prompt: Arc<dyn PromptCollaborator>,
        surface: Arc<dyn PanelSurface>,
    ) -> Self {
        Self {
            terminal,
            notifications,
            prompt,
            surface,
        }
    }

    /// Initialize the registry and render the first panel.
    pub fn activate(&self, registry: &mut PresetRegistry) -> Result<usize, ApiError> {
        registry.initialize()?;
        self.refresh(registry)?;
        tracing::info!(count = registry.len(), "Agent launcher activated");
        Ok(registry.len())
    }

    /// Push the current list to the panel surface.
    pub fn refresh(&self, registry: &PresetRegistry) -> Result<(), ApiError> {
        self.surface
            .set_content(&PanelView::from_presets(registry.presets()))
    }

    /// Handle one panel action.
    pub fn dispatch(
        &self,
        registry: &mut PresetRegistry,
        action: &PanelAction,
    ) -> Result<(), ApiError> {
        tracing::debug!(?action, "Panel action");
        match action {
            PanelAction::Launch { preset_id } => {
                registry.launch(
                    preset_id,
                    self.terminal.as_ref(),
                    self.notifications.as_ref(),
                )?;
                Ok(())
            }
            PanelAction::Add => self.add_preset(registry),
            PanelAction::Edit { preset_id } => self.edit_preset(registry, preset_id),
            PanelAction::Delete { preset_id } => self.delete_preset(registry, preset_id),
            PanelAction::Toggle => self.refresh(registry),
        }
    }

    /// [`dispatch`](Self::dispatch) with the registry lock held for the whole action.
    pub fn dispatch_shared(
        &self,
        registry: &SharedRegistry,
        action: &PanelAction,
    ) -> Result<(), ApiError> {
        let mut registry = registry.lock();
        self.dispatch(&mut registry, action)
    }

    /// Run a palette command.
    pub fn run_palette(
        &self,
        registry: &PresetRegistry,
        command: &PaletteCommand,
    ) -> Result<(), ApiError> {
        match &command.action {
            PaletteAction::TogglePanel => self.refresh(registry),
            PaletteAction::QuickLaunch { command, label } => {
                self.terminal.write(&format!("{}\n", command))?;
                self.notifications
                    .show(Notification::info(format!("Launched: {}", label)));
                Ok(())
            }
        }
    }

    fn add_preset(&self, registry: &mut PresetRegistry) -> Result<(), ApiError> {
        let Some(fields) = self.ask_fields(None)? else {
            return Ok(());
        };
        let result = registry.add(fields);
        self.saved(registry, result, "Preset added")
    }

    fn edit_preset(&self, registry: &mut PresetRegistry, preset_id: &str) -> Result<(), ApiError> {
        let Some(existing) = registry.get(preset_id).cloned() else {
            return Ok(());
        };
        let Some(fields) = self.ask_fields(Some(&existing))? else {
            return Ok(());
        };
        let result = registry.edit(preset_id, fields).map(|_| ());
        self.saved(registry, result, "Preset updated")
    }

    fn delete_preset(&self, registry: &mut PresetRegistry, preset_id: &str) -> Result<(), ApiError> {
        let Some(existing) = registry.get(preset_id) else {
            return Ok(());
        };
        let message = format!("Delete \"{}\"? This cannot be undone.", existing.name);
        let confirmed = self
            .prompt
            .confirm("Delete Preset", &message)?
            .map(|r| r.button_id == BUTTON_CONFIRM)
            .unwrap_or(false);
        if !confirmed {
            return Ok(());
        }
        let result = registry.delete(preset_id).map(|_| ());
        self.saved(registry, result, "Preset deleted")
    }

    fn ask_fields(&self, existing: Option<&Preset>) -> Result<Option<PresetFields>, ApiError> {
        let request = preset_prompt(existing);
        let Some(result) = self.prompt.show(&request)? else {
            return Ok(None);
        };
        if result.button_id != BUTTON_SAVE {
            return Ok(None);
        }
        Ok(result.fields.as_ref().map(PresetFields::from_prompt_map))
    }

    fn saved(
        &self,
        registry: &PresetRegistry,
        result: Result<(), ApiError>,
        message: &str,
    ) -> Result<(), ApiError> {
        if let Err(e) = result {
            self.notifications
                .show(Notification::error(format!("Failed to save presets: {}", e)));
            return Err(e);
        }
        self.refresh(registry)?;
        self.notifications.show(Notification::success(message));
        Ok(())
    }
}

fn field(id: &str, label: &str, placeholder: &str, value: Option<&str>) -> PromptField {
    PromptField {
        id: id.to_string(),
        label: label.to_string(),
        required: true,
        placeholder: placeholder.to_string(),
        value: value.map(str::to_string),
    }
}

/// Add/edit form. Edit pre-fills the current values.
pub fn preset_prompt(existing: Option<&Preset>) -> PromptRequest {
    let (title, message, save_label) = match existing {
        Some(_) => ("Edit Preset", "Modify preset configuration:", "Save"),
        None => ("Add New Preset", "Create a new AI agent preset:", "Add"),
    };
    PromptRequest {
        title: title.to_string(),
        message: message.to_string(),
        fields: vec![
            field(
                PresetFields::NAME,
                "Name",
                "My Agent Preset",
                existing.map(|p| p.name.as_str()),
            ),
            field(
                PresetFields::DESCRIPTION,
                "Description",
                "What this preset does",
                existing.map(|p| p.description.as_str()),
            ),
            field(
                PresetFields::COMMAND,
                "Command",
                "claude --permission-mode plan",
                existing.map(|p| p.command.as_str()),
            ),
            field(
                PresetFields::ICON,
                "Icon (emoji)",
                DEFAULT_ICON,
                existing.map(|p| p.icon.as_str()),
            ),
            field(
                PresetFields::COLOR,
                "Color (hex)",
                DEFAULT_COLOR,
                existing.map(|p| p.color.as_str()),
            ),
        ],
        buttons: vec![
            PromptButton {
                id: BUTTON_CANCEL.to_string(),
                label: "Cancel".to_string(),
                primary: false,
            },
            PromptButton {
                id: BUTTON_SAVE.to_string(),
                label: save_label.to_string(),
                primary: true,
            },
        ],
    }
}
