//! Interactive prompt collaborator: modal forms and confirmations.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const BUTTON_SAVE: &str = "save";
pub const BUTTON_CANCEL: &str = "cancel";
pub const BUTTON_CONFIRM: &str = "confirm";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptField {
    pub id: String,
    pub label: String,
    pub required: bool,
    pub placeholder: String,
    /// Current value, shown pre-filled when editing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptButton {
    pub id: String,
    pub label: String,
    pub primary: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRequest {
    pub title: String,
    pub message: String,
    pub fields: Vec<PromptField>,
    pub buttons: Vec<PromptButton>,
}

/// What the user did with a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptResult {
    pub button_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<HashMap<String, String>>,
}

impl PromptResult {
    pub fn button(button_id: impl Into<String>) -> Self {
        Self {
            button_id: button_id.into(),
            fields: None,
        }
    }

    pub fn with_fields(button_id: impl Into<String>, fields: HashMap<String, String>) -> Self {
        Self {
            button_id: button_id.into(),
            fields: Some(fields),
        }
    }
}

/// Modal request/response exchange with the user.
///
/// `Ok(None)` means the prompt was dismissed without pressing a button.
pub trait PromptCollaborator: Send + Sync {
    fn show(&self, request: &PromptRequest) -> Result<Option<PromptResult>, ApiError>;
    fn confirm(&self, title: &str, message: &str) -> Result<Option<PromptResult>, ApiError>;
}

/// Terminal prompts through dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompt;

impl DialoguerPrompt {
    pub fn new() -> Self {
        Self
    }
}

fn input_error(e: dialoguer::Error) -> ApiError {
    ApiError::Prompt(format!("Failed to get user input: {}", e))
}

impl PromptCollaborator for DialoguerPrompt {
    fn show(&self, request: &PromptRequest) -> Result<Option<PromptResult>, ApiError> {
        use dialoguer::{Input, Select};

        eprintln!("{}\n{}", request.title, request.message);

        let mut values = HashMap::new();
        for field in &request.fields {
            let prompt = if field.placeholder.is_empty() {
                field.label.clone()
            } else {
                format!("{} (e.g. {})", field.label, field.placeholder)
            };
            let mut input = Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(!field.required);
            if let Some(value) = &field.value {
                input = input.with_initial_text(value.clone());
            }
            let value = input.interact_text().map_err(input_error)?;
            values.insert(field.id.clone(), value);
        }

        let labels: Vec<&str> = request.buttons.iter().map(|b| b.label.as_str()).collect();
        let default = request
            .buttons
            .iter()
            .position(|b| b.primary)
            .unwrap_or(0);
        let selection = Select::new()
            .with_prompt(request.title.as_str())
            .items(&labels)
            .default(default)
            .interact_opt()
            .map_err(input_error)?;

        Ok(selection
            .and_then(|index| request.buttons.get(index))
            .map(|button| PromptResult::with_fields(button.id.clone(), values)))
    }

    fn confirm(&self, title: &str, message: &str) -> Result<Option<PromptResult>, ApiError> {
        use dialoguer::Confirm;

        eprintln!("{}", title);
        let confirmed = Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact_opt()
            .map_err(input_error)?;
        Ok(confirmed.map(|yes| {
            PromptResult::button(if yes { BUTTON_CONFIRM } else { BUTTON_CANCEL })
        }))
    }
}
