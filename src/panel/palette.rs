//! Command-palette entries registered alongside the panel.
//!
//! Quick-launch entries carry their own fixed command text; they do not read
//! the registry, so they keep working after the matching preset is edited or
//! deleted.

use serde::{Deserialize, Serialize};

pub const PALETTE_CATEGORY: &str = "AI";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaletteAction {
    /// Show or hide the launcher panel.
    TogglePanel,
    /// Write `command` plus a newline to the terminal.
    QuickLaunch { command: String, label: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteCommand {
    pub id: String,
    pub title: String,
    pub category: String,
    pub action: PaletteAction,
}

fn entry(id: &str, title: &str, action: PaletteAction) -> PaletteCommand {
    PaletteCommand {
        id: id.to_string(),
        title: title.to_string(),
        category: PALETTE_CATEGORY.to_string(),
        action,
    }
}

fn quick(command: &str, label: &str) -> PaletteAction {
    PaletteAction::QuickLaunch {
        command: command.to_string(),
        label: label.to_string(),
    }
}

/// All palette commands, in registration order.
pub fn palette_commands() -> Vec<PaletteCommand> {
    vec![
        entry(
            "ai-agent-launcher.open-panel",
            "Open AI Agent Launcher",
            PaletteAction::TogglePanel,
        ),
        entry(
            "ai-agent-launcher.launch-claude-plan",
            "Launch Claude Code (Plan Mode)",
            quick("claude --permission-mode plan", "Claude Code (Plan Mode)"),
        ),
        entry(
            "ai-agent-launcher.launch-claude-edit",
            "Launch Claude Code (Accept Edits)",
            quick("claude --permission-mode acceptEdits", "Claude Code (Accept Edits)"),
        ),
        entry(
            "ai-agent-launcher.launch-claude-full",
            "Launch Claude Code (Full Access)",
            quick("claude --dangerously-skip-permissions", "Claude Code (Full Access)"),
        ),
        entry(
            "ai-agent-launcher.manage-presets",
            "Manage AI Agent Presets",
            PaletteAction::TogglePanel,
        ),
    ]
}

/// Look up a palette command by id.
pub fn find_palette_command(id: &str) -> Option<PaletteCommand> {
    palette_commands().into_iter().find(|c| c.id == id)
}
