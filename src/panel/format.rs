//! Text and JSON renderings of the panel for terminal hosts.

use crate::error::{ApiError, StorageError};
use crate::panel::view::PanelView;
use crate::preset::Preset;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Panel as a heading plus a table of cards.
pub fn format_panel_text(view: &PanelView, color: bool) -> String {
    let mut out = String::new();
    if color {
        out.push_str(&format!("{}\n", view.title.bold().underline()));
        out.push_str(&format!("{}\n\n", view.subtitle.dimmed()));
    } else {
        out.push_str(&format!("{}\n{}\n\n", view.title, view.subtitle));
    }

    if view.cards.is_empty() {
        out.push_str("No presets.\n");
        return out;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["", "ID", "Name", "Command"]);
    for card in &view.cards {
        table.add_row(vec![
            card.icon.clone(),
            card.preset_id.clone(),
            card.name.clone(),
            card.command.clone(),
        ]);
    }
    out.push_str(&format!("{}\n", table));
    out.push_str(&format!("\nTotal: {} preset(s)", view.cards.len()));
    out
}

pub fn format_panel_json(view: &PanelView) -> Result<String, ApiError> {
    serde_json::to_string_pretty(view)
        .map_err(|e| ApiError::StorageError(StorageError::Serialization(e.to_string())))
}

/// Every field of one preset, one per line.
pub fn format_preset_text(preset: &Preset) -> String {
    let mut out = format!("Preset: {} {}\n", preset.icon, preset.name);
    out.push_str(&format!("ID: {}\n", preset.id));
    if !preset.description.is_empty() {
        out.push_str(&format!("Description: {}\n", preset.description));
    }
    out.push_str(&format!("Command: {}\n", preset.command));
    out.push_str(&format!("Color: {}\n", preset.color));
    out.push_str(&format!("Agent: {}", preset.agent));
    out
}
