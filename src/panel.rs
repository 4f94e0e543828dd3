//! Launcher panel: view-model, action dispatch, and palette commands.
//!
//! The host renders [`PanelView`] however it likes and sends back
//! [`PanelAction`]s; [`PanelController`] maps each action onto one registry
//! operation, running the prompt and notification steps around it.

pub mod controller;
pub mod format;
pub mod palette;
pub mod view;

pub use controller::{preset_prompt, PanelAction, PanelController};
pub use format::{format_panel_json, format_panel_text, format_preset_text};
pub use palette::{find_palette_command, palette_commands, PaletteAction, PaletteCommand};
pub use view::{CardAction, PanelView, PresetCard, PANEL_ID};
