//! CLI Tooling
//!
//! Terminal host for the preset registry. Parses arguments, owns the registry
//! for the lifetime of one invocation, and routes every mutation through the
//! panel controller so prompts, notifications and persistence behave exactly
//! as they would inside a graphical host.

use crate::config::{ConfigLoader, LauncherConfig, StorageBackend, TerminalMode};
use crate::error::ApiError;
use crate::host::{
    CapturedPanel, ConsoleNotifier, DialoguerPrompt, NotificationSink, PanelSurface,
    PromptCollaborator,
    PromptRequest, PromptResult, ShellTerminal, TerminalSink, WriterTerminal, BUTTON_CONFIRM,
    BUTTON_SAVE,
};
use crate::logging::LoggingConfig;
use crate::panel::{
    find_palette_command, format_panel_json, format_panel_text, format_preset_text,
    palette_commands, PaletteAction, PanelAction, PanelController, PanelView,
};
use crate::preset::{Preset, PresetFields};
use crate::registry::{PresetRegistry, SharedRegistry};
use crate::storage::{KeyValueStore, MemoryStore, SledStore};
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Agent Launcher CLI - launch AI coding agents from saved presets
#[derive(Parser)]
#[command(name = "agent-launcher")]
#[command(about = "Launch AI coding agents with preset configurations")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply logging flags on top of the configured logging section.
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if self.verbose {
            config.level = "debug".to_string();
        }
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.file = Some(file.clone());
        }
        config
    }
}

/// Preset fields given as flags. Any flag switches add/edit to non-interactive mode.
#[derive(Args, Debug, Clone, Default)]
pub struct PresetArgs {
    /// Display name
    #[arg(long)]
    pub name: Option<String>,
    /// Short description
    #[arg(long)]
    pub description: Option<String>,
    /// Command text sent to the terminal
    #[arg(long)]
    pub command: Option<String>,
    /// Icon (emoji)
    #[arg(long)]
    pub icon: Option<String>,
    /// Accent color (hex)
    #[arg(long)]
    pub color: Option<String>,
}

impl PresetArgs {
    fn is_empty(&self) -> bool {
        self.to_fields().is_empty()
    }

    fn to_fields(&self) -> PresetFields {
        PresetFields {
            name: self.name.clone(),
            description: self.description.clone(),
            command: self.command.clone(),
            icon: self.icon.clone(),
            color: self.color.clone(),
        }
    }

    /// Flags overlaid on `base`; fields without a flag keep their base value.
    fn overlay(&self, base: PresetFields) -> PresetFields {
        let flags = self.to_fields();
        PresetFields {
            name: flags.name.or(base.name),
            description: flags.description.or(base.description),
            command: flags.command.or(base.command),
            icon: flags.icon.or(base.icon),
            color: flags.color.or(base.color),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all presets
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show one preset
    Show {
        /// Preset ID
        preset_id: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Add a preset (interactive unless field flags are given)
    Add {
        #[command(flatten)]
        fields: PresetArgs,
        /// Prompt for every field even when flags are given
        #[arg(long)]
        interactive: bool,
    },
    /// Edit a preset (interactive unless field flags are given)
    Edit {
        /// Preset ID
        preset_id: String,
        #[command(flatten)]
        fields: PresetArgs,
        /// Prompt for every field even when flags are given
        #[arg(long)]
        interactive: bool,
    },
    /// Remove a preset
    Remove {
        /// Preset ID
        preset_id: String,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
    /// Send a preset's command to the terminal
    Launch {
        /// Preset ID
        preset_id: String,
        /// Print the command text instead of running it
        #[arg(long)]
        print: bool,
    },
    /// Command palette entries
    Palette {
        #[command(subcommand)]
        command: PaletteCommands,
    },
    /// Configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum PaletteCommands {
    /// List palette commands
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Run a palette command by id
    Run {
        /// Palette command ID (e.g. ai-agent-launcher.launch-claude-plan)
        command_id: String,
        /// Print the command text instead of running it
        #[arg(long)]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the resolved configuration as TOML
    Show,
}

/// Collaborators the CLI context runs against.
pub struct CliAdapters {
    pub store: Arc<dyn KeyValueStore>,
    /// Overrides the terminal chosen from config and `--print`
    pub terminal: Option<Arc<dyn TerminalSink>>,
    pub notifications: Arc<dyn NotificationSink>,
    pub prompt: Arc<dyn PromptCollaborator>,
}

/// Answers prompts from command-line flags instead of asking the user.
struct FlagPrompt {
    fields: HashMap<String, String>,
}

impl FlagPrompt {
    fn save(fields: PresetFields) -> Self {
        let mut map = HashMap::new();
        let entries = [
            (PresetFields::NAME, fields.name),
            (PresetFields::DESCRIPTION, fields.description),
            (PresetFields::COMMAND, fields.command),
            (PresetFields::ICON, fields.icon),
            (PresetFields::COLOR, fields.color),
        ];
        for (key, value) in entries {
            if let Some(value) = value {
                map.insert(key.to_string(), value);
            }
        }
        Self { fields: map }
    }

    fn confirm_only() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }
}

impl PromptCollaborator for FlagPrompt {
    fn show(&self, _request: &PromptRequest) -> Result<Option<PromptResult>, ApiError> {
        Ok(Some(PromptResult::with_fields(BUTTON_SAVE, self.fields.clone())))
    }

    fn confirm(&self, _title: &str, _message: &str) -> Result<Option<PromptResult>, ApiError> {
        Ok(Some(PromptResult::button(BUTTON_CONFIRM)))
    }
}

/// CLI context: one registry plus the host adapters around it
pub struct CliContext {
    config: LauncherConfig,
    registry: SharedRegistry,
    adapters: CliAdapters,
    panel: Arc<CapturedPanel>,
}

impl CliContext {
    /// Load config, open the configured store and initialize the registry.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = if let Some(cfg_path) = &config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load()?
        };
        Self::from_config(config)
    }

    /// Console adapters over the store named in `config`.
    pub fn from_config(config: LauncherConfig) -> Result<Self, ApiError> {
        let store: Arc<dyn KeyValueStore> = match config.storage.backend {
            StorageBackend::Sled => Arc::new(SledStore::open(&config.storage.resolve_path()?)?),
            StorageBackend::Memory => Arc::new(MemoryStore::new()),
        };
        let adapters = CliAdapters {
            store,
            terminal: None,
            notifications: Arc::new(ConsoleNotifier::new(config.logging.color)),
            prompt: Arc::new(DialoguerPrompt::new()),
        };
        Self::with_adapters(config, adapters)
    }

    pub fn with_adapters(config: LauncherConfig, adapters: CliAdapters) -> Result<Self, ApiError> {
        let registry =
            PresetRegistry::with_key(Arc::clone(&adapters.store), config.storage.key.clone());
        let context = Self {
            config,
            registry: registry.into_shared(),
            adapters,
            panel: Arc::new(CapturedPanel::new()),
        };
        {
            let mut registry = context.registry.lock();
            let count = context
                .controller(Arc::clone(&context.adapters.prompt), false)
                .activate(&mut registry)?;
            info!(count, "Registry ready");
        }
        Ok(context)
    }

    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    /// Execute a CLI command
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::List { format } => self.handle_list(format),
            Commands::Show { preset_id, format } => self.handle_show(preset_id, format),
            Commands::Add {
                fields,
                interactive,
            } => self.handle_add(fields, *interactive),
            Commands::Edit {
                preset_id,
                fields,
                interactive,
            } => self.handle_edit(preset_id, fields, *interactive),
            Commands::Remove { preset_id, force } => self.handle_remove(preset_id, *force),
            Commands::Launch { preset_id, print } => self.handle_launch(preset_id, *print),
            Commands::Palette { command } => self.handle_palette(command),
            Commands::Config { command } => match command {
                ConfigCommands::Show => self.config.to_toml(),
            },
        }
    }

    fn terminal(&self, print: bool) -> Arc<dyn TerminalSink> {
        if let Some(terminal) = &self.adapters.terminal {
            return Arc::clone(terminal);
        }
        if print || self.config.terminal.mode == TerminalMode::Print {
            Arc::new(WriterTerminal::stdout())
        } else {
            Arc::new(ShellTerminal::new(self.config.terminal.resolve_shell()))
        }
    }

    fn controller(&self, prompt: Arc<dyn PromptCollaborator>, print: bool) -> PanelController {
        PanelController::new(
            self.terminal(print),
            Arc::clone(&self.adapters.notifications),
            prompt,
            Arc::clone(&self.panel) as Arc<dyn PanelSurface>,
        )
    }

    fn color(&self) -> bool {
        self.config.logging.color && std::env::var_os("NO_COLOR").is_none()
    }

    fn existing(&self, preset_id: &str) -> Result<Preset, ApiError> {
        self.registry
            .lock()
            .get(preset_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(preset_id.to_string()))
    }

    fn handle_list(&self, format: &str) -> Result<String, ApiError> {
        let view = PanelView::from_presets(self.registry.lock().presets());
        match format {
            "json" => format_panel_json(&view),
            _ => Ok(format_panel_text(&view, self.color())),
        }
    }

    fn handle_show(&self, preset_id: &str, format: &str) -> Result<String, ApiError> {
        let preset = self.existing(preset_id)?;
        match format {
            "json" => Ok(serde_json::to_string_pretty(&preset).unwrap_or_else(|_| "{}".to_string())),
            _ => Ok(format_preset_text(&preset)),
        }
    }

    fn handle_add(&self, args: &PresetArgs, interactive: bool) -> Result<String, ApiError> {
        let prompt: Arc<dyn PromptCollaborator> = if interactive || args.is_empty() {
            Arc::clone(&self.adapters.prompt)
        } else {
            Arc::new(FlagPrompt::save(args.to_fields()))
        };

        let mut registry = self.registry.lock();
        let before = registry.len();
        self.controller(prompt, false)
            .dispatch(&mut registry, &PanelAction::Add)?;

        if registry.len() == before {
            return Ok("Add cancelled".to_string());
        }
        let added = &registry.presets()[registry.len() - 1];
        Ok(format!("Preset added: {} ({})", added.id, added.name))
    }

    fn handle_edit(
        &self,
        preset_id: &str,
        args: &PresetArgs,
        interactive: bool,
    ) -> Result<String, ApiError> {
        let existing = self.existing(preset_id)?;
        let prompt: Arc<dyn PromptCollaborator> = if interactive || args.is_empty() {
            Arc::clone(&self.adapters.prompt)
        } else {
            Arc::new(FlagPrompt::save(args.overlay(existing.to_fields())))
        };

        let mut registry = self.registry.lock();
        self.controller(prompt, false).dispatch(
            &mut registry,
            &PanelAction::Edit {
                preset_id: preset_id.to_string(),
            },
        )?;

        match registry.get(preset_id) {
            Some(updated) if *updated != existing => Ok(format!("Preset updated: {}", preset_id)),
            _ => Ok(format!("Preset unchanged: {}", preset_id)),
        }
    }

    fn handle_remove(&self, preset_id: &str, force: bool) -> Result<String, ApiError> {
        self.existing(preset_id)?;
        let prompt: Arc<dyn PromptCollaborator> = if force {
            Arc::new(FlagPrompt::confirm_only())
        } else {
            Arc::clone(&self.adapters.prompt)
        };

        let mut registry = self.registry.lock();
        self.controller(prompt, false).dispatch(
            &mut registry,
            &PanelAction::Delete {
                preset_id: preset_id.to_string(),
            },
        )?;

        if registry.get(preset_id).is_some() {
            Ok("Removal cancelled".to_string())
        } else {
            Ok(format!("Removed preset: {}", preset_id))
        }
    }

    /// An unknown id is reported through the notification sink only.
    fn handle_launch(&self, preset_id: &str, print: bool) -> Result<String, ApiError> {
        let mut registry = self.registry.lock();
        self.controller(Arc::clone(&self.adapters.prompt), print)
            .dispatch(
                &mut registry,
                &PanelAction::Launch {
                    preset_id: preset_id.to_string(),
                },
            )?;
        Ok(String::new())
    }

    fn handle_palette(&self, command: &PaletteCommands) -> Result<String, ApiError> {
        match command {
            PaletteCommands::List { format } => Ok(format_palette(format)),
            PaletteCommands::Run { command_id, print } => {
                let entry = find_palette_command(command_id)
                    .ok_or_else(|| ApiError::NotFound(command_id.clone()))?;
                let registry = self.registry.lock();
                self.controller(Arc::clone(&self.adapters.prompt), *print)
                    .run_palette(&registry, &entry)?;
                Ok(match (&entry.action, self.panel.last_view()) {
                    (PaletteAction::TogglePanel, Some(view)) => {
                        format_panel_text(&view, self.color())
                    }
                    _ => String::new(),
                })
            }
        }
    }
}

fn format_palette(format: &str) -> String {
    let commands = palette_commands();
    if format == "json" {
        let out = json!({ "commands": commands, "total": commands.len() });
        return serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string());
    }
    let mut output = String::from("Palette Commands:\n");
    for command in &commands {
        output.push_str(&format!(
            "  {:<40} {:<4} {}\n",
            command.id, command.category, command.title
        ));
    }
    output.push_str(&format!("\nTotal: {} command(s)", commands.len()));
    output
}
