use agent_launcher::config::{LauncherConfig, StorageBackend, TerminalMode};
use agent_launcher::host::{Notification, NotificationKind};
use agent_launcher::logging::LoggingConfig;
use agent_launcher::tooling::cli::{
    Cli, CliAdapters, CliContext, Commands, ConfigCommands, PaletteCommands, PresetArgs,
};
use clap::Parser;
use std::sync::Arc;

use crate::support::{FlakyStore, RecordingHost, ScriptedPrompt};

fn memory_config() -> LauncherConfig {
    let mut config = LauncherConfig::default();
    config.storage.backend = StorageBackend::Memory;
    config.terminal.mode = TerminalMode::Print;
    config.logging.color = false;
    config
}

fn context(prompt: ScriptedPrompt) -> (CliContext, Arc<RecordingHost>) {
    let host = Arc::new(RecordingHost::default());
    let adapters = CliAdapters {
        store: Arc::new(FlakyStore::new()),
        terminal: Some(host.clone()),
        notifications: host.clone(),
        prompt: Arc::new(prompt),
    };
    let context = CliContext::with_adapters(memory_config(), adapters).unwrap();
    (context, host)
}

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["agent-launcher", "list"],
        vec!["agent-launcher", "list", "--format", "json"],
        vec!["agent-launcher", "show", "claude-plan"],
        vec!["agent-launcher", "add"],
        vec!["agent-launcher", "add", "--name", "X", "--command", "foo"],
        vec!["agent-launcher", "edit", "claude-plan", "--color", "#fff"],
        vec!["agent-launcher", "remove", "claude-plan", "--force"],
        vec!["agent-launcher", "launch", "claude-plan", "--print"],
        vec!["agent-launcher", "palette", "list"],
        vec!["agent-launcher", "palette", "run", "ai-agent-launcher.open-panel"],
        vec!["agent-launcher", "config", "show"],
        vec!["agent-launcher", "--verbose", "--log-output", "stderr", "list"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_missing_ids() {
    assert!(Cli::try_parse_from(["agent-launcher", "launch"]).is_err());
    assert!(Cli::try_parse_from(["agent-launcher", "remove"]).is_err());
    assert!(Cli::try_parse_from(["agent-launcher", "palette"]).is_err());
}

#[test]
fn logging_flags_override_config() {
    let cli = Cli::try_parse_from([
        "agent-launcher",
        "--verbose",
        "--log-format",
        "json",
        "--log-file",
        "/tmp/launcher.log",
        "list",
    ])
    .unwrap();
    let logging = cli.logging_config(&LoggingConfig::default());
    assert_eq!(logging.level, "debug");
    assert_eq!(logging.format, "json");
    assert_eq!(logging.output, "file");
    assert_eq!(
        logging.file.as_deref(),
        Some(std::path::Path::new("/tmp/launcher.log"))
    );
}

#[test]
fn list_shows_seeded_presets() {
    let (context, _) = context(ScriptedPrompt::new());
    let output = context
        .execute(&Commands::List {
            format: "text".to_string(),
        })
        .unwrap();
    assert!(output.contains("Claude Code - Plan Mode"));
    assert!(output.contains("Total: 6 preset(s)"));

    let json = context
        .execute(&Commands::List {
            format: "json".to_string(),
        })
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["cards"].as_array().unwrap().len(), 6);
}

#[test]
fn add_from_flags_skips_prompt() {
    let prompt = ScriptedPrompt::new();
    let (context, host) = context(prompt);
    let output = context
        .execute(&Commands::Add {
            fields: PresetArgs {
                name: Some("Reviewer".to_string()),
                command: Some("claude -p review".to_string()),
                ..PresetArgs::default()
            },
            interactive: false,
        })
        .unwrap();
    assert!(output.starts_with("Preset added: custom-"));
    assert!(output.ends_with("(Reviewer)"));
    assert_eq!(context.registry().lock().len(), 7);
    assert_eq!(host.last_note(), Some(Notification::success("Preset added")));
}

#[test]
fn add_without_flags_uses_prompt() {
    let (context, _) = context(ScriptedPrompt::new().cancel());
    let output = context
        .execute(&Commands::Add {
            fields: PresetArgs::default(),
            interactive: false,
        })
        .unwrap();
    assert_eq!(output, "Add cancelled");
    assert_eq!(context.registry().lock().len(), 6);
}

#[test]
fn edit_from_flags_keeps_other_fields() {
    let (context, _) = context(ScriptedPrompt::new());
    let output = context
        .execute(&Commands::Edit {
            preset_id: "claude-full".to_string(),
            fields: PresetArgs {
                command: Some("claude --yolo".to_string()),
                ..PresetArgs::default()
            },
            interactive: false,
        })
        .unwrap();
    assert_eq!(output, "Preset updated: claude-full");

    let registry = context.registry().lock();
    let edited = registry.get("claude-full").unwrap();
    assert_eq!(edited.command, "claude --yolo");
    assert_eq!(edited.name, "Claude Code - Full Access");
    assert_eq!(edited.color, "#f97316");
    assert_eq!(edited.agent, "custom");
}

#[test]
fn edit_and_remove_unknown_id_fail() {
    let (context, _) = context(ScriptedPrompt::new());
    assert!(context
        .execute(&Commands::Edit {
            preset_id: "ghost".to_string(),
            fields: PresetArgs::default(),
            interactive: false,
        })
        .is_err());
    assert!(context
        .execute(&Commands::Remove {
            preset_id: "ghost".to_string(),
            force: true,
        })
        .is_err());
}

#[test]
fn remove_honours_confirmation() {
    let (context, _) = context(ScriptedPrompt::new().confirm_no());
    let output = context
        .execute(&Commands::Remove {
            preset_id: "claude-plan".to_string(),
            force: false,
        })
        .unwrap();
    assert_eq!(output, "Removal cancelled");

    let output = context
        .execute(&Commands::Remove {
            preset_id: "claude-plan".to_string(),
            force: true,
        })
        .unwrap();
    assert_eq!(output, "Removed preset: claude-plan");
    assert!(context.registry().lock().get("claude-plan").is_none());
}

#[test]
fn launch_writes_to_terminal() {
    let (context, host) = context(ScriptedPrompt::new());
    let output = context
        .execute(&Commands::Launch {
            preset_id: "claude-opus".to_string(),
            print: true,
        })
        .unwrap();
    assert!(output.is_empty());
    assert_eq!(
        *host.writes.lock(),
        vec!["claude --model claude-opus-4-6\n".to_string()]
    );
}

#[test]
fn launch_unknown_id_only_notifies() {
    let (context, host) = context(ScriptedPrompt::new());
    context
        .execute(&Commands::Launch {
            preset_id: "ghost".to_string(),
            print: true,
        })
        .unwrap();
    assert!(host.writes.lock().is_empty());
    assert_eq!(host.last_note().unwrap().kind, NotificationKind::Error);
}

#[test]
fn palette_run_and_list() {
    let (context, host) = context(ScriptedPrompt::new());
    let output = context
        .execute(&Commands::Palette {
            command: PaletteCommands::Run {
                command_id: "ai-agent-launcher.launch-claude-full".to_string(),
                print: true,
            },
        })
        .unwrap();
    assert!(output.is_empty());
    assert_eq!(
        *host.writes.lock(),
        vec!["claude --dangerously-skip-permissions\n".to_string()]
    );

    let panel = context
        .execute(&Commands::Palette {
            command: PaletteCommands::Run {
                command_id: "ai-agent-launcher.open-panel".to_string(),
                print: false,
            },
        })
        .unwrap();
    assert!(panel.contains("Total: 6 preset(s)"));

    assert!(context
        .execute(&Commands::Palette {
            command: PaletteCommands::Run {
                command_id: "nope".to_string(),
                print: false,
            },
        })
        .is_err());

    let listing = context
        .execute(&Commands::Palette {
            command: PaletteCommands::List {
                format: "json".to_string(),
            },
        })
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&listing).unwrap();
    assert_eq!(value["total"], 5);
}

#[test]
fn config_show_renders_toml() {
    let (context, _) = context(ScriptedPrompt::new());
    let output = context
        .execute(&Commands::Config {
            command: ConfigCommands::Show,
        })
        .unwrap();
    assert!(output.contains("backend = \"memory\""));
    assert!(output.contains("mode = \"print\""));
}
