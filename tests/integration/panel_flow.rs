use agent_launcher::host::{CapturedPanel, Notification, NotificationKind};
use agent_launcher::panel::{find_palette_command, PanelAction, PanelController};
use agent_launcher::preset::default_presets;
use agent_launcher::registry::PresetRegistry;
use std::sync::Arc;

use crate::support::{FlakyStore, RecordingHost, ScriptedPrompt};

struct Harness {
    host: Arc<RecordingHost>,
    prompt: Arc<ScriptedPrompt>,
    panel: Arc<CapturedPanel>,
    store: Arc<FlakyStore>,
    controller: PanelController,
    registry: PresetRegistry,
}

fn harness(prompt: ScriptedPrompt) -> Harness {
    let host = Arc::new(RecordingHost::default());
    let prompt = Arc::new(prompt);
    let panel = Arc::new(CapturedPanel::new());
    let store = Arc::new(FlakyStore::new());
    let controller = PanelController::new(host.clone(), host.clone(), prompt.clone(), panel.clone());
    let mut registry = PresetRegistry::new(store.clone());
    controller.activate(&mut registry).unwrap();
    Harness {
        host,
        prompt,
        panel,
        store,
        controller,
        registry,
    }
}

fn delete(id: &str) -> PanelAction {
    PanelAction::Delete {
        preset_id: id.to_string(),
    }
}

#[test]
fn activate_renders_built_in_cards() {
    let h = harness(ScriptedPrompt::new());
    let view = h.panel.last_view().unwrap();
    assert_eq!(view.cards.len(), 6);
    assert_eq!(view.cards[0].preset_id, "claude-plan");
    assert_eq!(h.panel.render_count(), 1);
}

#[test]
fn add_saves_refreshes_and_notifies() {
    let mut h = harness(ScriptedPrompt::new().save(&[
        ("name", "Reviewer"),
        ("description", "Review the diff"),
        ("command", "claude -p review"),
    ]));
    h.controller.dispatch(&mut h.registry, &PanelAction::Add).unwrap();

    assert_eq!(h.registry.len(), 7);
    let added = h.registry.presets().last().unwrap();
    assert_eq!(added.name, "Reviewer");
    assert_eq!(added.agent, "custom");
    assert_eq!(added.icon, "\u{1F916}");
    assert_eq!(h.panel.last_view().unwrap().cards.len(), 7);
    assert_eq!(h.host.last_note(), Some(Notification::success("Preset added")));
    assert_eq!(h.prompt.requests.lock()[0].title, "Add New Preset");
}

#[test]
fn cancelled_or_dismissed_add_changes_nothing() {
    let mut h = harness(ScriptedPrompt::new().cancel().dismiss());
    let writes = h.store.writes();
    h.controller.dispatch(&mut h.registry, &PanelAction::Add).unwrap();
    h.controller.dispatch(&mut h.registry, &PanelAction::Add).unwrap();
    assert_eq!(h.registry.presets(), default_presets().as_slice());
    assert_eq!(h.store.writes(), writes);
    assert!(h.host.notes.lock().is_empty());
    assert_eq!(h.panel.render_count(), 1);
}

#[test]
fn edit_prefills_form_and_replaces_in_place() {
    let mut h = harness(ScriptedPrompt::new().save(&[
        ("name", "Plan (tweaked)"),
        ("command", "claude --permission-mode plan --verbose"),
    ]));
    h.controller
        .dispatch(
            &mut h.registry,
            &PanelAction::Edit {
                preset_id: "claude-plan".to_string(),
            },
        )
        .unwrap();

    let request = &h.prompt.requests.lock()[0];
    assert_eq!(request.title, "Edit Preset");
    assert_eq!(request.fields[0].value.as_deref(), Some("Claude Code - Plan Mode"));

    let edited = &h.registry.presets()[0];
    assert_eq!(edited.id, "claude-plan");
    assert_eq!(edited.name, "Plan (tweaked)");
    assert_eq!(edited.agent, "custom");
    assert_eq!(h.host.last_note(), Some(Notification::success("Preset updated")));
}

#[test]
fn edit_unknown_id_never_prompts() {
    let mut h = harness(ScriptedPrompt::new());
    h.controller
        .dispatch(
            &mut h.registry,
            &PanelAction::Edit {
                preset_id: "ghost".to_string(),
            },
        )
        .unwrap();
    assert!(h.prompt.requests.lock().is_empty());
    assert!(h.host.notes.lock().is_empty());
}

#[test]
fn delete_asks_with_preset_name() {
    let mut h = harness(ScriptedPrompt::new().confirm_no().confirm_yes());
    h.controller.dispatch(&mut h.registry, &delete("claude-opus")).unwrap();
    assert_eq!(h.registry.len(), 6);

    h.controller.dispatch(&mut h.registry, &delete("claude-opus")).unwrap();
    assert_eq!(h.registry.len(), 5);
    assert!(h.registry.get("claude-opus").is_none());

    let messages = h.prompt.confirm_messages.lock();
    assert_eq!(
        messages[0],
        "Delete \"Claude Code - Opus Model\"? This cannot be undone."
    );
    assert_eq!(h.host.last_note(), Some(Notification::success("Preset deleted")));
}

#[test]
fn failed_save_reports_error_and_keeps_list() {
    let mut h = harness(ScriptedPrompt::new().save(&[("name", "X"), ("command", "foo")]));
    h.store.set_fail_writes(true);
    let err = h
        .controller
        .dispatch(&mut h.registry, &PanelAction::Add)
        .unwrap_err();
    assert!(err.is_storage());
    assert_eq!(h.registry.presets(), default_presets().as_slice());
    let note = h.host.last_note().unwrap();
    assert_eq!(note.kind, NotificationKind::Error);
    assert!(note.message.starts_with("Failed to save presets"));
}

#[test]
fn launch_action_reaches_terminal() {
    let mut h = harness(ScriptedPrompt::new());
    h.controller
        .dispatch(
            &mut h.registry,
            &PanelAction::Launch {
                preset_id: "claude-continue".to_string(),
            },
        )
        .unwrap();
    assert_eq!(*h.host.writes.lock(), vec!["claude --continue\n".to_string()]);
    assert_eq!(
        h.host.last_note(),
        Some(Notification::info("Launched: Claude Code - Continue Session"))
    );
}

#[test]
fn quick_launch_ignores_edited_preset() {
    let mut h = harness(ScriptedPrompt::new());
    h.registry
        .edit(
            "claude-edit",
            agent_launcher::PresetFields::new("Edit", "something else"),
        )
        .unwrap();
    let command = find_palette_command("ai-agent-launcher.launch-claude-edit").unwrap();
    h.controller.run_palette(&h.registry, &command).unwrap();
    assert_eq!(
        *h.host.writes.lock(),
        vec!["claude --permission-mode acceptEdits\n".to_string()]
    );
    assert_eq!(
        h.host.last_note(),
        Some(Notification::info("Launched: Claude Code (Accept Edits)"))
    );
}

#[test]
fn toggle_palette_entry_rerenders_panel() {
    let h = harness(ScriptedPrompt::new());
    let command = find_palette_command("ai-agent-launcher.manage-presets").unwrap();
    h.controller.run_palette(&h.registry, &command).unwrap();
    assert_eq!(h.panel.render_count(), 2);
    assert!(h.host.writes.lock().is_empty());
}

#[test]
fn shared_registry_dispatch() {
    let h = harness(ScriptedPrompt::new().confirm_yes());
    let shared = h.registry.into_shared();
    h.controller
        .dispatch_shared(&shared, &delete("claude-plan"))
        .unwrap();
    assert_eq!(shared.lock().len(), 5);
}
