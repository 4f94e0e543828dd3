//! Built-in presets written to storage on first run.

use super::model::Preset;

/// Origin tag of the built-in presets.
pub const DEFAULT_AGENT_TAG: &str = "claude-code";

fn builtin(id: &str, name: &str, description: &str, icon: &str, command: &str, color: &str) -> Preset {
    Preset {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        agent: DEFAULT_AGENT_TAG.to_string(),
        icon: icon.to_string(),
        command: command.to_string(),
        color: color.to_string(),
    }
}

/// The seed list, in display order.
pub fn default_presets() -> Vec<Preset> {
    vec![
        builtin(
            "claude-plan",
            "Claude Code - Plan Mode",
            "Review and approve each step before execution",
            "\u{1F4CB}",
            "claude --permission-mode plan",
            "#60a5fa",
        ),
        builtin(
            "claude-edit",
            "Claude Code - Accept Edits",
            "Auto-accept file edits, prompt for other actions",
            "\u{270F}\u{FE0F}",
            "claude --permission-mode acceptEdits",
            "#34d399",
        ),
        builtin(
            "claude-full",
            "Claude Code - Full Access",
            "Skip all permission prompts (use with caution)",
            "\u{26A1}",
            "claude --dangerously-skip-permissions",
            "#f97316",
        ),
        builtin(
            "claude-opus",
            "Claude Code - Opus Model",
            "Use Claude Opus 4.6 for complex tasks",
            "\u{1F9E0}",
            "claude --model claude-opus-4-6",
            "#a78bfa",
        ),
        builtin(
            "claude-sonnet",
            "Claude Code - Sonnet Model",
            "Use Claude Sonnet 4.5 for faster responses",
            "\u{1F680}",
            "claude --model claude-sonnet-4-5-20250929",
            "#38bdf8",
        ),
        builtin(
            "claude-continue",
            "Claude Code - Continue Session",
            "Continue the most recent conversation",
            "\u{1F504}",
            "claude --continue",
            "#fbbf24",
        ),
    ]
}
