//! Ports to the host application: terminal, notifications, prompts, panel.
//!
//! The registry and panel controller only ever talk to these traits; the CLI
//! binary plugs in the console adapters defined next to each trait.

pub mod notify;
pub mod prompt;
pub mod surface;
pub mod terminal;

pub use notify::{ConsoleNotifier, Notification, NotificationKind, NotificationSink};
pub use prompt::{
    DialoguerPrompt, PromptButton, PromptCollaborator, PromptField, PromptRequest, PromptResult,
    BUTTON_CANCEL, BUTTON_CONFIRM, BUTTON_SAVE,
};
pub use surface::{CapturedPanel, PanelSurface};
pub use terminal::{ShellTerminal, TerminalSink, WriterTerminal};
