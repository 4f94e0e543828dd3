//! Terminal sink: where launched command text goes.

use crate::error::ApiError;
use parking_lot::Mutex;
use std::io::Write;
use std::process::Command;

/// One-way write of raw command text into a terminal session.
///
/// Success means the write call completed; what the terminal does with the
/// text is not observed.
pub trait TerminalSink: Send + Sync {
    fn write(&self, text: &str) -> Result<(), ApiError>;
}

/// Writes the text verbatim to any writer (stdout, a pty master, a buffer).
pub struct WriterTerminal<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterTerminal<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl WriterTerminal<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> TerminalSink for WriterTerminal<W> {
    fn write(&self, text: &str) -> Result<(), ApiError> {
        let mut writer = self.writer.lock();
        writer
            .write_all(text.as_bytes())
            .map_err(|e| ApiError::Terminal(e.to_string()))?;
        writer.flush().map_err(|e| ApiError::Terminal(e.to_string()))
    }
}

/// Hands the text to a shell attached to the current terminal.
///
/// The shell inherits stdio so interactive agents get the real tty. HOME,
/// USER, SHELL, PATH and locale variables are passed through explicitly.
pub struct ShellTerminal {
    shell: String,
}

impl ShellTerminal {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    fn command(&self, text: &str) -> Command {
        let mut command = Command::new(&self.shell);
        command.arg("-c").arg(text);
        for var in &[
            "HOME", "USER", "SHELL", "PATH", "LANG", "LC_ALL", "EDITOR", "VISUAL", "TERM",
        ] {
            if let Ok(value) = std::env::var(var) {
                command.env(var, value);
            }
        }
        command
    }
}

impl TerminalSink for ShellTerminal {
    fn write(&self, text: &str) -> Result<(), ApiError> {
        tracing::debug!(shell = %self.shell, "Dispatching command to shell");
        let status = self
            .command(text)
            .status()
            .map_err(|e| ApiError::Terminal(format!("Failed to start {}: {}", self.shell, e)))?;
        if !status.success() {
            tracing::warn!(?status, "Launched command exited unsuccessfully");
        }
        Ok(())
    }
}
