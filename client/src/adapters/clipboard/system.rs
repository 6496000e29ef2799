//! Platform clipboard
//!
//! Pipes text into the native clipboard tool of the current graphical
//! session: `pbcopy` on macOS, `clip` on Windows, `wl-copy` under Wayland
//! and `xclip` under X11. Without a graphical session there is no system
//! clipboard to talk to and the adapter reports itself unavailable.

use async_trait::async_trait;
use tracing::debug;

use super::{find_program, run_copy_command, CopyInput};
use crate::domain::ports::Clipboard;
use crate::error::ClipboardError;

pub struct SystemClipboard {
    command: Option<Vec<String>>,
}

impl SystemClipboard {
    pub fn detect() -> Self {
        let command = detect_command();
        debug!(?command, "system clipboard detection");
        Self { command }
    }

    #[cfg(test)]
    pub fn with_command(command: Vec<String>) -> Self {
        Self {
            command: Some(command),
        }
    }
}

fn detect_command() -> Option<Vec<String>> {
    let parts: &[&str] = if cfg!(target_os = "macos") {
        &["pbcopy"]
    } else if cfg!(windows) {
        &["clip"]
    } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
        &["wl-copy"]
    } else if std::env::var_os("DISPLAY").is_some() {
        &["xclip", "-selection", "clipboard"]
    } else {
        return None;
    };
    Some(parts.iter().map(|s| s.to_string()).collect())
}

#[async_trait]
impl Clipboard for SystemClipboard {
    fn is_available(&self) -> bool {
        self.command
            .as_ref()
            .and_then(|cmd| cmd.first())
            .is_some_and(|program| find_program(program).is_some())
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let command = self.command.as_ref().ok_or(ClipboardError::Unavailable)?;
        run_copy_command(command, CopyInput::Pipe(text.as_bytes())).await
    }
}
