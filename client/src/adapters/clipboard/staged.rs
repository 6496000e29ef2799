//! Fallback clipboard
//!
//! Stages the text in a scratch file, hands that file to a legacy copy
//! command on stdin, then removes the scratch file. The file is removed on
//! every path, including when the copy command cannot be started or fails.

use std::io::Write;
use std::path::PathBuf;

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::{run_copy_command, CopyInput};
use crate::domain::ports::Clipboard;
use crate::error::ClipboardError;

pub struct StagedClipboard {
    command: Vec<String>,
    staging_dir: PathBuf,
}

impl StagedClipboard {
    pub fn new(command: Vec<String>) -> Self {
        Self {
            command,
            staging_dir: std::env::temp_dir(),
        }
    }

    /// Fallback with the platform's legacy copy command
    pub fn with_default_command() -> Self {
        Self::new(default_command())
    }

    #[cfg(test)]
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.staging_dir = dir.into();
        self
    }

    fn stage(&self, text: &str) -> Result<NamedTempFile, ClipboardError> {
        let mut staged = tempfile::Builder::new()
            .prefix("clipshare-")
            .suffix(".txt")
            .tempfile_in(&self.staging_dir)
            .map_err(ClipboardError::Staging)?;
        staged
            .write_all(text.as_bytes())
            .and_then(|_| staged.flush())
            .map_err(ClipboardError::Staging)?;
        Ok(staged)
    }
}

fn default_command() -> Vec<String> {
    let parts: &[&str] = if cfg!(target_os = "macos") {
        &["pbcopy"]
    } else if cfg!(windows) {
        &["clip"]
    } else {
        &["xsel", "--clipboard", "--input"]
    };
    parts.iter().map(|s| s.to_string()).collect()
}

#[async_trait]
impl Clipboard for StagedClipboard {
    fn is_available(&self) -> bool {
        !self.command.is_empty()
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let staged = self.stage(text)?;
        debug!(path = %staged.path().display(), "staged clipboard text");

        // `staged` drops on the early-return paths too, deleting the file
        let input = staged.reopen().map_err(ClipboardError::Staging)?;
        let result = run_copy_command(&self.command, CopyInput::File(input)).await;

        if let Err(e) = staged.close() {
            warn!("Failed to remove staged clipboard file: {}", e);
        }

        result
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn staging_is_empty(dir: &std::path::Path) -> bool {
        std::fs::read_dir(dir).unwrap().next().is_none()
    }

    #[tokio::test]
    async fn copies_staged_text_and_cleans_up() {
        let staging = tempfile::tempdir().unwrap();
        let out_dir = tempfile::tempdir().unwrap();
        let out = out_dir.path().join("copied.txt");
        let clipboard = StagedClipboard::new(vec![
            "sh".to_string(),
            "-c".to_string(),
            "cat > \"$0\"".to_string(),
            out.to_string_lossy().into_owned(),
        ])
        .in_dir(staging.path());

        clipboard.write_text("line one\nline two").await.unwrap();

        assert_eq!(std::fs::read_to_string(&out).unwrap(), "line one\nline two");
        assert!(staging_is_empty(staging.path()));
    }

    #[tokio::test]
    async fn failing_command_still_cleans_up() {
        let staging = tempfile::tempdir().unwrap();
        let clipboard = StagedClipboard::new(vec!["false".to_string()]).in_dir(staging.path());

        let result = clipboard.write_text("secret").await;

        assert!(matches!(result, Err(ClipboardError::Failed { .. })));
        assert!(staging_is_empty(staging.path()));
    }

    #[tokio::test]
    async fn missing_command_still_cleans_up() {
        let staging = tempfile::tempdir().unwrap();
        let clipboard =
            StagedClipboard::new(vec!["/no/such/copy-tool".to_string()]).in_dir(staging.path());

        let result = clipboard.write_text("secret").await;

        assert!(matches!(result, Err(ClipboardError::Spawn { .. })));
        assert!(staging_is_empty(staging.path()));
    }

    #[tokio::test]
    async fn unwritable_staging_dir_is_staging_error() {
        let clipboard =
            StagedClipboard::new(vec!["true".to_string()]).in_dir("/no/such/staging/dir");

        assert!(matches!(
            clipboard.write_text("x").await,
            Err(ClipboardError::Staging(_))
        ));
    }

    #[test]
    fn empty_command_is_unavailable() {
        assert!(!StagedClipboard::new(Vec::new()).is_available());
        assert!(StagedClipboard::with_default_command().is_available());
    }
}
