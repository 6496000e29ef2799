//! Clipboard port trait

use async_trait::async_trait;

use crate::error::ClipboardError;

/// A way of placing text on the system clipboard
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Whether this clipboard can be used in the current session
    fn is_available(&self) -> bool;

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
