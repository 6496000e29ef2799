//! Feed client
//!
//! Owns the local copy of the share feed and the user's draft. All mutation
//! goes through four operations: refresh, submit, copy and delete. Failures
//! in any of them are logged and swallowed; the feed is a best-effort cache
//! of the backend that the next refresh corrects.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard};

use tracing::{debug, error, info, warn};

use super::input::EntryRef;
use crate::domain::entities::{Draft, DraftFile, Share, ShareId};
use crate::domain::ports::{Clipboard, FeedView, ShareStore};
use crate::error::AppError;

/// What caused a refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTrigger {
    Startup,
    Poll,
    UserAction,
}

impl RefreshTrigger {
    /// Startup and user actions bring the newest entry into view
    pub fn scrolls_to_latest(&self) -> bool {
        !matches!(self, RefreshTrigger::Poll)
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing to send
    Skipped,
    Sent,
    /// The draft was kept for a manual retry
    Failed,
}

/// The feed controller
pub struct FeedClient<S, C, F, V>
where
    S: ShareStore,
    C: Clipboard,
    F: Clipboard,
    V: FeedView,
{
    store: Arc<S>,
    clipboard: Arc<C>,
    fallback_clipboard: Arc<F>,
    view: Arc<V>,
    shares: RwLock<Vec<Share>>,
    draft: Mutex<Draft>,
}

impl<S, C, F, V> FeedClient<S, C, F, V>
where
    S: ShareStore,
    C: Clipboard,
    F: Clipboard,
    V: FeedView,
{
    pub fn new(store: Arc<S>, clipboard: Arc<C>, fallback_clipboard: Arc<F>, view: Arc<V>) -> Self {
        Self {
            store,
            clipboard,
            fallback_clipboard,
            view,
            shares: RwLock::new(Vec::new()),
            draft: Mutex::new(Draft::new()),
        }
    }

    /// Snapshot of the feed in display order (newest first)
    #[cfg(test)]
    pub fn shares(&self) -> Vec<Share> {
        self.read_shares().clone()
    }

    fn read_shares(&self) -> RwLockReadGuard<'_, Vec<Share>> {
        match self.shares.read() {
            Ok(shares) => shares,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Snapshot of the draft
    pub fn draft(&self) -> Draft {
        self.lock_draft().clone()
    }

    fn lock_draft(&self) -> MutexGuard<'_, Draft> {
        match self.draft.lock() {
            Ok(draft) => draft,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    // --- Draft edits ---

    pub fn type_text(&self, text: &str) {
        self.lock_draft().type_text(text);
    }

    pub fn insert_line_break(&self) {
        self.lock_draft().insert_line_break();
    }

    pub fn clear_text(&self) {
        self.lock_draft().clear_text();
    }

    pub fn select_file(&self, file: DraftFile) {
        debug!(name = %file.name, size = file.bytes.len(), "file selected");
        self.lock_draft().select_file(file);
    }

    pub fn clear_file(&self) {
        self.lock_draft().clear_file();
    }

    // --- Operations ---

    /// Re-fetch the whole collection and replace the local feed with it,
    /// reversed into display order. Returns whether the fetch succeeded.
    ///
    /// Overlapping refreshes are not coordinated: whichever response lands
    /// last is what the feed shows.
    pub async fn refresh(&self, trigger: RefreshTrigger) -> bool {
        let mut fetched = match self.store.list_shares().await {
            Ok(shares) => shares,
            Err(e) => {
                warn!(?trigger, "Error fetching shares: {}", e);
                return false;
            }
        };
        fetched.reverse();

        let changed = {
            let mut shares = match self.shares.write() {
                Ok(shares) => shares,
                Err(poisoned) => poisoned.into_inner(),
            };
            let changed = *shares != fetched;
            *shares = fetched.clone();
            changed
        };

        debug!(?trigger, count = fetched.len(), changed, "feed refreshed");

        let scroll = trigger.scrolls_to_latest();
        if changed || scroll {
            self.view.show_feed(&fetched, scroll);
        }
        true
    }

    /// Send the draft. A selected file is sent instead of any typed text.
    /// On success the draft is cleared and the feed refreshed; on failure
    /// the draft is left exactly as it was.
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(submission) = self.lock_draft().submission() else {
            debug!("submit with empty draft ignored");
            return SubmitOutcome::Skipped;
        };

        match self.store.create_share(&submission).await {
            Ok(()) => {
                info!("Share submitted");
                self.lock_draft().clear();
                self.refresh(RefreshTrigger::UserAction).await;
                SubmitOutcome::Sent
            }
            Err(e) => {
                error!("Error submitting share: {}", e);
                SubmitOutcome::Failed
            }
        }
    }

    /// Put `content` on the clipboard, through the system clipboard when the
    /// session has one and the fallback otherwise. Never fails.
    pub async fn copy(&self, content: &str) {
        let result = if self.clipboard.is_available() {
            self.clipboard.write_text(content).await
        } else {
            debug!("system clipboard unavailable, using fallback");
            self.fallback_clipboard.write_text(content).await
        };

        match result {
            Ok(()) => debug!(chars = content.chars().count(), "copied to clipboard"),
            Err(e) => warn!("Copy failed: {}", e),
        }
    }

    /// Delete a share, then refresh whether or not the delete went through
    pub async fn delete(&self, id: ShareId) {
        match self.store.delete_share(id).await {
            Ok(()) => info!(%id, "Share deleted"),
            Err(e) => error!(%id, "Failed to delete share: {}", e),
        }
        self.refresh(RefreshTrigger::UserAction).await;
    }

    // --- Entry lookup ---

    /// Share at a 1-based position of the displayed feed
    pub fn share_at(&self, index: usize) -> Result<Share, AppError> {
        index
            .checked_sub(1)
            .and_then(|i| self.read_shares().get(i).cloned())
            .ok_or(AppError::NoSuchEntry(index))
    }

    /// Share with the given server id, if it is in the current feed
    pub fn share_by_id(&self, id: ShareId) -> Result<Share, AppError> {
        self.read_shares()
            .iter()
            .find(|share| share.id == id)
            .cloned()
            .ok_or(AppError::NoSuchShare(id))
    }

    pub fn resolve(&self, entry: EntryRef) -> Result<Share, AppError> {
        match entry {
            EntryRef::Position(index) => self.share_at(index),
            EntryRef::Id(id) => self.share_by_id(id),
        }
    }

    pub async fn copy_entry(&self, entry: EntryRef) -> Result<(), AppError> {
        let share = self.resolve(entry)?;
        self.copy(&share.content).await;
        Ok(())
    }

    pub async fn delete_entry(&self, entry: EntryRef) -> Result<(), AppError> {
        let share = self.resolve(entry)?;
        self.delete(share.id).await;
        Ok(())
    }

    /// Write the decoded image of a displayed entry to `path`
    pub async fn save_image(&self, entry: EntryRef, path: &Path) -> Result<PathBuf, AppError> {
        let share = self.resolve(entry)?;
        let bytes = share.image_bytes().ok_or(AppError::NotAnImage(share.id))??;
        tokio::fs::write(path, &bytes).await?;
        info!(id = %share.id, path = %path.display(), "Image saved");
        Ok(path.to_path_buf())
    }
}
