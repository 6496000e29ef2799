//! Mock implementations of port traits
//!
//! In-memory stand-ins for the backend, the clipboards and the view.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::domain::entities::{NewShare, Share, ShareId, ShareType};
use crate::domain::ports::{Clipboard, FeedView, ShareStore};
use crate::error::{ClipboardError, ShareApiError};

// ============================================================================
// Mock Share Store
// ============================================================================

/// A call received by the mock store
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    List,
    Create(NewShare),
    Delete(ShareId),
}

/// In-memory share collection. Creates append a new share with the next id,
/// deletes remove by id, lists return shares in insertion order.
#[derive(Default)]
pub struct MockShareStore {
    shares: Arc<RwLock<Vec<Share>>>,
    calls: Arc<RwLock<Vec<StoreCall>>>,
    fail_list: AtomicBool,
    fail_create: AtomicBool,
    fail_delete: AtomicBool,
}

impl MockShareStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shares(self, shares: Vec<Share>) -> Self {
        *self.shares.write().unwrap() = shares;
        self
    }

    pub fn failing_create(self) -> Self {
        self.fail_create.store(true, Ordering::SeqCst);
        self
    }

    pub fn failing_delete(self) -> Self {
        self.fail_delete.store(true, Ordering::SeqCst);
        self
    }

    pub fn fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    pub fn set_shares(&self, shares: Vec<Share>) {
        *self.shares.write().unwrap() = shares;
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.read().unwrap().clone()
    }

    pub fn list_count(&self) -> usize {
        self.calls
            .read()
            .unwrap()
            .iter()
            .filter(|c| matches!(c, StoreCall::List))
            .count()
    }

    fn record(&self, call: StoreCall) {
        self.calls.write().unwrap().push(call);
    }

    fn unavailable() -> ShareApiError {
        ShareApiError::Api {
            status: 503,
            message: "mock failure".to_string(),
        }
    }
}

#[async_trait]
impl ShareStore for MockShareStore {
    async fn list_shares(&self) -> Result<Vec<Share>, ShareApiError> {
        self.record(StoreCall::List);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        Ok(self.shares.read().unwrap().clone())
    }

    async fn create_share(&self, share: &NewShare) -> Result<(), ShareApiError> {
        self.record(StoreCall::Create(share.clone()));
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }

        let mut shares = self.shares.write().unwrap();
        let next_id = shares.iter().map(|s| s.id.0).max().unwrap_or(0) + 1;
        let (share_type, content) = match share {
            NewShare::Text(text) => (ShareType::Text, text.clone()),
            NewShare::File(file) => (ShareType::Image, STANDARD.encode(&file.bytes)),
        };
        shares.push(Share {
            id: ShareId(next_id),
            share_type,
            content,
            created_at: "2024-01-02T00:00:00Z".to_string(),
        });
        Ok(())
    }

    async fn delete_share(&self, id: ShareId) -> Result<(), ShareApiError> {
        self.record(StoreCall::Delete(id));
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        self.shares.write().unwrap().retain(|s| s.id != id);
        Ok(())
    }
}

// ============================================================================
// Mock Clipboard
// ============================================================================

pub struct MockClipboard {
    available: bool,
    fail: bool,
    attempts: AtomicUsize,
    writes: RwLock<Vec<String>>,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self {
            available: true,
            fail: false,
            attempts: AtomicUsize::new(0),
            writes: RwLock::new(Vec::new()),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    /// Text that made it onto the clipboard
    pub fn writes(&self) -> Vec<String> {
        self.writes.read().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Clipboard for MockClipboard {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ClipboardError::Failed {
                program: "mock".to_string(),
                status: "exit status: 1".to_string(),
            });
        }
        self.writes.write().unwrap().push(text.to_string());
        Ok(())
    }
}

// ============================================================================
// Recording View
// ============================================================================

/// One `show_feed` call
#[derive(Debug, Clone, PartialEq)]
pub struct Render {
    pub ids: Vec<ShareId>,
    pub scroll_to_latest: bool,
}

#[derive(Default)]
pub struct RecordingView {
    renders: RwLock<Vec<Render>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn renders(&self) -> Vec<Render> {
        self.renders.read().unwrap().clone()
    }

    pub fn render_count(&self) -> usize {
        self.renders.read().unwrap().len()
    }
}

impl FeedView for RecordingView {
    fn show_feed(&self, shares: &[Share], scroll_to_latest: bool) {
        self.renders.write().unwrap().push(Render {
            ids: shares.iter().map(|s| s.id).collect(),
            scroll_to_latest,
        });
    }
}
