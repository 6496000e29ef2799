//! Share store port trait
//!
//! Defines the interface of the remote share collection.

use async_trait::async_trait;

use crate::domain::entities::{NewShare, Share, ShareId};
use crate::error::ShareApiError;

/// The remote collection of shares
#[async_trait]
pub trait ShareStore: Send + Sync {
    /// Fetch every share, in the order the backend returns them
    async fn list_shares(&self) -> Result<Vec<Share>, ShareApiError>;

    /// Create a share from a text body or an uploaded file
    async fn create_share(&self, share: &NewShare) -> Result<(), ShareApiError>;

    /// Delete a share by id
    async fn delete_share(&self, id: ShareId) -> Result<(), ShareApiError>;
}
