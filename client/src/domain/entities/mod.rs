//! Domain entities
//!
//! Pure domain models for the share feed.

pub mod draft;
pub mod share;

pub use draft::{Draft, DraftFile, DraftState, NewShare};
pub use share::{ImageFormat, Share, ShareId, ShareType};
