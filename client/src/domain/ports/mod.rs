//! Domain ports (traits)
//!
//! Port traits define interfaces that the feed client requires.
//! Adapters provide concrete implementations of these traits.

pub mod clipboard;
pub mod feed_view;
pub mod share_store;

pub use clipboard::Clipboard;
pub use feed_view::FeedView;
pub use share_store::ShareStore;
