//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod clipboard;
pub mod http;
pub mod terminal;

pub use clipboard::{StagedClipboard, SystemClipboard};
pub use http::HttpShareStore;
pub use terminal::TerminalView;
