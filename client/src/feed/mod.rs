//! Feed module
//!
//! Plain-text rendering of the share feed for the terminal.

pub mod renderer;

pub use renderer::{render_draft, render_feed, render_help, render_latest};
