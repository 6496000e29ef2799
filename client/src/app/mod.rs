//! Application layer
//!
//! The feed controller and the pieces that drive it: the background poller
//! and the interactive terminal session.

pub mod feed_client;
pub mod input;
pub mod poller;
pub mod session;

pub use feed_client::{FeedClient, RefreshTrigger};
pub use poller::Poller;
pub use session::run_session;
