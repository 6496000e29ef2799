//! Feed view port trait
//!
//! The presentation surface the feed client renders into.

use crate::domain::entities::Share;

pub trait FeedView: Send + Sync {
    /// Show the feed in display order. `scroll_to_latest` asks the view to
    /// bring the newest entry into sight.
    fn show_feed(&self, shares: &[Share], scroll_to_latest: bool);
}
