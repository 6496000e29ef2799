//! Terminal feed view
//!
//! Writes the rendered feed to a terminal stream (stdout in production).

use std::io::Write;
use std::sync::Mutex;

use chrono::Local;
use tracing::warn;

use crate::domain::entities::Share;
use crate::domain::ports::FeedView;
use crate::feed::{render_feed, render_latest};

pub struct TerminalView<W: Write + Send> {
    out: Mutex<W>,
}

impl TerminalView<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap()
    }
}

impl<W: Write + Send> FeedView for TerminalView<W> {
    fn show_feed(&self, shares: &[Share], scroll_to_latest: bool) {
        let mut rendered = render_feed(shares, &Local);
        if scroll_to_latest {
            if let Some(latest) = render_latest(shares, &Local) {
                rendered.push_str(&latest);
            }
        }

        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = out.write_all(rendered.as_bytes()).and_then(|_| out.flush()) {
            warn!("Failed to write feed to terminal: {}", e);
        }
    }
}
