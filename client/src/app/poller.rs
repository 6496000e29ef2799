//! Periodic feed refresh
//!
//! A background task that refreshes the feed on a fixed interval until it is
//! stopped. Each tick spawns its own refresh, so a slow fetch never delays
//! the next tick.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::feed_client::{FeedClient, RefreshTrigger};
use crate::domain::ports::{Clipboard, FeedView, ShareStore};

/// Handle to a running poller. Dropping it stops the timer.
pub struct Poller {
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl Poller {
    /// Start polling. The first tick fires one `period` from now; the caller
    /// does the startup refresh itself.
    pub fn start<S, C, F, V>(client: Arc<FeedClient<S, C, F, V>>, period: Duration) -> Self
    where
        S: ShareStore + 'static,
        C: Clipboard + 'static,
        F: Clipboard + 'static,
        V: FeedView + 'static,
    {
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let handle = tokio::spawn(async move {
            info!("feed poller started (interval={period:?})");
            let mut ticks = interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = token.cancelled() => {
                        info!("feed poller stopped");
                        break;
                    }
                    _ = ticks.tick() => {
                        debug!("poll tick");
                        let client = Arc::clone(&client);
                        tokio::spawn(async move {
                            client.refresh(RefreshTrigger::Poll).await;
                        });
                    }
                }
            }
        });

        Self {
            cancel,
            handle: Some(handle),
        }
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Cancel the timer and wait for the poll loop to exit. Refreshes already
    /// in flight are left to finish on their own.
    pub async fn stop(mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                warn!("feed poller task failed: {}", e);
            }
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
