//! The timed publish loop

use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::Result;

/// Seam between the loop and the broker side, so the loop is testable
/// without a live broker.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publish one heartbeat. Any error is fatal to the loop.
    async fn publish(&self) -> Result<()>;
}

/// Sequential publish loop
///
/// One in-flight publish attempt at a time, a fixed sleep after each
/// attempt completes, first error wins. The loop never recovers on its
/// own; it either runs forever under supervision or returns.
pub struct PublishLoop {
    interval: Duration,
    cancel: CancellationToken,
}

impl PublishLoop {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            cancel: CancellationToken::new(),
        }
    }

    /// Token that stops the loop at its next suspension point
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Run until cancelled (`Ok`) or until a publish attempt fails (`Err`).
    ///
    /// The first attempt happens immediately on entry; after each attempt
    /// completes the loop sleeps `interval` before the next one.
    pub async fn run<P: Publisher>(&self, publisher: &P) -> Result<()> {
        loop {
            if self.cancel.is_cancelled() {
                info!("Publish loop stopped");
                return Ok(());
            }

            info!("Sending keepalive");
            publisher.publish().await?;

            tokio::select! {
                _ = self.cancel.cancelled() => {
                    info!("Publish loop stopped");
                    return Ok(());
                }
                _ = tokio::time::sleep(self.interval) => {}
            }
        }
    }
}
