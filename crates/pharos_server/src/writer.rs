use pharos_core::prelude::*;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::warn;

enum Job {
    Write {
        key: CacheKey,
        response: CachedResponse,
    },
    Shutdown,
}

/// Queues best-effort cache population so the response path never waits
/// on the cache. Write failures are logged and swallowed; the client
/// never observes them.
#[derive(Clone)]
pub struct CacheWriter {
    tx: mpsc::UnboundedSender<Job>,
}

impl CacheWriter {
    /// Spawns the worker task draining the queue. The returned guard
    /// joins the worker so queued writes run to completion before the
    /// host tears down.
    pub fn spawn<C: EdgeCache>(cache: C) -> (Self, CacheWriterGuard) {
        let (tx, mut rx) = mpsc::unbounded_channel();

        let handle = tokio::spawn(async move {
            while let Some(job) = rx.recv().await {
                match job {
                    Job::Write { key, response } => {
                        if let Err(e) = cache.store(key.clone(), response).await {
                            warn!("Cache write for {} {} failed: {e}", key.method, key.url);
                        }
                    }
                    Job::Shutdown => break,
                }
            }
        });

        (
            Self { tx: tx.clone() },
            CacheWriterGuard { tx, handle },
        )
    }

    /// Never blocks. A closed queue means the worker is already gone;
    /// the write is dropped, which the best-effort contract allows.
    pub fn enqueue(&self, key: CacheKey, response: CachedResponse) {
        let _ = self.tx.send(Job::Write { key, response });
    }
}

/// Held by the host process. Draining guarantees every write queued
/// before the drain completes before the worker exits.
pub struct CacheWriterGuard {
    tx: mpsc::UnboundedSender<Job>,
    handle: JoinHandle<()>,
}

impl CacheWriterGuard {
    pub async fn drain(self) {
        // FIFO queue: the marker sits behind every pending write.
        let _ = self.tx.send(Job::Shutdown);
        let _ = self.handle.await;
    }
}
