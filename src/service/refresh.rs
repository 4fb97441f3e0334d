// service/refresh.rs
//
// Polling stand-in for push updates: a periodic re-fetch replaces a shared
// in-memory view. This is the only way one client ever observes another
// client's writes.
use std::future::Future;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Duration;

use crate::db::store::StoreError;

pub struct RefreshHandle<T> {
    name: &'static str,
    latest: watch::Receiver<T>,
    task: JoinHandle<()>,
}

impl<T> std::fmt::Debug for RefreshHandle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshHandle")
            .field("name", &self.name)
            .finish()
    }
}

impl<T: Clone> RefreshHandle<T> {
    /// Most recently published view.
    pub fn latest(&self) -> T {
        self.latest.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.latest.clone()
    }

    /// Cancels the loop. Also happens on drop, so a forgotten handle
    /// cannot leak its timer.
    pub fn stop(&self) {
        self.task.abort();
    }
}

impl<T> Drop for RefreshHandle<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawns a refresh loop that re-runs `fetch` on every tick (the first
/// tick fires immediately) and publishes each successful result. A failed
/// fetch is logged as transient and leaves the previous view in place;
/// the next tick simply tries again — there is no early retry.
pub fn spawn_refresh_loop<T, F, Fut>(
    name: &'static str,
    every: Duration,
    initial: T,
    fetch: F,
) -> RefreshHandle<T>
where
    T: Clone + Send + Sync + 'static,
    F: Fn() -> Fut + Send + 'static,
    Fut: Future<Output = Result<T, StoreError>> + Send,
{
    let (tx, rx) = watch::channel(initial);

    let task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        loop {
            interval.tick().await;
            match fetch().await {
                Ok(view) => {
                    if tx.send(view).is_err() {
                        break;
                    }
                }
                Err(e) => tracing::warn!("{} refresh failed: {}", name, e),
            }
        }
    });

    RefreshHandle {
        name,
        latest: rx,
        task,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_each_tick_replaces_the_published_view() {
        let counter = Arc::new(AtomicU32::new(0));
        let fetch_counter = counter.clone();

        let handle = spawn_refresh_loop("counter", Duration::from_millis(10), 0u32, move || {
            let counter = fetch_counter.clone();
            async move { Ok(counter.fetch_add(1, Ordering::SeqCst) + 1) }
        });

        let mut rx = handle.subscribe();
        rx.changed().await.unwrap();
        let first = *rx.borrow();
        rx.changed().await.unwrap();
        let second = *rx.borrow();

        assert!(second > first);
        assert!(handle.latest() >= second);
    }

    #[tokio::test]
    async fn test_stop_halts_the_loop() {
        let counter = Arc::new(AtomicU32::new(0));
        let fetch_counter = counter.clone();

        let handle = spawn_refresh_loop("counter", Duration::from_millis(5), 0u32, move || {
            let counter = fetch_counter.clone();
            async move { Ok(counter.fetch_add(1, Ordering::SeqCst)) }
        });

        let mut rx = handle.subscribe();
        rx.changed().await.unwrap();
        handle.stop();

        let settled = counter.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(50)).await;
        // At most one in-flight fetch can land after the abort.
        assert!(counter.load(Ordering::SeqCst) <= settled + 1);
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_the_previous_view() {
        let counter = Arc::new(AtomicU32::new(0));
        let fetch_counter = counter.clone();

        let handle = spawn_refresh_loop("flaky", Duration::from_millis(10), 0u32, move || {
            let counter = fetch_counter.clone();
            async move {
                let call = counter.fetch_add(1, Ordering::SeqCst);
                if call == 0 {
                    Ok(7)
                } else {
                    Err(StoreError::Other("backend briefly away".to_string()))
                }
            }
        });

        let mut rx = handle.subscribe();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), 7);

        // Later ticks fail; the published view must survive them.
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(handle.latest(), 7);
    }
}
