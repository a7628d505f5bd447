use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Cancellation token bound to a screen's visible lifetime.
///
/// Cloning yields another handle to the same scope. Once closed a scope
/// stays closed; load tasks check it before applying any transition.
#[derive(Clone)]
pub struct ScreenScope {
    closed: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ScreenScope {
    pub fn new() -> Self {
        Self {
            closed: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Close the scope (screen teardown).
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::SeqCst) {
            tracing::trace!("Screen scope closed");
            self.notify.notify_waiters();
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Resolves once the scope is closed.
    pub async fn closed(&self) {
        // Register before checking the flag, otherwise a close() landing
        // between the check and the await is lost.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_closed() {
            return;
        }
        notified.await;
    }
}

impl Default for ScreenScope {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn starts_open() {
        assert!(!ScreenScope::new().is_closed());
    }

    #[test]
    fn close_is_shared_between_clones() {
        let scope = ScreenScope::new();
        let handle = scope.clone();
        handle.close();
        assert!(scope.is_closed());
        // Idempotent.
        scope.close();
        assert!(handle.is_closed());
    }

    #[tokio::test]
    async fn closed_returns_immediately_when_already_closed() {
        let scope = ScreenScope::new();
        scope.close();
        tokio::time::timeout(Duration::from_millis(100), scope.closed())
            .await
            .expect("closed() should resolve");
    }

    #[tokio::test]
    async fn closed_wakes_waiter() {
        let scope = ScreenScope::new();
        let waiter = {
            let scope = scope.clone();
            tokio::spawn(async move { scope.closed().await })
        };
        tokio::task::yield_now().await;
        scope.close();
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should wake")
            .unwrap();
    }
}
