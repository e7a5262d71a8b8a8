//! Cancellable single-shot timer for coalescing search keystrokes.

use std::sync::Mutex;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::error::TableError;

/// Default quiet period before a search is emitted.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Runs a callback once input has been quiet for `delay`.
///
/// Each [`schedule`](Debouncer::schedule) cancels the previous pending call
/// and starts a fresh timer on the current Tokio runtime. Dropping the
/// debouncer cancels whatever is pending.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<CancellationToken>>,
}

impl Debouncer {
    /// Creates a debouncer with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// (Re)starts the timer; `f` runs when it fires uncancelled.
    ///
    /// Fails with [`TableError::NoRuntime`] outside a Tokio runtime.
    pub fn schedule<F>(&self, f: F) -> Result<(), TableError>
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::runtime::Handle::try_current().map_err(|_| TableError::NoRuntime)?;

        let token = CancellationToken::new();
        if let Some(previous) = self.replace(Some(token.clone())) {
            previous.cancel();
        }

        let delay = self.delay;
        handle.spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    // Mark as no longer pending before running.
                    token.cancel();
                    f();
                }
            }
        });
        Ok(())
    }

    /// Cancels the pending call. Returns `true` if one was pending.
    pub fn cancel(&self) -> bool {
        match self.replace(None) {
            Some(token) => {
                let was_pending = !token.is_cancelled();
                token.cancel();
                was_pending
            }
            None => false,
        }
    }

    /// Returns `true` while a scheduled call has neither fired nor been
    /// cancelled.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .map(|g| g.as_ref().is_some_and(|t| !t.is_cancelled()))
            .unwrap_or(false)
    }

    fn replace(&self, token: Option<CancellationToken>) -> Option<CancellationToken> {
        match self.pending.lock() {
            Ok(mut guard) => std::mem::replace(&mut *guard, token),
            Err(poisoned) => std::mem::replace(&mut *poisoned.into_inner(), token),
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_rapid_schedules_fire_once() {
        let debouncer = Debouncer::default();
        let fired = Arc::new(AtomicUsize::new(0));

        for _ in 0..5 {
            let fired = fired.clone();
            debouncer
                .schedule(move || {
                    fired.fetch_add(1, Ordering::SeqCst);
                })
                .unwrap();
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        assert!(debouncer.is_pending());
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel() {
        let debouncer = Debouncer::default();
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        debouncer
            .schedule(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();

        assert!(debouncer.cancel());
        assert!(!debouncer.cancel());
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let fired = Arc::new(AtomicUsize::new(0));
        {
            let debouncer = Debouncer::default();
            let counter = fired.clone();
            debouncer
                .schedule(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                })
                .unwrap();
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_requires_runtime() {
        let debouncer = Debouncer::default();
        assert!(matches!(debouncer.schedule(|| {}), Err(TableError::NoRuntime)));
    }
}
