//! Timer-gated collapsing of rapid repeated events.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Runs an action only after a quiet period with no newer schedules.
///
/// Each `schedule` call cancels the previously pending action, so a burst
/// of calls results in exactly one execution carrying the last call's
/// payload. Must be used from within a tokio runtime.
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Schedules `action` to run after the configured quiet period,
    /// cancelling any action scheduled earlier that has not yet fired.
    pub fn schedule(&self, action: impl FnOnce() + Send + 'static) {
        let delay = self.delay;
        let mut pending = self.lock_pending();

        if let Some(previous) = pending.take() {
            previous.abort();
        }

        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        }));
    }

    /// Drops the pending action, if any, without running it.
    pub fn cancel(&self) {
        if let Some(previous) = self.lock_pending().take() {
            previous.abort();
        }
    }

    fn lock_pending(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
