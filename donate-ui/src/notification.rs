//! Transient, auto-dismissing error banner.

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use tokio::task::JoinHandle;
use tracing::debug;

/// How long a banner stays up unless dismissed first.
pub const NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Default)]
struct Slot {
    generation: u64,
    message: Option<String>,
}

/// Holds at most one message and closes it after [`NOTIFICATION_TIMEOUT`].
///
/// Showing a new message restarts the countdown. A timer only ever clears
/// the message it was started for, and dropping the notification aborts
/// any countdown still pending.
#[derive(Debug)]
pub struct Notification {
    slot: Arc<Mutex<Slot>>,
    timer: Option<JoinHandle<()>>,
    timeout: Duration,
}

impl Default for Notification {
    fn default() -> Self {
        Self::new()
    }
}

impl Notification {
    pub fn new() -> Self {
        Self::with_timeout(NOTIFICATION_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
            timer: None,
            timeout,
        }
    }

    /// Opens the banner with `message`. Must be called inside a tokio runtime.
    pub fn show(
        &mut self,
        message: impl Into<String>,
    ) {
        self.cancel_timer();

        let generation = {
            let mut slot = lock(&self.slot);
            slot.generation += 1;
            slot.message = Some(message.into());
            slot.generation
        };

        let slot = Arc::clone(&self.slot);
        let timeout = self.timeout;
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            let mut slot = lock(&slot);
            if slot.generation == generation {
                slot.message = None;
                debug!("notification closed after timeout");
            }
        }));
    }

    /// Closes the banner immediately.
    pub fn dismiss(&mut self) {
        self.cancel_timer();
        let mut slot = lock(&self.slot);
        slot.generation += 1;
        slot.message = None;
    }

    pub fn message(&self) -> Option<String> {
        lock(&self.slot).message.clone()
    }

    pub fn is_visible(&self) -> bool {
        lock(&self.slot).message.is_some()
    }

    /// Whether an auto-close countdown is still running.
    pub fn has_pending_timer(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| !t.is_finished())
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for Notification {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

fn lock(slot: &Mutex<Slot>) -> MutexGuard<'_, Slot> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}
