//! Transient user notices.
//!
//! At most one notice is visible. Showing a new one cancels the clear timer
//! of the previous notice, so an old timer can never wipe a newer message.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use log::debug;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::sleep;

pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_millis(3000);

#[derive(Debug, Default)]
struct NoticeSlot {
    message: Option<String>,
    sequence: u64,
    clear_task: Option<JoinHandle<()>>,
}

/// Single-slot notice holder with a self-clearing timer.
#[derive(Debug, Clone)]
pub struct Notifier {
    slot: Arc<Mutex<NoticeSlot>>,
    ttl: Duration,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_TTL)
    }
}

impl Notifier {
    pub fn new(ttl: Duration) -> Self {
        Notifier {
            slot: Arc::new(Mutex::new(NoticeSlot::default())),
            ttl,
        }
    }

    /// Show `message`, replacing any current notice and its pending clear.
    ///
    /// Outside a tokio runtime the notice stays until replaced or cleared.
    pub fn show(&self, message: impl Into<String>) {
        let mut slot = lock(&self.slot);
        if let Some(task) = slot.clear_task.take() {
            task.abort();
        }
        slot.sequence += 1;
        slot.message = Some(message.into());

        let Ok(handle) = Handle::try_current() else {
            debug!("No runtime available, notice will not auto-clear");
            return;
        };

        let sequence = slot.sequence;
        let shared = Arc::clone(&self.slot);
        let ttl = self.ttl;
        slot.clear_task = Some(handle.spawn(async move {
            sleep(ttl).await;
            let mut slot = lock(&shared);
            if slot.sequence == sequence {
                slot.message = None;
                slot.clear_task = None;
            }
        }));
    }

    /// The notice currently visible, if any.
    pub fn current(&self) -> Option<String> {
        lock(&self.slot).message.clone()
    }

    pub fn clear(&self) {
        let mut slot = lock(&self.slot);
        if let Some(task) = slot.clear_task.take() {
            task.abort();
        }
        slot.sequence += 1;
        slot.message = None;
    }
}

fn lock(slot: &Mutex<NoticeSlot>) -> MutexGuard<'_, NoticeSlot> {
    slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
