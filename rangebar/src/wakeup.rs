//! Wakeup channel for layout and redraw requests.
//!
//! The host event loop blocks when idle. Whenever a scrollbar's handle
//! geometry changes it sends a wakeup, asking the host to run a layout pass
//! and redraw.

use std::cell::RefCell;

use tokio::sync::mpsc;

/// Sender half of the wakeup channel.
#[derive(Clone, Debug)]
pub struct WakeupSender {
    tx: mpsc::Sender<()>,
}

impl WakeupSender {
    /// Send a wakeup signal.
    ///
    /// Non-blocking. Errors are ignored (full = a wakeup is already pending,
    /// closed = host is shutting down).
    pub fn send(&self) {
        let _ = self.tx.try_send(());
    }
}

/// Receiver half of the wakeup channel.
#[derive(Debug)]
pub struct WakeupReceiver {
    rx: mpsc::Receiver<()>,
}

impl WakeupReceiver {
    /// Wait for a wakeup signal.
    pub async fn recv(&mut self) -> Option<()> {
        self.rx.recv().await
    }

    /// Drain all pending wakeup signals, returning how many were pending.
    ///
    /// Multiple buffered wakeups collapse into a single layout pass.
    pub fn drain(&mut self) -> usize {
        let mut count = 0;
        while self.rx.try_recv().is_ok() {
            count += 1;
        }
        count
    }
}

/// Create a new wakeup channel pair.
pub fn channel() -> (WakeupSender, WakeupReceiver) {
    // Wakeups carry no data; a few pending ones are enough.
    let (tx, rx) = mpsc::channel(16);
    (WakeupSender { tx }, WakeupReceiver { rx })
}

/// Slot for a wakeup sender that the host installs after construction.
#[derive(Debug, Default)]
pub struct WakeupHandle {
    inner: RefCell<Option<WakeupSender>>,
}

impl WakeupHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a wakeup sender, replacing any previous one.
    pub fn install(&self, sender: WakeupSender) {
        *self.inner.borrow_mut() = Some(sender);
    }

    /// Send a wakeup signal if a sender is installed.
    pub fn send(&self) {
        if let Some(sender) = self.inner.borrow().as_ref() {
            sender.send();
        }
    }
}
