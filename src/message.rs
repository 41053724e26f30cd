//! Status Messages
//!
//! Transient, auto-dismissing user feedback. Only the latest message counts:
//! posting a new one replaces the old one and invalidates the old one's
//! dismiss timer.
//!
//! `MessageSlot` holds the generation bookkeeping and is shared with the
//! browser UI, which drives it from a `gloo-timers` timeout. `MessageCenter`
//! drives the same slot from a tokio task.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default time a message stays visible
pub const DEFAULT_MESSAGE_TIMEOUT_MS: u64 = 4000;

/// Message severity, rendered as a CSS class
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    Info,
    Success,
    Error,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::Info => write!(f, "info"),
            MessageKind::Success => write!(f, "success"),
            MessageKind::Error => write!(f, "error"),
        }
    }
}

/// A user-facing status message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

impl Message {
    pub fn new(text: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, MessageKind::Info)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, MessageKind::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, MessageKind::Error)
    }
}

/// Holds the visible message and the generation of the last post
#[derive(Debug, Clone, Default)]
pub struct MessageSlot {
    current: Option<Message>,
    generation: u64,
}

impl MessageSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a message, replacing whatever was visible.
    ///
    /// Returns the generation a dismiss timer must present to hide it.
    pub fn post(&mut self, message: Message) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.current = Some(message);
        self.generation
    }

    /// Hide the message if `generation` is still the latest post
    pub fn dismiss(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn current(&self) -> Option<&Message> {
        self.current.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(feature = "native")]
pub use center::MessageCenter;

#[cfg(feature = "native")]
mod center {
    use super::{Message, MessageSlot};
    use std::sync::{Arc, Mutex, MutexGuard};
    use std::time::Duration;
    use tokio::task::JoinHandle;

    /// Drives a `MessageSlot` with tokio dismiss timers
    ///
    /// Outside a tokio runtime messages are still posted but never dismissed
    /// automatically.
    #[derive(Debug)]
    pub struct MessageCenter {
        slot: Arc<Mutex<MessageSlot>>,
        timer: Option<JoinHandle<()>>,
        timeout: Duration,
    }

    impl MessageCenter {
        pub fn new(timeout: Duration) -> Self {
            Self {
                slot: Arc::new(Mutex::new(MessageSlot::new())),
                timer: None,
                timeout,
            }
        }

        pub fn timeout(&self) -> Duration {
            self.timeout
        }

        /// Show a message and arm its dismiss timer, cancelling the previous timer
        pub fn show(&mut self, message: Message) {
            tracing::debug!(kind = %message.kind, text = %message.text, "Showing message");

            let generation = lock(&self.slot).post(message);

            if let Some(previous) = self.timer.take() {
                previous.abort();
            }

            let Ok(runtime) = tokio::runtime::Handle::try_current() else {
                tracing::debug!("No runtime, message stays until replaced");
                return;
            };

            let slot = Arc::clone(&self.slot);
            let timeout = self.timeout;
            self.timer = Some(runtime.spawn(async move {
                tokio::time::sleep(timeout).await;
                lock(&slot).dismiss(generation);
            }));
        }

        /// The message currently visible, if any
        pub fn current(&self) -> Option<Message> {
            lock(&self.slot).current().cloned()
        }

        /// Hide the current message immediately
        pub fn clear(&mut self) {
            if let Some(previous) = self.timer.take() {
                previous.abort();
            }
            let mut slot = lock(&self.slot);
            let generation = slot.generation();
            slot.dismiss(generation);
        }
    }

    impl Drop for MessageCenter {
        fn drop(&mut self) {
            if let Some(timer) = self.timer.take() {
                timer.abort();
            }
        }
    }

    // A panic while holding the lock cannot leave the slot half-written
    fn lock(slot: &Mutex<MessageSlot>) -> MutexGuard<'_, MessageSlot> {
        slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_replaces_message() {
        let mut slot = MessageSlot::new();
        slot.post(Message::info("first"));
        slot.post(Message::error("second"));

        assert_eq!(slot.current(), Some(&Message::error("second")));
    }

    #[test]
    fn test_stale_dismiss_is_ignored() {
        let mut slot = MessageSlot::new();
        let first = slot.post(Message::info("first"));
        let second = slot.post(Message::success("second"));

        assert!(!slot.dismiss(first));
        assert_eq!(slot.current().map(|m| m.text.as_str()), Some("second"));

        assert!(slot.dismiss(second));
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(MessageKind::Success.to_string(), "success");
        assert_eq!(MessageKind::default(), MessageKind::Info);
    }

    #[cfg(feature = "native")]
    mod center {
        use super::super::*;
        use std::time::Duration;

        #[tokio::test(start_paused = true)]
        async fn test_message_auto_dismisses() {
            let mut center = MessageCenter::new(Duration::from_millis(4000));
            center.show(Message::success("Signed up"));
            assert!(center.current().is_some());

            tokio::time::sleep(Duration::from_millis(4001)).await;
            assert!(center.current().is_none());
        }

        #[tokio::test(start_paused = true)]
        async fn test_newer_message_outlives_older_timer() {
            let mut center = MessageCenter::new(Duration::from_millis(4000));
            center.show(Message::info("first"));

            tokio::time::sleep(Duration::from_millis(3000)).await;
            center.show(Message::error("second"));

            // The first timer would have fired here
            tokio::time::sleep(Duration::from_millis(1500)).await;
            assert_eq!(center.current(), Some(Message::error("second")));

            tokio::time::sleep(Duration::from_millis(3000)).await;
            assert!(center.current().is_none());
        }

        #[test]
        fn test_show_without_runtime_keeps_message() {
            let mut center = MessageCenter::new(Duration::from_millis(10));
            center.show(Message::info("first"));
            center.show(Message::error("second"));

            assert_eq!(center.current(), Some(Message::error("second")));
            center.clear();
            assert!(center.current().is_none());
        }

        #[tokio::test]
        async fn test_clear() {
            let mut center = MessageCenter::new(Duration::from_secs(60));
            center.show(Message::info("hello"));
            center.clear();
            assert!(center.current().is_none());
        }
    }
}
