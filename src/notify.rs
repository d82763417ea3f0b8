//! Transient status messages (snackbar) with auto-dismiss

use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::debug;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// How long a message stays up unless replaced.
pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_millis(3000);

type MessageHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// What the snackbar currently shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationView {
    pub text: String,
    pub visible: bool,
}

#[derive(Default)]
struct NotifierState {
    view: NotificationView,
    deadline: Option<Instant>,
    dismiss: Option<JoinHandle<()>>,
    timers_scheduled: u64,
}

impl NotifierState {
    /// Hide the message once its deadline has passed.
    fn expire(&mut self) {
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            self.view.visible = false;
            self.deadline = None;
            if let Some(pending) = self.dismiss.take() {
                pending.abort();
            }
        }
    }
}

/// De-duplicating notifier.
///
/// While a message is visible, new messages replace its text but keep the
/// original dismiss deadline. Inside a tokio runtime the dismiss runs as a
/// task; elsewhere the deadline is checked whenever the view is read.
#[derive(Clone)]
pub struct Notifier {
    dismiss_after: Duration,
    state: Arc<Mutex<NotifierState>>,
    observers: Arc<Mutex<Vec<MessageHandler>>>,
}

impl Notifier {
    pub fn new(dismiss_after: Duration) -> Self {
        Notifier {
            dismiss_after,
            state: Arc::new(Mutex::new(NotifierState::default())),
            observers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Register a callback that receives every message passed to `notify`.
    pub fn on_message<F>(&self, cb: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.observers.lock().unwrap().push(Arc::new(cb));
    }

    pub fn notify(&self, message: &str) {
        {
            let mut state = self.state.lock().unwrap();
            state.expire();
            state.view.text = message.to_string();

            if !state.view.visible {
                if let Some(pending) = state.dismiss.take() {
                    pending.abort();
                }
                state.view.visible = true;
                state.deadline = Some(Instant::now() + self.dismiss_after);
                state.timers_scheduled += 1;
                state.dismiss = self.schedule_dismiss();
            }
        }
        debug!("Notification: {}", message);

        let observers = self.observers.lock().unwrap().clone();
        for cb in observers {
            cb(message);
        }
    }

    /// Spawn the dismiss task when a runtime is available.
    fn schedule_dismiss(&self) -> Option<JoinHandle<()>> {
        let handle = Handle::try_current().ok()?;
        let state = Arc::clone(&self.state);
        let after = self.dismiss_after;
        Some(handle.spawn(async move {
            tokio::time::sleep(after).await;
            let mut state = state.lock().unwrap();
            state.view.visible = false;
            state.deadline = None;
            state.dismiss = None;
        }))
    }

    pub fn snapshot(&self) -> NotificationView {
        let mut state = self.state.lock().unwrap();
        state.expire();
        state.view.clone()
    }

    pub fn is_visible(&self) -> bool {
        self.snapshot().visible
    }

    /// Dismiss timers scheduled since creation.
    pub fn timers_scheduled(&self) -> u64 {
        self.state.lock().unwrap().timers_scheduled
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_DISMISS_AFTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn shows_message_then_dismisses() {
        let n = Notifier::default();
        n.notify("Custom resolution set");
        assert_eq!(
            n.snapshot(),
            NotificationView { text: "Custom resolution set".into(), visible: true }
        );

        tokio::time::sleep(Duration::from_millis(2999)).await;
        assert!(n.is_visible());
        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(!n.is_visible());
        // Text stays behind for the hide transition.
        assert_eq!(n.snapshot().text, "Custom resolution set");
    }

    #[tokio::test(start_paused = true)]
    async fn replacement_keeps_single_timer_and_deadline() {
        let n = Notifier::default();
        n.notify("A");
        tokio::time::sleep(Duration::from_millis(2000)).await;
        n.notify("B");

        assert_eq!(n.snapshot(), NotificationView { text: "B".into(), visible: true });
        assert_eq!(n.timers_scheduled(), 1);

        // The original deadline still applies.
        tokio::time::sleep(Duration::from_millis(1001)).await;
        assert!(!n.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn new_message_after_dismiss_schedules_fresh_timer() {
        let n = Notifier::new(Duration::from_millis(500));
        n.notify("first");
        tokio::time::sleep(Duration::from_millis(501)).await;
        assert!(!n.is_visible());

        n.notify("second");
        assert!(n.is_visible());
        assert_eq!(n.timers_scheduled(), 2);
        tokio::time::sleep(Duration::from_millis(499)).await;
        assert!(n.is_visible());
    }

    #[test]
    fn works_without_a_runtime() {
        let n = Notifier::new(Duration::from_millis(20));
        n.notify("A");
        n.notify("B");
        assert_eq!(n.snapshot(), NotificationView { text: "B".into(), visible: true });
        assert_eq!(n.timers_scheduled(), 1);

        std::thread::sleep(Duration::from_millis(40));
        assert!(!n.is_visible());
        n.notify("C");
        assert!(n.is_visible());
        assert_eq!(n.timers_scheduled(), 2);
    }

    #[tokio::test]
    async fn observers_receive_every_message() {
        let n = Notifier::default();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        n.on_message(move |m| sink.lock().unwrap().push(m.to_string()));
        n.notify("one");
        n.notify("two");
        assert_eq!(*seen.lock().unwrap(), ["one", "two"]);
    }
}
