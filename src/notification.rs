use std::time::Duration;
use tokio::time::Instant;

/// One-shot success toast with a passive auto-hide timer.
///
/// Nothing is scheduled; visibility is checked against the clock on read, so a
/// paused tokio clock in tests controls it directly.
#[derive(Debug, Clone)]
pub struct Notification {
    message: String,
    shown_at: Instant,
    auto_hide: Duration,
    dismissed: bool,
}

impl Notification {
    pub fn show(message: impl Into<String>, auto_hide: Duration) -> Self {
        Self {
            message: message.into(),
            shown_at: Instant::now(),
            auto_hide,
            dismissed: false,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible_at(Instant::now())
    }

    pub fn is_visible_at(&self, now: Instant) -> bool {
        !self.dismissed && now.saturating_duration_since(self.shown_at) < self.auto_hide
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_until_deadline() {
        let notification = Notification::show("done", Duration::from_millis(3000));
        let start = notification.shown_at;
        assert!(notification.is_visible_at(start));
        assert!(notification.is_visible_at(start + Duration::from_millis(2999)));
        assert!(!notification.is_visible_at(start + Duration::from_millis(3000)));
    }

    #[test]
    fn test_dismiss_hides_immediately() {
        let mut notification = Notification::show("done", Duration::from_secs(60));
        notification.dismiss();
        assert!(!notification.is_visible());
        assert_eq!(notification.message(), "done");
    }

    #[test]
    fn test_zero_interval_never_shows() {
        let notification = Notification::show("done", Duration::ZERO);
        assert!(!notification.is_visible());
    }
}
