use std::time::Duration;

use tokio::time::Instant;
use tracing::debug;


// A visible notification and the moment it goes away
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

// Depth-one toast queue: a new message replaces the current one
#[derive(Debug, Clone)]
pub struct ToastSlot {
    duration: Duration,
    current: Option<Toast>,
}


impl ToastSlot {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            current: None,
        }
    }

    // Show a message for the full duration, replacing whatever was visible
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        let message = message.into();
        debug!(%message, "toast");
        self.current = Some(Toast {
            message,
            expires_at: now + self.duration,
        });
    }

    // Hide the toast if its own deadline has passed
    pub fn expire(&mut self, now: Instant) -> bool {
        match &self.current {
            Some(toast) if toast.expires_at <= now => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|t| t.message.as_str())
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.current.as_ref().map(|t| t.expires_at)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    const LIFETIME: Duration = Duration::from_secs(3);

    #[test]
    fn hides_after_lifetime() {
        let start = Instant::now();
        let mut slot = ToastSlot::new(LIFETIME);
        slot.show("Fries added to cart!", start);

        assert!(!slot.expire(start + Duration::from_millis(2999)));
        assert_eq!(slot.message(), Some("Fries added to cart!"));
        assert!(slot.expire(start + LIFETIME));
        assert_eq!(slot.message(), None);
    }

    #[test]
    fn new_message_replaces_and_extends() {
        let start = Instant::now();
        let mut slot = ToastSlot::new(LIFETIME);
        slot.show("Fries added to cart!", start);
        slot.show("Coke added to cart!", start + Duration::from_secs(2));

        // the first toast's deadline no longer applies
        assert!(!slot.expire(start + LIFETIME));
        assert_eq!(slot.message(), Some("Coke added to cart!"));
        assert_eq!(slot.deadline(), Some(start + Duration::from_secs(5)));
        assert!(slot.expire(start + Duration::from_secs(5)));
    }
}
