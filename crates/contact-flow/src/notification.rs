//! Notification Banner
//!
//! A single dismissible status banner.

/// Banner shown after a successful send
pub const SENT_TEXT: &str = "Message sent successfully!";

/// Banner that replaces [`SENT_TEXT`] once the follow-up delay elapses
pub const FOLLOW_UP_TEXT: &str = "I didn't receive your message";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Danger => "danger",
        }
    }

    /// Short badge text shown next to the message
    pub fn label(&self) -> &'static str {
        match self {
            AlertKind::Success => "Success",
            AlertKind::Danger => "Failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub text: String,
    pub kind: AlertKind,
}

impl Alert {
    pub fn new(text: impl Into<String>, kind: AlertKind) -> Self {
        Self { text: text.into(), kind }
    }

    pub fn sent() -> Self {
        Self::new(SENT_TEXT, AlertKind::Success)
    }

    pub fn follow_up() -> Self {
        Self::new(FOLLOW_UP_TEXT, AlertKind::Danger)
    }
}

/// Holds the visible alert, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    current: Option<Alert>,
}

impl Notification {
    /// Show `alert`, replacing whatever is visible
    pub fn show(&mut self, alert: Alert) {
        self.current = Some(alert);
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Alert> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_replaces_and_dismiss_hides() {
        let mut notification = Notification::default();
        assert!(!notification.is_visible());

        notification.show(Alert::sent());
        notification.show(Alert::follow_up());
        let alert = notification.current().unwrap();
        assert_eq!(alert.kind, AlertKind::Danger);
        assert_eq!(alert.text, FOLLOW_UP_TEXT);

        notification.dismiss();
        assert_eq!(notification.current(), None);
    }
}
