//! Notification seam.
//!
//! The core only produces [`Notification`] values; a [`Notifier`] decides how
//! they reach the user. [`deliver`] negotiates permission once and falls back
//! to an inline message when notifications are refused.

/// Title/body pair handed to the notification collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Undecided,
    Granted,
    Denied,
}

/// How a notification ended up being surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Shown,
    Fallback,
}

pub trait Notifier {
    fn permission(&self) -> Permission;

    /// Asks the user (or platform) for permission; may block until answered.
    fn request_permission(&mut self) -> Permission;

    fn show(&mut self, notification: &Notification);

    /// Inline surface used when notifications are not permitted.
    fn fallback(&mut self, notification: &Notification);
}

pub fn deliver(notifier: &mut dyn Notifier, notification: &Notification) -> Delivery {
    let mut permission = notifier.permission();
    if permission == Permission::Undecided {
        permission = notifier.request_permission();
    }
    if permission == Permission::Granted {
        notifier.show(notification);
        Delivery::Shown
    } else {
        tracing::debug!(title = %notification.title, "notification permission missing, using fallback");
        notifier.fallback(notification);
        Delivery::Fallback
    }
}
