use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A message shown to a staff member (new online order, low stock).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Notification {
    /// Unique identifier of the notification.
    pub id: i32,
    /// Staff member the notification is addressed to.
    pub staff_id: i32,
    /// Message text.
    pub message: String,
    /// Whether the staff member has read the notification.
    pub is_read: bool,
    /// Timestamp for when the notification was created.
    pub created_at: NaiveDateTime,
}

/// Payload required to insert a new notification.
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub staff_id: i32,
    pub message: String,
}

impl NewNotification {
    pub fn new(staff_id: i32, message: impl Into<String>) -> Self {
        Self {
            staff_id,
            message: message.into(),
        }
    }
}
