use serde::Deserialize;

use crate::domain::notification::Notification;
use crate::repository::{NotificationReader, NotificationWriter};
use crate::services::ServiceResult;

/// Query parameters accepted by `GET /api/staff/{id}/notifications`.
#[derive(Debug, Deserialize, Default)]
pub struct NotificationsQuery {
    #[serde(default)]
    pub unread_only: bool,
}

pub fn list_notifications<R>(
    repo: &R,
    staff_id: i32,
    query: NotificationsQuery,
) -> ServiceResult<Vec<Notification>>
where
    R: NotificationReader + ?Sized,
{
    Ok(repo.list_notifications(staff_id, query.unread_only)?)
}

/// Marks one notification as read. Scoped by staff member so one member
/// cannot clear another's notifications.
pub fn mark_read<R>(repo: &R, staff_id: i32, notification_id: i32) -> ServiceResult<()>
where
    R: NotificationWriter + ?Sized,
{
    Ok(repo.mark_notification_read(notification_id, staff_id)?)
}

pub fn mark_all_read<R>(repo: &R, staff_id: i32) -> ServiceResult<usize>
where
    R: NotificationWriter + ?Sized,
{
    Ok(repo.mark_all_notifications_read(staff_id)?)
}
