use diesel::prelude::*;

use crate::domain::notification::{
    NewNotification as DomainNewNotification, Notification as DomainNotification,
};
use crate::models::notification::{
    NewNotification as DbNewNotification, Notification as DbNotification,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, NotificationReader, NotificationWriter};

impl NotificationReader for DieselRepository {
    fn list_notifications(
        &self,
        staff_id: i32,
        unread_only: bool,
    ) -> RepositoryResult<Vec<DomainNotification>> {
        use crate::schema::notifications;

        let mut conn = self.conn()?;

        let mut query = notifications::table
            .filter(notifications::staff_id.eq(staff_id))
            .into_boxed::<diesel::sqlite::Sqlite>();
        if unread_only {
            query = query.filter(notifications::is_read.eq(false));
        }

        let rows = query
            .order(notifications::created_at.desc())
            .load::<DbNotification>(&mut conn)?;

        Ok(rows.into_iter().map(DomainNotification::from).collect())
    }
}

impl NotificationWriter for DieselRepository {
    fn create_notifications(
        &self,
        new_notifications: &[DomainNewNotification],
    ) -> RepositoryResult<usize> {
        use crate::schema::notifications;

        if new_notifications.is_empty() {
            return Ok(0);
        }

        let mut conn = self.conn()?;
        let payload: Vec<DbNewNotification> =
            new_notifications.iter().map(DbNewNotification::from).collect();

        Ok(diesel::insert_into(notifications::table)
            .values(&payload)
            .execute(&mut conn)?)
    }

    fn mark_notification_read(&self, notification_id: i32, staff_id: i32) -> RepositoryResult<()> {
        use crate::schema::notifications;

        let mut conn = self.conn()?;
        let updated = diesel::update(
            notifications::table
                .filter(notifications::id.eq(notification_id))
                .filter(notifications::staff_id.eq(staff_id)),
        )
        .set(notifications::is_read.eq(true))
        .execute(&mut conn)?;

        if updated == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    fn mark_all_notifications_read(&self, staff_id: i32) -> RepositoryResult<usize> {
        use crate::schema::notifications;

        let mut conn = self.conn()?;
        Ok(diesel::update(
            notifications::table
                .filter(notifications::staff_id.eq(staff_id))
                .filter(notifications::is_read.eq(false)),
        )
        .set(notifications::is_read.eq(true))
        .execute(&mut conn)?)
    }
}
