use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::notification::{
    NewNotification as DomainNewNotification, Notification as DomainNotification,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::notifications)]
pub struct Notification {
    pub id: i32,
    pub staff_id: i32,
    pub message: String,
    pub is_read: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::notifications)]
pub struct NewNotification<'a> {
    pub staff_id: i32,
    pub message: &'a str,
}

impl From<Notification> for DomainNotification {
    fn from(value: Notification) -> Self {
        Self {
            id: value.id,
            staff_id: value.staff_id,
            message: value.message,
            is_read: value.is_read,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewNotification> for NewNotification<'a> {
    fn from(value: &'a DomainNewNotification) -> Self {
        Self {
            staff_id: value.staff_id,
            message: value.message.as_str(),
        }
    }
}
