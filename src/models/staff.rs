use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::staff::{
    NewShift as DomainNewShift, NewStaff as DomainNewStaff, Shift as DomainShift,
    Staff as DomainStaff,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::staff)]
pub struct Staff {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub password_hash: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::staff)]
pub struct NewStaff<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub role: &'a str,
    pub password_hash: &'a str,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::shifts)]
#[diesel(belongs_to(Staff, foreign_key = staff_id))]
pub struct Shift {
    pub id: i32,
    pub staff_id: i32,
    pub location_id: i32,
    pub weekday: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::shifts)]
pub struct NewShift {
    pub staff_id: i32,
    pub location_id: i32,
    pub weekday: String,
}

impl From<Staff> for DomainStaff {
    fn from(value: Staff) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            phone: value.phone,
            role: value.role.as_str().into(),
            password_hash: value.password_hash,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewStaff> for NewStaff<'a> {
    fn from(value: &'a DomainNewStaff) -> Self {
        Self {
            name: value.name.as_str(),
            email: value.email.as_str(),
            phone: value.phone.as_str(),
            role: value.role.into(),
            password_hash: value.password_hash.as_str(),
            updated_at: value.updated_at,
        }
    }
}

impl TryFrom<Shift> for DomainShift {
    type Error = chrono::ParseWeekdayError;

    fn try_from(value: Shift) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id,
            staff_id: value.staff_id,
            location_id: value.location_id,
            weekday: value.weekday.parse()?,
            created_at: value.created_at,
        })
    }
}

impl From<&DomainNewShift> for NewShift {
    fn from(value: &DomainNewShift) -> Self {
        Self {
            staff_id: value.staff_id,
            location_id: value.location_id,
            weekday: value.weekday.to_string(),
        }
    }
}
