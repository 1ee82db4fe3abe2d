use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use diesel::prelude::*;

use crate::domain::location::{
    ActiveLocation as DomainActiveLocation, Location as DomainLocation,
    NewActiveLocation as DomainNewActiveLocation, NewLocation as DomainNewLocation,
    weekdays_from_csv, weekdays_to_csv,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::locations)]
pub struct Location {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::locations)]
pub struct NewLocation<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::active_locations)]
#[diesel(belongs_to(Location, foreign_key = location_id))]
pub struct ActiveLocation {
    pub id: i32,
    pub location_id: i32,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    pub weekdays: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::active_locations)]
pub struct NewActiveLocation {
    pub location_id: i32,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    pub weekdays: String,
    pub updated_at: NaiveDateTime,
}

impl From<Location> for DomainLocation {
    fn from(value: Location) -> Self {
        Self {
            id: value.id,
            name: value.name,
            address: value.address,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewLocation> for NewLocation<'a> {
    fn from(value: &'a DomainNewLocation) -> Self {
        Self {
            name: value.name.as_str(),
            address: value.address.as_str(),
            updated_at: value.updated_at,
        }
    }
}

impl From<ActiveLocation> for DomainActiveLocation {
    fn from(value: ActiveLocation) -> Self {
        Self {
            id: value.id,
            location_id: value.location_id,
            start_date: value.start_date,
            end_date: value.end_date,
            open_time: value.open_time,
            close_time: value.close_time,
            weekdays: weekdays_from_csv(&value.weekdays),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<&DomainNewActiveLocation> for NewActiveLocation {
    fn from(value: &DomainNewActiveLocation) -> Self {
        Self {
            location_id: value.location_id,
            start_date: value.start_date,
            end_date: value.end_date,
            open_time: value.open_time,
            close_time: value.close_time,
            weekdays: weekdays_to_csv(&value.weekdays),
            updated_at: value.updated_at,
        }
    }
}
