use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::location::{NewActiveLocation, NewLocation};
use crate::domain::staff::NewShift;
use crate::forms::sanitize_inline_text;

const NAME_MAX_LEN: u64 = 128;
const ADDRESS_MAX_LEN: u64 = 256;

pub type LocationFormResult<T> = Result<T, LocationFormError>;

#[derive(Debug, Error)]
pub enum LocationFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("location name cannot be empty")]
    EmptyName,
    #[error("closing time must be after opening time")]
    ClosedBeforeOpen,
    #[error("an operating window needs at least one weekday")]
    NoWeekdays,
    #[error("the end date cannot precede the start date")]
    EndBeforeStart,
}

/// Payload for `POST /api/locations`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddLocationForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(length(min = 1, max = ADDRESS_MAX_LEN))]
    pub address: String,
}

impl AddLocationForm {
    pub fn into_new_location(self) -> LocationFormResult<NewLocation> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(LocationFormError::EmptyName);
        }

        Ok(NewLocation::new(name, sanitize_inline_text(&self.address)))
    }
}

/// Payload for `POST /api/active-locations`.
#[derive(Debug, Deserialize)]
pub struct AddActiveLocationForm {
    pub location_id: i32,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    pub weekdays: Vec<Weekday>,
}

impl AddActiveLocationForm {
    pub fn into_new_active_location(self) -> LocationFormResult<NewActiveLocation> {
        if self.close_time <= self.open_time {
            return Err(LocationFormError::ClosedBeforeOpen);
        }
        if self.weekdays.is_empty() {
            return Err(LocationFormError::NoWeekdays);
        }
        if let Some(end) = self.end_date
            && end < self.start_date
        {
            return Err(LocationFormError::EndBeforeStart);
        }

        let mut weekdays = self.weekdays;
        weekdays.sort_by_key(|day| day.num_days_from_monday());
        weekdays.dedup();

        let mut new_active = NewActiveLocation::new(
            self.location_id,
            self.start_date,
            self.open_time,
            self.close_time,
            weekdays,
        );
        if let Some(end) = self.end_date {
            new_active = new_active.with_end_date(end);
        }

        Ok(new_active)
    }
}

/// Payload for `POST /api/shifts`.
#[derive(Debug, Deserialize)]
pub struct AddShiftForm {
    pub staff_id: i32,
    pub location_id: i32,
    pub weekday: Weekday,
}

impl AddShiftForm {
    pub fn into_new_shift(self) -> NewShift {
        NewShift::new(self.staff_id, self.location_id, self.weekday)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_location_form_rejects_inverted_hours() {
        let form = AddActiveLocationForm {
            location_id: 1,
            start_date: NaiveDate::from_ymd_opt(2026, 8, 3).unwrap(),
            end_date: None,
            open_time: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
            close_time: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
            weekdays: vec![Weekday::Mon],
        };

        assert!(matches!(
            form.into_new_active_location(),
            Err(LocationFormError::ClosedBeforeOpen)
        ));
    }

    #[test]
    fn active_location_form_rejects_empty_weekdays() {
        let form = AddActiveLocationForm {
            location_id: 1,
            start_date: NaiveDate::from_ymd_opt(2026, 8, 3).unwrap(),
            end_date: None,
            open_time: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
            close_time: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
            weekdays: Vec::new(),
        };

        assert!(matches!(
            form.into_new_active_location(),
            Err(LocationFormError::NoWeekdays)
        ));
    }

    #[test]
    fn active_location_form_drops_repeated_weekdays() {
        let form = AddActiveLocationForm {
            location_id: 1,
            start_date: NaiveDate::from_ymd_opt(2026, 8, 3).unwrap(),
            end_date: None,
            open_time: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
            close_time: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
            weekdays: vec![Weekday::Mon, Weekday::Wed, Weekday::Mon],
        };

        let new_active = form.into_new_active_location().expect("expected success");
        assert_eq!(new_active.weekdays, vec![Weekday::Mon, Weekday::Wed]);
    }

    #[test]
    fn active_location_form_rejects_end_before_start() {
        let form = AddActiveLocationForm {
            location_id: 1,
            start_date: NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(),
            end_date: Some(NaiveDate::from_ymd_opt(2026, 8, 3).unwrap()),
            open_time: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
            close_time: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
            weekdays: vec![Weekday::Mon],
        };

        assert!(matches!(
            form.into_new_active_location(),
            Err(LocationFormError::EndBeforeStart)
        ));
    }
}
