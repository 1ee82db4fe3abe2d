use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// A spot the food truck can park and sell at.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Location {
    /// Unique identifier of the location.
    pub id: i32,
    /// Human-readable location name, denormalized onto orders.
    pub name: String,
    /// Street address of the spot.
    pub address: String,
    /// Timestamp for when the record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new location.
#[derive(Debug, Clone)]
pub struct NewLocation {
    pub name: String,
    pub address: String,
    pub updated_at: NaiveDateTime,
}

impl NewLocation {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            updated_at: chrono::Local::now().naive_utc(),
        }
    }
}

/// An operating window: the truck sells at `location_id` on the listed
/// weekdays between `open_time` and `close_time`, from `start_date` until
/// `end_date` (open-ended when `None`).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ActiveLocation {
    /// Unique identifier of the operating window.
    pub id: i32,
    /// Location the window applies to.
    pub location_id: i32,
    /// First date the window is in effect.
    pub start_date: NaiveDate,
    /// Last date the window is in effect, or `None` for an open-ended window.
    pub end_date: Option<NaiveDate>,
    /// Daily opening time.
    pub open_time: NaiveTime,
    /// Daily closing time.
    pub close_time: NaiveTime,
    /// Weekdays the truck operates on.
    pub weekdays: Vec<Weekday>,
    /// Timestamp for when the record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the record.
    pub updated_at: NaiveDateTime,
}

impl ActiveLocation {
    /// Whether the truck operates at this location on `date`: the weekday must
    /// be in the set and the date inside the window's date range.
    pub fn operates_on(&self, date: NaiveDate) -> bool {
        use chrono::Datelike;

        if !self.weekdays.contains(&date.weekday()) {
            return false;
        }
        if date < self.start_date {
            return false;
        }
        match self.end_date {
            Some(end) => date <= end,
            None => true,
        }
    }

    /// Whether the truck is open for business at the given moment.
    pub fn is_open_at(&self, at: NaiveDateTime) -> bool {
        self.operates_on(at.date()) && self.open_time <= at.time() && at.time() < self.close_time
    }
}

/// Payload required to insert a new operating window.
#[derive(Debug, Clone)]
pub struct NewActiveLocation {
    pub location_id: i32,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    pub weekdays: Vec<Weekday>,
    pub updated_at: NaiveDateTime,
}

impl NewActiveLocation {
    /// Build an open-ended operating window starting at `start_date`.
    pub fn new(
        location_id: i32,
        start_date: NaiveDate,
        open_time: NaiveTime,
        close_time: NaiveTime,
        weekdays: Vec<Weekday>,
    ) -> Self {
        Self {
            location_id,
            start_date,
            end_date: None,
            open_time,
            close_time,
            weekdays,
            updated_at: chrono::Local::now().naive_utc(),
        }
    }

    /// Close the window on `end_date`.
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }
}

/// Serialize a weekday set into the stored CSV form, e.g. `Mon,Wed,Fri`.
pub fn weekdays_to_csv(weekdays: &[Weekday]) -> String {
    weekdays
        .iter()
        .map(|day| day.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Parse the stored CSV weekday form, skipping unparseable entries.
pub fn weekdays_from_csv(value: &str) -> Vec<Weekday> {
    value
        .split(',')
        .filter_map(|part| part.trim().parse::<Weekday>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(start: NaiveDate, end: Option<NaiveDate>, weekdays: Vec<Weekday>) -> ActiveLocation {
        let now = chrono::Local::now().naive_utc();
        ActiveLocation {
            id: 1,
            location_id: 1,
            start_date: start,
            end_date: end,
            open_time: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
            close_time: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
            weekdays,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn operates_on_requires_weekday_in_set() {
        let start = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap(); // a Monday
        let w = window(start, None, vec![Weekday::Mon, Weekday::Tue]);

        assert!(w.operates_on(NaiveDate::from_ymd_opt(2026, 8, 10).unwrap())); // Monday
        assert!(!w.operates_on(NaiveDate::from_ymd_opt(2026, 8, 12).unwrap())); // Wednesday
    }

    #[test]
    fn operates_on_rejects_dates_past_the_end() {
        let start = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
        let w = window(start, Some(end), vec![Weekday::Mon]);

        assert!(w.operates_on(end));
        assert!(!w.operates_on(NaiveDate::from_ymd_opt(2026, 8, 17).unwrap()));
    }

    #[test]
    fn operates_on_rejects_dates_before_the_start() {
        let start = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
        let w = window(start, None, vec![Weekday::Mon]);

        assert!(!w.operates_on(NaiveDate::from_ymd_opt(2026, 8, 3).unwrap()));
    }

    #[test]
    fn is_open_at_respects_hours() {
        let start = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
        let w = window(start, None, vec![Weekday::Mon]);
        let monday = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();

        assert!(w.is_open_at(monday.and_hms_opt(12, 30, 0).unwrap()));
        assert!(!w.is_open_at(monday.and_hms_opt(9, 0, 0).unwrap()));
        assert!(!w.is_open_at(monday.and_hms_opt(20, 0, 0).unwrap()));
    }

    #[test]
    fn weekday_csv_round_trips() {
        let days = vec![Weekday::Mon, Weekday::Wed, Weekday::Fri];
        let csv = weekdays_to_csv(&days);
        assert_eq!(csv, "Mon,Wed,Fri");
        assert_eq!(weekdays_from_csv(&csv), days);
    }
}
