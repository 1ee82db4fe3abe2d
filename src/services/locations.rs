use serde::Serialize;

use crate::domain::location::{ActiveLocation, Location};
use crate::domain::staff::Shift;
use crate::forms::locations::{AddActiveLocationForm, AddLocationForm, AddShiftForm};
use crate::repository::{LocationReader, LocationWriter, StaffReader, StaffWriter};
use crate::services::{ServiceError, ServiceResult};

/// The operating window in effect today, if any, with its location.
#[derive(Debug, Serialize)]
pub struct TodaysLocation {
    pub location: Location,
    pub active: ActiveLocation,
    /// Whether the window is open at the current wall-clock time.
    pub is_open_now: bool,
}

pub fn list_locations<R>(repo: &R) -> ServiceResult<Vec<Location>>
where
    R: LocationReader + ?Sized,
{
    Ok(repo.list_locations()?)
}

pub fn create_location<R>(repo: &R, form: AddLocationForm) -> ServiceResult<Location>
where
    R: LocationWriter + ?Sized,
{
    let new_location = form
        .into_new_location()
        .map_err(|err| ServiceError::Form(err.to_string()))?;
    Ok(repo.create_location(&new_location)?)
}

pub fn list_active_locations<R>(repo: &R) -> ServiceResult<Vec<ActiveLocation>>
where
    R: LocationReader + ?Sized,
{
    Ok(repo.list_active_locations()?)
}

/// Schedules an operating window for an existing location.
pub fn create_active_location<R>(
    repo: &R,
    form: AddActiveLocationForm,
) -> ServiceResult<ActiveLocation>
where
    R: LocationReader + LocationWriter + ?Sized,
{
    let new_active = form
        .into_new_active_location()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if repo.get_location_by_id(new_active.location_id)?.is_none() {
        return Err(ServiceError::NotFound(format!(
            "location {}",
            new_active.location_id
        )));
    }

    Ok(repo.create_active_location(&new_active)?)
}

pub fn delete_active_location<R>(repo: &R, active_location_id: i32) -> ServiceResult<()>
where
    R: LocationWriter + ?Sized,
{
    Ok(repo.delete_active_location(active_location_id)?)
}

/// Resolves the window operating today, together with an open-right-now flag.
pub fn todays_location<R>(repo: &R) -> ServiceResult<Option<TodaysLocation>>
where
    R: LocationReader + ?Sized,
{
    let now = chrono::Local::now().naive_local();
    let Some((active, location)) = repo.get_active_location_for(now.date())? else {
        return Ok(None);
    };
    let is_open_now = active.is_open_at(now);
    Ok(Some(TodaysLocation {
        location,
        active,
        is_open_now,
    }))
}

pub fn list_shifts<R>(repo: &R, location_id: Option<i32>) -> ServiceResult<Vec<Shift>>
where
    R: StaffReader + ?Sized,
{
    Ok(repo.list_shifts(location_id)?)
}

/// Assigns a staff member to a recurring weekday shift at a location.
pub fn create_shift<R>(repo: &R, form: AddShiftForm) -> ServiceResult<Shift>
where
    R: StaffReader + LocationReader + StaffWriter + ?Sized,
{
    let new_shift = form.into_new_shift();

    if repo.get_staff_by_id(new_shift.staff_id)?.is_none() {
        return Err(ServiceError::NotFound(format!(
            "staff member {}",
            new_shift.staff_id
        )));
    }
    if repo.get_location_by_id(new_shift.location_id)?.is_none() {
        return Err(ServiceError::NotFound(format!(
            "location {}",
            new_shift.location_id
        )));
    }

    Ok(repo.create_shift(&new_shift)?)
}

pub fn delete_shift<R>(repo: &R, shift_id: i32) -> ServiceResult<()>
where
    R: StaffWriter + ?Sized,
{
    Ok(repo.delete_shift(shift_id)?)
}
