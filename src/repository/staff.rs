use chrono::Weekday;
use diesel::prelude::*;

use crate::domain::staff::{
    NewShift as DomainNewShift, NewStaff as DomainNewStaff, Shift as DomainShift,
    Staff as DomainStaff, StaffRole,
};
use crate::models::staff::{
    NewShift as DbNewShift, NewStaff as DbNewStaff, Shift as DbShift, Staff as DbStaff,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, StaffReader, StaffWriter};

impl StaffReader for DieselRepository {
    fn get_staff_by_id(&self, id: i32) -> RepositoryResult<Option<DomainStaff>> {
        use crate::schema::staff;

        let mut conn = self.conn()?;
        let member = staff::table
            .filter(staff::id.eq(id))
            .first::<DbStaff>(&mut conn)
            .optional()?;

        Ok(member.map(DomainStaff::from))
    }

    fn get_staff_by_email(&self, email: &str) -> RepositoryResult<Option<DomainStaff>> {
        use crate::schema::staff;

        let mut conn = self.conn()?;
        let member = staff::table
            .filter(staff::email.eq(email))
            .first::<DbStaff>(&mut conn)
            .optional()?;

        Ok(member.map(DomainStaff::from))
    }

    fn list_staff(&self) -> RepositoryResult<Vec<DomainStaff>> {
        use crate::schema::staff;

        let mut conn = self.conn()?;
        let members = staff::table.order(staff::name.asc()).load::<DbStaff>(&mut conn)?;

        Ok(members.into_iter().map(DomainStaff::from).collect())
    }

    fn list_managers(&self) -> RepositoryResult<Vec<DomainStaff>> {
        use crate::schema::staff;

        let role: &'static str = StaffRole::Manager.into();

        let mut conn = self.conn()?;
        let members = staff::table
            .filter(staff::role.eq(role))
            .order(staff::name.asc())
            .load::<DbStaff>(&mut conn)?;

        Ok(members.into_iter().map(DomainStaff::from).collect())
    }

    fn find_staff_on_shift(
        &self,
        location_id: i32,
        weekday: Weekday,
    ) -> RepositoryResult<Option<DomainStaff>> {
        use crate::schema::{shifts, staff};

        let mut conn = self.conn()?;
        let member = shifts::table
            .inner_join(staff::table)
            .filter(shifts::location_id.eq(location_id))
            .filter(shifts::weekday.eq(weekday.to_string()))
            .order(shifts::id.asc())
            .select(DbStaff::as_select())
            .first::<DbStaff>(&mut conn)
            .optional()?;

        Ok(member.map(DomainStaff::from))
    }

    fn list_shifts(&self, location_id: Option<i32>) -> RepositoryResult<Vec<DomainShift>> {
        use crate::schema::shifts;

        let mut conn = self.conn()?;

        let mut query = shifts::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(location) = location_id {
            query = query.filter(shifts::location_id.eq(location));
        }

        let rows = query.order(shifts::id.asc()).load::<DbShift>(&mut conn)?;

        // Rows with a weekday the domain cannot parse are data corruption.
        rows.into_iter()
            .map(|row| {
                DomainShift::try_from(row)
                    .map_err(|_| RepositoryError::Conflict("invalid weekday in shift row".into()))
            })
            .collect()
    }
}

impl StaffWriter for DieselRepository {
    fn create_staff(&self, new_staff: &DomainNewStaff) -> RepositoryResult<DomainStaff> {
        use crate::schema::staff;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(staff::table)
            .values(&DbNewStaff::from(new_staff))
            .get_result::<DbStaff>(&mut conn)?;

        Ok(created.into())
    }

    fn create_shift(&self, new_shift: &DomainNewShift) -> RepositoryResult<DomainShift> {
        use crate::schema::shifts;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(shifts::table)
            .values(&DbNewShift::from(new_shift))
            .get_result::<DbShift>(&mut conn)?;

        DomainShift::try_from(created)
            .map_err(|_| RepositoryError::Conflict("invalid weekday in shift row".into()))
    }

    fn delete_shift(&self, shift_id: i32) -> RepositoryResult<()> {
        use crate::schema::shifts;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(shifts::table.filter(shifts::id.eq(shift_id)))
            .execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
