use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::location::{
    ActiveLocation as DomainActiveLocation, Location as DomainLocation,
    NewActiveLocation as DomainNewActiveLocation, NewLocation as DomainNewLocation,
};
use crate::models::location::{
    ActiveLocation as DbActiveLocation, Location as DbLocation,
    NewActiveLocation as DbNewActiveLocation, NewLocation as DbNewLocation,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, LocationReader, LocationWriter};

impl LocationReader for DieselRepository {
    fn get_location_by_id(&self, id: i32) -> RepositoryResult<Option<DomainLocation>> {
        use crate::schema::locations;

        let mut conn = self.conn()?;
        let location = locations::table
            .filter(locations::id.eq(id))
            .first::<DbLocation>(&mut conn)
            .optional()?;

        Ok(location.map(DomainLocation::from))
    }

    fn list_locations(&self) -> RepositoryResult<Vec<DomainLocation>> {
        use crate::schema::locations;

        let mut conn = self.conn()?;
        let rows = locations::table
            .order(locations::name.asc())
            .load::<DbLocation>(&mut conn)?;

        Ok(rows.into_iter().map(DomainLocation::from).collect())
    }

    fn list_active_locations(&self) -> RepositoryResult<Vec<DomainActiveLocation>> {
        use crate::schema::active_locations;

        let mut conn = self.conn()?;
        let rows = active_locations::table
            .order(active_locations::start_date.desc())
            .load::<DbActiveLocation>(&mut conn)?;

        Ok(rows.into_iter().map(DomainActiveLocation::from).collect())
    }

    fn get_active_location_for(
        &self,
        date: NaiveDate,
    ) -> RepositoryResult<Option<(DomainActiveLocation, DomainLocation)>> {
        use crate::schema::{active_locations, locations};

        let mut conn = self.conn()?;

        // Date-range filtering happens in SQL; the weekday-set check lives in
        // the domain predicate, so candidates are narrowed here and decided
        // there.
        let candidates = active_locations::table
            .inner_join(locations::table)
            .filter(active_locations::start_date.le(date))
            .filter(
                active_locations::end_date
                    .is_null()
                    .or(active_locations::end_date.ge(date)),
            )
            .order(active_locations::start_date.desc())
            .load::<(DbActiveLocation, DbLocation)>(&mut conn)?;

        for (window, location) in candidates {
            let window = DomainActiveLocation::from(window);
            if window.operates_on(date) {
                return Ok(Some((window, location.into())));
            }
        }

        Ok(None)
    }
}

impl LocationWriter for DieselRepository {
    fn create_location(&self, new_location: &DomainNewLocation) -> RepositoryResult<DomainLocation> {
        use crate::schema::locations;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(locations::table)
            .values(&DbNewLocation::from(new_location))
            .get_result::<DbLocation>(&mut conn)?;

        Ok(created.into())
    }

    fn create_active_location(
        &self,
        new_active: &DomainNewActiveLocation,
    ) -> RepositoryResult<DomainActiveLocation> {
        use crate::schema::active_locations;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(active_locations::table)
            .values(&DbNewActiveLocation::from(new_active))
            .get_result::<DbActiveLocation>(&mut conn)?;

        Ok(created.into())
    }

    fn delete_active_location(&self, active_location_id: i32) -> RepositoryResult<()> {
        use crate::schema::active_locations;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(
            active_locations::table.filter(active_locations::id.eq(active_location_id)),
        )
        .execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
