use diesel::prelude::*;

use crate::domain::utility::{
    NewUtilityBill as DomainNewUtilityBill, UtilityBill as DomainUtilityBill, UtilityListQuery,
};
use crate::models::utility::{NewUtilityBill as DbNewUtilityBill, UtilityBill as DbUtilityBill};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, UtilityReader, UtilityWriter};

impl UtilityReader for DieselRepository {
    fn list_utility_bills(
        &self,
        query: UtilityListQuery,
    ) -> RepositoryResult<Vec<DomainUtilityBill>> {
        use crate::schema::utility_bills;

        let mut conn = self.conn()?;

        let UtilityListQuery { location_id, from, to } = query;

        let mut bills = utility_bills::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(location) = location_id {
            bills = bills.filter(utility_bills::location_id.eq(location));
        }
        if let Some(from) = from {
            bills = bills.filter(utility_bills::billed_on.ge(from));
        }
        if let Some(to) = to {
            bills = bills.filter(utility_bills::billed_on.le(to));
        }

        let rows = bills
            .order(utility_bills::billed_on.desc())
            .load::<DbUtilityBill>(&mut conn)?;

        Ok(rows.into_iter().map(DomainUtilityBill::from).collect())
    }
}

impl UtilityWriter for DieselRepository {
    fn create_utility_bill(
        &self,
        new_bill: &DomainNewUtilityBill,
    ) -> RepositoryResult<DomainUtilityBill> {
        use crate::schema::utility_bills;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(utility_bills::table)
            .values(&DbNewUtilityBill::from(new_bill))
            .get_result::<DbUtilityBill>(&mut conn)?;

        Ok(created.into())
    }

    fn delete_utility_bill(&self, bill_id: i32) -> RepositoryResult<()> {
        use crate::schema::utility_bills;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(utility_bills::table.filter(utility_bills::id.eq(bill_id)))
            .execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
