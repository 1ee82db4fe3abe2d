use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::utility::{UtilityBill, UtilityListQuery};
use crate::forms::utilities::AddUtilityBillForm;
use crate::repository::{LocationReader, UtilityReader, UtilityWriter};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by `GET /api/utilities`.
#[derive(Debug, Deserialize, Default)]
pub struct UtilitiesQuery {
    pub location_id: Option<i32>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

pub fn list_utility_bills<R>(repo: &R, query: UtilitiesQuery) -> ServiceResult<Vec<UtilityBill>>
where
    R: UtilityReader + ?Sized,
{
    let mut list_query = UtilityListQuery::new();
    if let Some(location_id) = query.location_id {
        list_query = list_query.location_id(location_id);
    }
    list_query.from = query.from;
    list_query.to = query.to;

    Ok(repo.list_utility_bills(list_query)?)
}

/// Records a utility bill against an existing location.
pub fn create_utility_bill<R>(repo: &R, form: AddUtilityBillForm) -> ServiceResult<UtilityBill>
where
    R: LocationReader + UtilityWriter + ?Sized,
{
    let new_bill = form
        .into_new_utility_bill()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if repo.get_location_by_id(new_bill.location_id)?.is_none() {
        return Err(ServiceError::NotFound(format!(
            "location {}",
            new_bill.location_id
        )));
    }

    Ok(repo.create_utility_bill(&new_bill)?)
}

pub fn delete_utility_bill<R>(repo: &R, bill_id: i32) -> ServiceResult<()>
where
    R: UtilityWriter + ?Sized,
{
    Ok(repo.delete_utility_bill(bill_id)?)
}
