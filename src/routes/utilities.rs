use actix_web::{HttpResponse, delete, get, post, web};

use crate::forms::utilities::AddUtilityBillForm;
use crate::repository::DieselRepository;
use crate::services::utilities::UtilitiesQuery;
use crate::services::{ServiceError, utilities};

#[get("/utilities")]
pub async fn list_utility_bills(
    params: web::Query<UtilitiesQuery>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let bills = utilities::list_utility_bills(repo.get_ref(), params.into_inner())?;
    Ok(HttpResponse::Ok().json(bills))
}

#[post("/utilities")]
pub async fn add_utility_bill(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddUtilityBillForm>,
) -> Result<HttpResponse, ServiceError> {
    let bill = utilities::create_utility_bill(repo.get_ref(), form.into_inner())?;
    Ok(HttpResponse::Created().json(bill))
}

#[delete("/utilities/{bill_id}")]
pub async fn delete_utility_bill(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    utilities::delete_utility_bill(repo.get_ref(), path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
