use actix_web::{HttpResponse, get, web};

use crate::repository::DieselRepository;
use crate::services::reports::ReportQuery;
use crate::services::{ServiceError, reports};

#[get("/reports/location-profit")]
pub async fn location_profit(
    params: web::Query<ReportQuery>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let rows = reports::location_profit(repo.get_ref(), params.into_inner())?;
    Ok(HttpResponse::Ok().json(rows))
}

#[get("/reports/item-popularity")]
pub async fn item_popularity(
    params: web::Query<ReportQuery>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let rows = reports::item_popularity(repo.get_ref(), params.into_inner())?;
    Ok(HttpResponse::Ok().json(rows))
}

#[get("/reports/employee-performance")]
pub async fn employee_performance(
    params: web::Query<ReportQuery>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let rows = reports::employee_performance(repo.get_ref(), params.into_inner())?;
    Ok(HttpResponse::Ok().json(rows))
}
