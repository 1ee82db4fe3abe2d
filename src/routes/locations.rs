use actix_web::{HttpResponse, delete, get, post, web};
use serde::Deserialize;

use crate::forms::locations::{AddActiveLocationForm, AddLocationForm, AddShiftForm};
use crate::repository::DieselRepository;
use crate::services::{ServiceError, locations};

#[derive(Debug, Deserialize)]
pub struct ShiftsQuery {
    pub location_id: Option<i32>,
}

#[get("/locations")]
pub async fn list_locations(
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let all = locations::list_locations(repo.get_ref())?;
    Ok(HttpResponse::Ok().json(all))
}

#[post("/locations")]
pub async fn add_location(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddLocationForm>,
) -> Result<HttpResponse, ServiceError> {
    let location = locations::create_location(repo.get_ref(), form.into_inner())?;
    Ok(HttpResponse::Created().json(location))
}

#[get("/active-locations")]
pub async fn list_active_locations(
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let windows = locations::list_active_locations(repo.get_ref())?;
    Ok(HttpResponse::Ok().json(windows))
}

#[post("/active-locations")]
pub async fn add_active_location(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddActiveLocationForm>,
) -> Result<HttpResponse, ServiceError> {
    let window = locations::create_active_location(repo.get_ref(), form.into_inner())?;
    Ok(HttpResponse::Created().json(window))
}

#[delete("/active-locations/{active_location_id}")]
pub async fn delete_active_location(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    locations::delete_active_location(repo.get_ref(), path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

#[get("/active-locations/today")]
pub async fn todays_location(
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let resolved = locations::todays_location(repo.get_ref())?;
    Ok(HttpResponse::Ok().json(resolved))
}

#[get("/shifts")]
pub async fn list_shifts(
    params: web::Query<ShiftsQuery>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let shifts = locations::list_shifts(repo.get_ref(), params.location_id)?;
    Ok(HttpResponse::Ok().json(shifts))
}

#[post("/shifts")]
pub async fn add_shift(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddShiftForm>,
) -> Result<HttpResponse, ServiceError> {
    let shift = locations::create_shift(repo.get_ref(), form.into_inner())?;
    Ok(HttpResponse::Created().json(shift))
}

#[delete("/shifts/{shift_id}")]
pub async fn delete_shift(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    locations::delete_shift(repo.get_ref(), path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
