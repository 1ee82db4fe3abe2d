use actix_web::{HttpResponse, get, post, web};

use crate::forms::auth::{AddStaffForm, LoginForm, RegisterCustomerForm};
use crate::repository::{DieselRepository, StaffReader};
use crate::services::{ServiceError, auth};

#[post("/auth/customer-register")]
pub async fn customer_register(
    repo: web::Data<DieselRepository>,
    form: web::Json<RegisterCustomerForm>,
) -> Result<HttpResponse, ServiceError> {
    let customer = auth::register_customer(repo.get_ref(), form.into_inner())?;
    Ok(HttpResponse::Created().json(customer))
}

#[post("/auth/customer-login")]
pub async fn customer_login(
    repo: web::Data<DieselRepository>,
    form: web::Json<LoginForm>,
) -> Result<HttpResponse, ServiceError> {
    let customer = auth::login_customer(repo.get_ref(), form.into_inner())?;
    Ok(HttpResponse::Ok().json(customer))
}

#[post("/auth/staff-login")]
pub async fn staff_login(
    repo: web::Data<DieselRepository>,
    form: web::Json<LoginForm>,
) -> Result<HttpResponse, ServiceError> {
    let member = auth::login_staff(repo.get_ref(), form.into_inner())?;
    Ok(HttpResponse::Ok().json(member))
}

#[get("/staff")]
pub async fn list_staff(
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let members = repo.get_ref().list_staff()?;
    Ok(HttpResponse::Ok().json(members))
}

#[post("/staff")]
pub async fn add_staff(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddStaffForm>,
) -> Result<HttpResponse, ServiceError> {
    let member = auth::create_staff(repo.get_ref(), form.into_inner())?;
    Ok(HttpResponse::Created().json(member))
}
