use actix_web::{HttpResponse, get, web};

use crate::repository::DieselRepository;
use crate::services::{ServiceError, welcome};

#[get("/welcome/welcome-data")]
pub async fn welcome_data(
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let data = welcome::welcome_data(repo.get_ref())?;
    Ok(HttpResponse::Ok().json(data))
}
