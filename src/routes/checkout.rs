use actix_web::{HttpResponse, post, web};

use crate::config::ServerConfig;
use crate::forms::checkout::CheckoutForm;
use crate::repository::DieselRepository;
use crate::services::{ServiceError, checkout};

#[post("/checkout/create-order")]
pub async fn create_order(
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
    form: web::Json<CheckoutForm>,
) -> Result<HttpResponse, ServiceError> {
    let order = checkout::create_order(repo.get_ref(), config.tax_rate_bp, form.into_inner())?;
    Ok(HttpResponse::Created().json(order))
}
