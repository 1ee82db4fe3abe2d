use actix_web::{HttpResponse, get, post, web};

use crate::repository::DieselRepository;
use crate::services::orders::{OrdersQuery, UpdateItemStatusForm};
use crate::services::{ServiceError, orders};

#[get("/orders")]
pub async fn list_orders(
    params: web::Query<OrdersQuery>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let page = orders::list_orders(repo.get_ref(), params.into_inner())?;
    Ok(HttpResponse::Ok().json(page))
}

#[get("/orders/{order_id}")]
pub async fn get_order(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let order = orders::get_order(repo.get_ref(), path.into_inner())?;
    Ok(HttpResponse::Ok().json(order))
}

#[post("/orders/{order_id}/items/{item_id}/status")]
pub async fn update_item_status(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
    form: web::Json<UpdateItemStatusForm>,
) -> Result<HttpResponse, ServiceError> {
    let (order_id, item_id) = path.into_inner();
    let item = orders::update_item_status(repo.get_ref(), order_id, item_id, form.into_inner())?;
    Ok(HttpResponse::Ok().json(item))
}
