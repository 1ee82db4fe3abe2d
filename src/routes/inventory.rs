use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::forms::inventory::{AddInventoryItemForm, EditInventoryItemForm};
use crate::repository::DieselRepository;
use crate::services::inventory::InventoryQuery;
use crate::services::{ServiceError, inventory};

#[get("/inventory")]
pub async fn list_inventory(
    params: web::Query<InventoryQuery>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let page = inventory::list_inventory(repo.get_ref(), params.into_inner())?;
    Ok(HttpResponse::Ok().json(page))
}

#[get("/inventory/{item_id}")]
pub async fn get_inventory_item(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let item = inventory::get_inventory_item(repo.get_ref(), path.into_inner())?;
    Ok(HttpResponse::Ok().json(item))
}

#[post("/inventory")]
pub async fn add_inventory_item(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddInventoryItemForm>,
) -> Result<HttpResponse, ServiceError> {
    let item = inventory::create_inventory_item(repo.get_ref(), form.into_inner())?;
    Ok(HttpResponse::Created().json(item))
}

#[put("/inventory/{item_id}")]
pub async fn edit_inventory_item(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditInventoryItemForm>,
) -> Result<HttpResponse, ServiceError> {
    let item = inventory::update_inventory_item(repo.get_ref(), path.into_inner(), form.into_inner())?;
    Ok(HttpResponse::Ok().json(item))
}

#[delete("/inventory/{item_id}")]
pub async fn delete_inventory_item(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    inventory::delete_inventory_item(repo.get_ref(), path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
