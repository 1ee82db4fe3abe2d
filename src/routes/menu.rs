use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::forms::menu::{AddIngredientForm, AddMenuItemForm, EditMenuItemForm};
use crate::repository::DieselRepository;
use crate::services::menu::MenuItemsQuery;
use crate::services::{ServiceError, menu};

#[get("/menu-items")]
pub async fn list_menu_items(
    params: web::Query<MenuItemsQuery>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let page = menu::list_menu_items(repo.get_ref(), params.into_inner())?;
    Ok(HttpResponse::Ok().json(page))
}

#[get("/menu-items/{item_id}")]
pub async fn get_menu_item(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let item = menu::get_menu_item(repo.get_ref(), path.into_inner())?;
    Ok(HttpResponse::Ok().json(item))
}

#[post("/menu-items")]
pub async fn add_menu_item(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddMenuItemForm>,
) -> Result<HttpResponse, ServiceError> {
    let item = menu::create_menu_item(repo.get_ref(), form.into_inner())?;
    Ok(HttpResponse::Created().json(item))
}

#[put("/menu-items/{item_id}")]
pub async fn edit_menu_item(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditMenuItemForm>,
) -> Result<HttpResponse, ServiceError> {
    let item = menu::update_menu_item(repo.get_ref(), path.into_inner(), form.into_inner())?;
    Ok(HttpResponse::Ok().json(item))
}

#[delete("/menu-items/{item_id}")]
pub async fn delete_menu_item(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    menu::delete_menu_item(repo.get_ref(), path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

#[get("/ingredients")]
pub async fn list_ingredients(
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let ingredients = menu::list_ingredients(repo.get_ref())?;
    Ok(HttpResponse::Ok().json(ingredients))
}

#[post("/ingredients")]
pub async fn add_ingredient(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddIngredientForm>,
) -> Result<HttpResponse, ServiceError> {
    let ingredient = menu::create_ingredient(repo.get_ref(), form.into_inner())?;
    Ok(HttpResponse::Created().json(ingredient))
}
