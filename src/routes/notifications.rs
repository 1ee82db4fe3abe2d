use actix_web::{HttpResponse, get, post, web};

use crate::repository::DieselRepository;
use crate::services::notifications::NotificationsQuery;
use crate::services::{ServiceError, notifications};

#[get("/staff/{staff_id}/notifications")]
pub async fn list_notifications(
    path: web::Path<i32>,
    params: web::Query<NotificationsQuery>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let items =
        notifications::list_notifications(repo.get_ref(), path.into_inner(), params.into_inner())?;
    Ok(HttpResponse::Ok().json(items))
}

#[post("/staff/{staff_id}/notifications/{notification_id}/read")]
pub async fn mark_read(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let (staff_id, notification_id) = path.into_inner();
    notifications::mark_read(repo.get_ref(), staff_id, notification_id)?;
    Ok(HttpResponse::NoContent().finish())
}

#[post("/staff/{staff_id}/notifications/read-all")]
pub async fn mark_all_read(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let updated = notifications::mark_all_read(repo.get_ref(), path.into_inner())?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "updated": updated })))
}
