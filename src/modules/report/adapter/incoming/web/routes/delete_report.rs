use actix_web::{delete, web, Responder};
use uuid::Uuid;

use super::map_report_error;
use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/reports/{id}")]
pub async fn delete_report_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data.report_service.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_report_error(err),
    }
}
