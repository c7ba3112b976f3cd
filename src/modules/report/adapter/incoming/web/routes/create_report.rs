use actix_web::{post, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use super::map_report_error;
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
struct CreateReportRequest {
    pub movie_id: Uuid,
    pub comment: String,
}

#[post("/api/reports")]
pub async fn create_report_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateReportRequest>,
) -> impl Responder {
    match data
        .report_service
        .create(payload.movie_id, user.user_id, &payload.comment)
        .await
    {
        Ok(report) => ApiResponse::created(report),
        Err(err) => map_report_error(err),
    }
}
