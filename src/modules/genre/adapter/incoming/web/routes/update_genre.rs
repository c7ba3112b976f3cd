use actix_web::{put, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use super::map_genre_error;
use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
struct UpdateGenreRequest {
    pub name: String,
}

#[put("/api/genres/{id}")]
pub async fn update_genre_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateGenreRequest>,
) -> impl Responder {
    let id = path.into_inner();

    match data.genre_service.update(id, payload.name.clone()).await {
        Ok(genre) => ApiResponse::success(genre),
        Err(err) => map_genre_error(err),
    }
}
