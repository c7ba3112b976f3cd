use actix_web::{put, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use super::map_country_error;
use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
struct UpdateCountryRequest {
    pub name: String,
}

#[put("/api/countries/{id}")]
pub async fn update_country_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateCountryRequest>,
) -> impl Responder {
    let id = path.into_inner();

    match data.country_service.update(id, payload.name.clone()).await {
        Ok(country) => ApiResponse::success(country),
        Err(err) => map_country_error(err),
    }
}
