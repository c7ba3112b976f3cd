use actix_web::{post, web, Responder};
use serde::Deserialize;

use super::map_country_error;
use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
struct CreateCountryRequest {
    pub name: String,
}

#[post("/api/countries")]
pub async fn create_country_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateCountryRequest>,
) -> impl Responder {
    match data.country_service.create(payload.name.clone()).await {
        Ok(country) => ApiResponse::created(country),
        Err(err) => map_country_error(err),
    }
}
