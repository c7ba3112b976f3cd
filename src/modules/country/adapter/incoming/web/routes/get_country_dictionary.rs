use actix_web::{get, web, Responder};

use super::map_country_error;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/countries/dictionary")]
pub async fn get_country_dictionary_handler(data: web::Data<AppState>) -> impl Responder {
    match data.country_service.dictionary().await {
        Ok(dictionary) => ApiResponse::success(dictionary),
        Err(err) => map_country_error(err),
    }
}
