use actix_web::{get, web, Responder};

use super::map_genre_error;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Full id-to-name map used by the movie forms.
#[get("/api/genres/dictionary")]
pub async fn get_genre_dictionary_handler(data: web::Data<AppState>) -> impl Responder {
    match data.genre_service.dictionary().await {
        Ok(dictionary) => ApiResponse::success(dictionary),
        Err(err) => map_genre_error(err),
    }
}
