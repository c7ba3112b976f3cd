use actix_web::{post, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use super::{map_command_error, map_movie_error};
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::movie::application::ports::incoming::MovieCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
struct CreateMovieRequest {
    pub title: String,
    pub year: Option<i32>,
    pub duration: Option<i32>,
    pub director: Option<String>,
    pub description: Option<String>,
    pub cover: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<Uuid>,
    #[serde(default)]
    pub country_ids: Vec<Uuid>,
}

#[post("/api/movies")]
pub async fn create_movie_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateMovieRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match MovieCommand::new(
        payload.title,
        payload.year,
        payload.duration,
        payload.director,
        payload.description,
        payload.cover,
        payload.genre_ids,
        payload.country_ids,
    ) {
        Ok(command) => command,
        Err(err) => return map_command_error(err),
    };

    match data.movie_service.create(command, user.user_id).await {
        Ok(movie) => ApiResponse::created(movie),
        Err(err) => map_movie_error(err),
    }
}
