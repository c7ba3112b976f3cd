use actix_web::{put, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use super::{map_command_error, map_movie_error};
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::auth::application::domain::Role;
use crate::modules::movie::application::ports::incoming::{Actor, MovieCommand};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
struct UpdateMovieRequest {
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

#[put("/api/movies/{id}")]
pub async fn update_movie_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateMovieRequest>,
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

    let actor = Actor {
        user_id: user.user_id,
        is_admin: user.role == Role::Admin,
    };

    match data
        .movie_service
        .update(path.into_inner(), command, actor)
        .await
    {
        Ok(movie) => ApiResponse::success(movie),
        Err(err) => map_movie_error(err),
    }
}
