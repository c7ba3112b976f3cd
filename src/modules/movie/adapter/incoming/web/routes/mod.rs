mod create_movie;
mod delete_movie;
mod get_movie_details;
mod get_movies;
mod update_movie;

pub use create_movie::create_movie_handler;
pub use delete_movie::delete_movie_handler;
pub use get_movie_details::get_movie_details_handler;
pub use get_movies::get_movies_handler;
pub use update_movie::update_movie_handler;

use actix_web::HttpResponse;

use crate::modules::movie::application::ports::incoming::{MovieCommandError, MovieError};
use crate::shared::api::ApiResponse;

pub(crate) fn map_movie_error(err: MovieError) -> HttpResponse {
    match err {
        MovieError::NotFound => ApiResponse::not_found("MOVIE_NOT_FOUND", "Movie not found"),
        MovieError::DuplicateMovie => ApiResponse::conflict(
            "MOVIE_ALREADY_EXISTS",
            "A movie with this title, year and director already exists",
        ),
        MovieError::Forbidden => ApiResponse::forbidden(
            "NOT_CREATOR",
            "Only the creator or an admin may modify this movie",
        ),
        MovieError::Repository(msg) => {
            tracing::error!("movie repository error: {msg}");
            ApiResponse::internal_error()
        }
    }
}

pub(crate) fn map_command_error(err: MovieCommandError) -> HttpResponse {
    match err {
        MovieCommandError::EmptyTitle => {
            ApiResponse::bad_request("EMPTY_TITLE", "Movie title cannot be empty")
        }
        MovieCommandError::TitleTooLong => {
            ApiResponse::bad_request("TITLE_TOO_LONG", "Movie title must not exceed 200 characters")
        }
        MovieCommandError::InvalidYear => {
            ApiResponse::bad_request("INVALID_YEAR", "Year must be between 1888 and 2100")
        }
    }
}
