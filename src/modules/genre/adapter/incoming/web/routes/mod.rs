mod create_genre;
mod delete_genre;
mod get_genre_dictionary;
mod get_genres;
mod update_genre;

pub use create_genre::create_genre_handler;
pub use delete_genre::delete_genre_handler;
pub use get_genre_dictionary::get_genre_dictionary_handler;
pub use get_genres::get_genres_handler;
pub use update_genre::update_genre_handler;

use actix_web::HttpResponse;

use crate::modules::genre::application::ports::incoming::GenreError;
use crate::shared::api::ApiResponse;

pub(crate) fn map_genre_error(err: GenreError) -> HttpResponse {
    match err {
        GenreError::NotFound => ApiResponse::not_found("GENRE_NOT_FOUND", "Genre not found"),
        GenreError::DuplicateName => ApiResponse::conflict(
            "GENRE_ALREADY_EXISTS",
            "A genre with this name already exists",
        ),
        GenreError::EmptyName => {
            ApiResponse::bad_request("EMPTY_NAME", "Genre name cannot be empty")
        }
        GenreError::NameTooLong => {
            ApiResponse::bad_request("NAME_TOO_LONG", "Genre name must not exceed 64 characters")
        }
        GenreError::InUse => {
            ApiResponse::conflict("GENRE_IN_USE", "Genre is still referenced by movies")
        }
        GenreError::Repository(msg) => {
            tracing::error!("genre repository error: {msg}");
            ApiResponse::internal_error()
        }
    }
}
