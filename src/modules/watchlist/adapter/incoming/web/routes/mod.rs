mod add_to_seen;
mod add_to_watchlist;
mod get_activity;
mod get_seen;
mod get_seen_count;
mod get_watchlist;
mod rate_movie;
mod remove_from_lists;
mod search_lists;

pub use add_to_seen::add_to_seen_handler;
pub use add_to_watchlist::add_to_watchlist_handler;
pub use get_activity::get_activity_handler;
pub use get_seen::get_seen_handler;
pub use get_seen_count::get_seen_count_handler;
pub use get_watchlist::get_watchlist_handler;
pub use rate_movie::rate_movie_handler;
pub use remove_from_lists::remove_from_lists_handler;
pub use search_lists::search_lists_handler;

use actix_web::HttpResponse;

use crate::modules::watchlist::application::ports::incoming::WatchlistError;
use crate::shared::api::ApiResponse;

pub(crate) fn map_watchlist_error(err: WatchlistError) -> HttpResponse {
    match err {
        WatchlistError::MovieNotFound => {
            ApiResponse::not_found("MOVIE_NOT_FOUND", "Movie not found")
        }
        WatchlistError::EntryNotFound => {
            ApiResponse::not_found("ENTRY_NOT_FOUND", "Movie is not in your lists")
        }
        WatchlistError::InvalidRating => ApiResponse::bad_request(
            "INVALID_RATING",
            "Ratings require a watched entry and a value between 1 and 10",
        ),
        WatchlistError::Repository(msg) => {
            tracing::error!("watchlist repository error: {msg}");
            ApiResponse::internal_error()
        }
    }
}
