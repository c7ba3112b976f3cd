mod create_country;
mod delete_country;
mod get_countries;
mod get_country_dictionary;
mod update_country;

pub use create_country::create_country_handler;
pub use delete_country::delete_country_handler;
pub use get_countries::get_countries_handler;
pub use get_country_dictionary::get_country_dictionary_handler;
pub use update_country::update_country_handler;

use actix_web::HttpResponse;

use crate::modules::country::application::ports::incoming::CountryError;
use crate::shared::api::ApiResponse;

pub(crate) fn map_country_error(err: CountryError) -> HttpResponse {
    match err {
        CountryError::NotFound => ApiResponse::not_found("COUNTRY_NOT_FOUND", "Country not found"),
        CountryError::DuplicateName => ApiResponse::conflict(
            "COUNTRY_ALREADY_EXISTS",
            "A country with this name already exists",
        ),
        CountryError::EmptyName => {
            ApiResponse::bad_request("EMPTY_NAME", "Country name cannot be empty")
        }
        CountryError::NameTooLong => {
            ApiResponse::bad_request("NAME_TOO_LONG", "Country name must not exceed 64 characters")
        }
        CountryError::InUse => {
            ApiResponse::conflict("COUNTRY_IN_USE", "Country is still referenced by movies")
        }
        CountryError::Repository(msg) => {
            tracing::error!("country repository error: {msg}");
            ApiResponse::internal_error()
        }
    }
}
