use actix_web::{get, web, Responder};
use serde::Deserialize;

use super::map_country_error;
use crate::shared::api::{ApiResponse, PageQuery};
use crate::AppState;

#[derive(Debug, Deserialize)]
struct CountryListQuery {
    page: Option<u64>,
    per_page: Option<u64>,
    search: Option<String>,
}

#[get("/api/countries")]
pub async fn get_countries_handler(
    data: web::Data<AppState>,
    query: web::Query<CountryListQuery>,
) -> impl Responder {
    let page = PageQuery {
        page: query.page,
        per_page: query.per_page,
    }
    .resolve(8);

    match data
        .country_service
        .search(query.search.as_deref(), page)
        .await
    {
        Ok(countries) => ApiResponse::success(countries),
        Err(err) => map_country_error(err),
    }
}
