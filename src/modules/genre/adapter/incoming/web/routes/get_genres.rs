use actix_web::{get, web, Responder};
use serde::Deserialize;

use super::map_genre_error;
use crate::shared::api::{ApiResponse, PageQuery};
use crate::AppState;

#[derive(Debug, Deserialize)]
struct GenreListQuery {
    page: Option<u64>,
    per_page: Option<u64>,
    search: Option<String>,
}

#[get("/api/genres")]
pub async fn get_genres_handler(
    data: web::Data<AppState>,
    query: web::Query<GenreListQuery>,
) -> impl Responder {
    let page = PageQuery {
        page: query.page,
        per_page: query.per_page,
    }
    .resolve(8);

    match data
        .genre_service
        .search(query.search.as_deref(), page)
        .await
    {
        Ok(genres) => ApiResponse::success(genres),
        Err(err) => map_genre_error(err),
    }
}
