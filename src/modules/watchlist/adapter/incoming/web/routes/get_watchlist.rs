use actix_web::{get, web, Responder};

use super::map_watchlist_error;
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::{ApiResponse, PageQuery};
use crate::AppState;

#[get("/api/me/watchlist")]
pub async fn get_watchlist_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> impl Responder {
    let page = query.into_inner().resolve(12);

    match data.watchlist_service.list(user.user_id, false, page).await {
        Ok(movies) => ApiResponse::success(movies),
        Err(err) => map_watchlist_error(err),
    }
}
