use actix_web::{get, web, Responder};
use serde::Serialize;
use uuid::Uuid;

use super::map_movie_error;
use crate::modules::auth::adapter::incoming::web::extractors::auth::MaybeAuthenticated;
use crate::modules::movie::application::domain::MovieWithRelations;
use crate::modules::report::adapter::incoming::web::routes::map_report_error;
use crate::modules::report::application::domain::Report;
use crate::modules::watchlist::application::domain::ListEntry;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
struct MovieDetailsResponse {
    #[serde(flatten)]
    details: MovieWithRelations,
    created_by: Option<Uuid>,
    is_creator: bool,
    list_entry: Option<ListEntry>,
    reports: Vec<Report>,
}

/// Everything the detail page needs in one round trip. The list entry is
/// only present for the signed-in viewer.
#[get("/api/movies/{id}")]
pub async fn get_movie_details_handler(
    viewer: MaybeAuthenticated,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let movie_id = path.into_inner();

    let details = match data.movie_service.get_details(movie_id).await {
        Ok(details) => details,
        Err(err) => return map_movie_error(err),
    };

    let created_by = match data.movie_service.creator_of(movie_id).await {
        Ok(creator) => creator,
        Err(err) => return map_movie_error(err),
    };

    let reports = match data.report_service.for_movie(movie_id).await {
        Ok(reports) => reports,
        Err(err) => return map_report_error(err),
    };

    let mut is_creator = false;
    let mut list_entry = None;
    if let MaybeAuthenticated(Some(user)) = viewer {
        is_creator = created_by == Some(user.user_id);
        list_entry = match data.watchlist_service.entry(user.user_id, movie_id).await {
            Ok(entry) => entry,
            Err(err) => {
                tracing::error!("list entry lookup failed: {err}");
                None
            }
        };
    }

    ApiResponse::success(MovieDetailsResponse {
        details,
        created_by,
        is_creator,
        list_entry,
        reports,
    })
}
