use actix_web::{get, web, Responder};
use chrono::NaiveDate;
use serde::Deserialize;

use super::map_report_error;
use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
struct FilterReportsQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

#[get("/api/reports/filter")]
pub async fn filter_reports_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    query: web::Query<FilterReportsQuery>,
) -> impl Responder {
    match data.report_service.filter(query.start, query.end).await {
        Ok(reports) => ApiResponse::success(reports),
        Err(err) => map_report_error(err),
    }
}
