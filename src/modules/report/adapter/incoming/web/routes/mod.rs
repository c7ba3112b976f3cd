mod create_report;
mod delete_report;
mod filter_reports;
mod get_reports;

pub use create_report::create_report_handler;
pub use delete_report::delete_report_handler;
pub use filter_reports::filter_reports_handler;
pub use get_reports::get_reports_handler;

use actix_web::HttpResponse;

use crate::modules::report::application::ports::incoming::ReportError;
use crate::shared::api::ApiResponse;

pub(crate) fn map_report_error(err: ReportError) -> HttpResponse {
    match err {
        ReportError::MovieNotFound => {
            ApiResponse::not_found("MOVIE_NOT_FOUND", "Movie not found")
        }
        ReportError::NotFound => ApiResponse::not_found("REPORT_NOT_FOUND", "Report not found"),
        ReportError::EmptyComment => {
            ApiResponse::bad_request("EMPTY_COMMENT", "Report comment cannot be empty")
        }
        ReportError::InvalidRange => {
            ApiResponse::bad_request("INVALID_DATE_RANGE", "Start date must not be after end date")
        }
        ReportError::Repository(msg) => {
            tracing::error!("report repository error: {msg}");
            ApiResponse::internal_error()
        }
    }
}
