use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::modules::report::application::domain::{Report, ReportView};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReportError {
    #[error("movie not found")]
    MovieNotFound,
    #[error("report not found")]
    NotFound,
    #[error("comment must not be empty")]
    EmptyComment,
    #[error("start date is after end date")]
    InvalidRange,
    #[error("repository error: {0}")]
    Repository(String),
}

#[async_trait]
pub trait ReportUseCase {
    /// Files a report against a movie.
    async fn create(
        &self,
        movie_id: Uuid,
        user_id: Uuid,
        comment: &str,
    ) -> Result<Report, ReportError>;

    async fn delete(&self, id: Uuid) -> Result<(), ReportError>;

    /// All reports, newest first, with movie titles resolved.
    async fn list_all(&self) -> Result<Vec<ReportView>, ReportError>;

    async fn for_movie(&self, movie_id: Uuid) -> Result<Vec<Report>, ReportError>;

    /// Reports filed within the given date window. Missing bounds default
    /// to the last 30 days; the end day is included in full.
    async fn filter(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<ReportView>, ReportError>;
}
