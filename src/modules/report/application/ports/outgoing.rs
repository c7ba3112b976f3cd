use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::report::application::domain::{Report, ReportView};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReportRepositoryError {
    #[error("database error: {0}")]
    Database(String),
    #[error("report not found")]
    NotFound,
}

#[async_trait]
pub trait ReportRepository {
    async fn insert(&self, report: Report) -> Result<Report, ReportRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ReportRepositoryError>;

    /// All reports joined with movie titles, newest first.
    async fn find_all(&self) -> Result<Vec<ReportView>, ReportRepositoryError>;

    async fn for_movie(&self, movie_id: Uuid) -> Result<Vec<Report>, ReportRepositoryError>;

    /// Reports created in `[start, end_exclusive)`, newest first.
    async fn filter(
        &self,
        start: DateTime<Utc>,
        end_exclusive: DateTime<Utc>,
    ) -> Result<Vec<ReportView>, ReportRepositoryError>;

    async fn movie_exists(&self, movie_id: Uuid) -> Result<bool, ReportRepositoryError>;
}
