use async_trait::async_trait;
use chrono::{DateTime, Days, NaiveDate, Utc};
use uuid::Uuid;

use crate::modules::report::application::domain::{Report, ReportView};
use crate::modules::report::application::ports::incoming::{ReportError, ReportUseCase};
use crate::modules::report::application::ports::outgoing::{
    ReportRepository, ReportRepositoryError,
};

/// Default window for date filtering when no bounds are given.
const DEFAULT_WINDOW_DAYS: u64 = 30;

pub struct ReportService<R: ReportRepository> {
    repository: R,
}

impl<R: ReportRepository> ReportService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repo_error(err: ReportRepositoryError) -> ReportError {
    match err {
        ReportRepositoryError::NotFound => ReportError::NotFound,
        ReportRepositoryError::Database(msg) => ReportError::Repository(msg),
    }
}

fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0)
        .unwrap_or_default()
        .and_utc()
}

#[async_trait]
impl<R: ReportRepository + Send + Sync> ReportUseCase for ReportService<R> {
    async fn create(
        &self,
        movie_id: Uuid,
        user_id: Uuid,
        comment: &str,
    ) -> Result<Report, ReportError> {
        let comment = comment.trim();
        if comment.is_empty() {
            return Err(ReportError::EmptyComment);
        }

        let exists = self
            .repository
            .movie_exists(movie_id)
            .await
            .map_err(map_repo_error)?;
        if !exists {
            return Err(ReportError::MovieNotFound);
        }

        let report = Report {
            id: Uuid::new_v4(),
            movie_id,
            user_id,
            comment: comment.to_string(),
            created_at: Utc::now(),
        };

        self.repository.insert(report).await.map_err(map_repo_error)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ReportError> {
        self.repository.delete(id).await.map_err(map_repo_error)
    }

    async fn list_all(&self) -> Result<Vec<ReportView>, ReportError> {
        self.repository.find_all().await.map_err(map_repo_error)
    }

    async fn for_movie(&self, movie_id: Uuid) -> Result<Vec<Report>, ReportError> {
        self.repository
            .for_movie(movie_id)
            .await
            .map_err(map_repo_error)
    }

    async fn filter(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<ReportView>, ReportError> {
        let today = Utc::now().date_naive();
        let end = end.unwrap_or(today);
        // The default start anchors to today, not to the supplied end.
        let start = start.unwrap_or_else(|| {
            today
                .checked_sub_days(Days::new(DEFAULT_WINDOW_DAYS))
                .unwrap_or(today)
        });

        if start > end {
            return Err(ReportError::InvalidRange);
        }

        // The whole end day counts, so the upper bound is the next midnight.
        let end_exclusive = end
            .checked_add_days(Days::new(1))
            .map(day_start)
            .unwrap_or_else(|| day_start(end));

        self.repository
            .filter(day_start(start), end_exclusive)
            .await
            .map_err(map_repo_error)
    }
}
