use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A user-filed problem report against a movie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub id: Uuid,
    pub movie_id: Uuid,
    pub user_id: Uuid,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Listing projection with the movie title resolved for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportView {
    pub id: Uuid,
    pub movie_id: Uuid,
    pub movie_title: String,
    pub user_id: Uuid,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}
