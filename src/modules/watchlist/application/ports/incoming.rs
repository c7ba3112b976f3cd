use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::watchlist::application::domain::{ListEntry, ListedMovie};
use crate::shared::api::Page;

#[derive(Debug, Clone, thiserror::Error)]
pub enum WatchlistError {
    #[error("Movie not found")]
    MovieNotFound,

    #[error("List entry not found")]
    EntryNotFound,

    #[error("Ratings require a watched entry and a value between 1 and 10")]
    InvalidRating,

    #[error("Repository error: {0}")]
    Repository(String),
}

/// Personal list operations: the seen-it list, the to-watch list and the
/// ratings attached to watched entries. Every mutation triggers a
/// recompute of the affected movie's aggregate rating.
#[async_trait]
pub trait WatchlistUseCase: Send + Sync {
    async fn add_or_update(
        &self,
        user_id: Uuid,
        movie_id: Uuid,
        is_watched: bool,
        rating: Option<i16>,
        watched_at: Option<DateTime<Utc>>,
    ) -> Result<ListEntry, WatchlistError>;

    /// Upserts a watched entry carrying the rating, preserving the
    /// original watched_at when the entry already exists.
    async fn rate(
        &self,
        user_id: Uuid,
        movie_id: Uuid,
        rating: i16,
    ) -> Result<ListEntry, WatchlistError>;

    async fn remove(&self, user_id: Uuid, movie_id: Uuid) -> Result<(), WatchlistError>;

    async fn list(
        &self,
        user_id: Uuid,
        is_watched: bool,
        page: Page,
    ) -> Result<Vec<ListedMovie>, WatchlistError>;

    async fn search_in_list(
        &self,
        user_id: Uuid,
        term: Option<&str>,
        is_watched: Option<bool>,
    ) -> Result<Vec<ListedMovie>, WatchlistError>;

    async fn count_watched(&self, user_id: Uuid) -> Result<u64, WatchlistError>;

    async fn activity(&self, user_id: Uuid) -> Result<Vec<ListedMovie>, WatchlistError>;

    async fn entry(
        &self,
        user_id: Uuid,
        movie_id: Uuid,
    ) -> Result<Option<ListEntry>, WatchlistError>;
}
