use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::watchlist::application::domain::{ListEntry, ListedMovie};

#[derive(Debug, Clone, thiserror::Error)]
pub enum WatchlistRepositoryError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("List entry not found")]
    NotFound,
}

#[async_trait]
pub trait WatchlistRepository: Send + Sync {
    async fn movie_exists(&self, movie_id: Uuid) -> Result<bool, WatchlistRepositoryError>;

    /// Inserts or replaces the (user, movie) entry.
    async fn upsert(&self, entry: ListEntry) -> Result<ListEntry, WatchlistRepositoryError>;

    async fn find(
        &self,
        user_id: Uuid,
        movie_id: Uuid,
    ) -> Result<Option<ListEntry>, WatchlistRepositoryError>;

    async fn remove(&self, user_id: Uuid, movie_id: Uuid)
        -> Result<(), WatchlistRepositoryError>;

    /// One of the user's two lists, watched_at descending.
    async fn list(
        &self,
        user_id: Uuid,
        is_watched: bool,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<ListedMovie>, WatchlistRepositoryError>;

    /// Title substring match restricted to the user's entries;
    /// `is_watched = None` spans both lists.
    async fn search_in_list(
        &self,
        user_id: Uuid,
        term: &str,
        is_watched: Option<bool>,
    ) -> Result<Vec<ListedMovie>, WatchlistRepositoryError>;

    async fn count_watched(&self, user_id: Uuid) -> Result<u64, WatchlistRepositoryError>;

    /// Most recent entries across both lists.
    async fn recent(
        &self,
        user_id: Uuid,
        limit: u64,
    ) -> Result<Vec<ListedMovie>, WatchlistRepositoryError>;
}
