use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::movie::application::ports::incoming::{MovieError, MovieRatingUpdater};
use crate::modules::watchlist::application::domain::{ListEntry, ListedMovie};
use crate::modules::watchlist::application::ports::incoming::{WatchlistError, WatchlistUseCase};
use crate::modules::watchlist::application::ports::outgoing::{
    WatchlistRepository, WatchlistRepositoryError,
};
use crate::shared::api::Page;

const ACTIVITY_LIMIT: u64 = 10;

pub struct WatchlistService<R>
where
    R: WatchlistRepository,
{
    repository: R,
    movies: Arc<dyn MovieRatingUpdater>,
}

impl<R> WatchlistService<R>
where
    R: WatchlistRepository,
{
    pub fn new(repository: R, movies: Arc<dyn MovieRatingUpdater>) -> Self {
        Self { repository, movies }
    }

    async fn recompute(&self, movie_id: Uuid) -> Result<(), WatchlistError> {
        self.movies
            .recompute_rating(movie_id)
            .await
            .map(|_| ())
            .map_err(map_movie_error)
    }

    async fn require_movie(&self, movie_id: Uuid) -> Result<(), WatchlistError> {
        if !self
            .repository
            .movie_exists(movie_id)
            .await
            .map_err(map_repo_error)?
        {
            return Err(WatchlistError::MovieNotFound);
        }
        Ok(())
    }
}

fn map_repo_error(err: WatchlistRepositoryError) -> WatchlistError {
    match err {
        WatchlistRepositoryError::NotFound => WatchlistError::EntryNotFound,
        WatchlistRepositoryError::Database(msg) => WatchlistError::Repository(msg),
    }
}

fn map_movie_error(err: MovieError) -> WatchlistError {
    match err {
        MovieError::Repository(msg) => WatchlistError::Repository(msg),
        other => WatchlistError::Repository(other.to_string()),
    }
}

fn validate_rating(is_watched: bool, rating: Option<i16>) -> Result<(), WatchlistError> {
    if let Some(rating) = rating {
        if !is_watched || !(1..=10).contains(&rating) {
            return Err(WatchlistError::InvalidRating);
        }
    }
    Ok(())
}

#[async_trait]
impl<R> WatchlistUseCase for WatchlistService<R>
where
    R: WatchlistRepository,
{
    async fn add_or_update(
        &self,
        user_id: Uuid,
        movie_id: Uuid,
        is_watched: bool,
        rating: Option<i16>,
        watched_at: Option<DateTime<Utc>>,
    ) -> Result<ListEntry, WatchlistError> {
        validate_rating(is_watched, rating)?;
        self.require_movie(movie_id).await?;

        let entry = ListEntry {
            user_id,
            movie_id,
            is_watched,
            rating,
            watched_at: watched_at.unwrap_or_else(Utc::now),
        };

        let stored = self
            .repository
            .upsert(entry)
            .await
            .map_err(map_repo_error)?;

        self.recompute(movie_id).await?;
        Ok(stored)
    }

    async fn rate(
        &self,
        user_id: Uuid,
        movie_id: Uuid,
        rating: i16,
    ) -> Result<ListEntry, WatchlistError> {
        if !(1..=10).contains(&rating) {
            return Err(WatchlistError::InvalidRating);
        }
        self.require_movie(movie_id).await?;

        let watched_at = self
            .repository
            .find(user_id, movie_id)
            .await
            .map_err(map_repo_error)?
            .map(|existing| existing.watched_at);

        let stored = self
            .repository
            .upsert(ListEntry {
                user_id,
                movie_id,
                is_watched: true,
                rating: Some(rating),
                watched_at: watched_at.unwrap_or_else(Utc::now),
            })
            .await
            .map_err(map_repo_error)?;

        self.recompute(movie_id).await?;
        Ok(stored)
    }

    async fn remove(&self, user_id: Uuid, movie_id: Uuid) -> Result<(), WatchlistError> {
        self.repository
            .remove(user_id, movie_id)
            .await
            .map_err(map_repo_error)?;

        self.recompute(movie_id).await
    }

    async fn list(
        &self,
        user_id: Uuid,
        is_watched: bool,
        page: Page,
    ) -> Result<Vec<ListedMovie>, WatchlistError> {
        self.repository
            .list(user_id, is_watched, page.offset, page.limit)
            .await
            .map_err(map_repo_error)
    }

    async fn search_in_list(
        &self,
        user_id: Uuid,
        term: Option<&str>,
        is_watched: Option<bool>,
    ) -> Result<Vec<ListedMovie>, WatchlistError> {
        let term = term.map(str::trim).unwrap_or_default();

        self.repository
            .search_in_list(user_id, term, is_watched)
            .await
            .map_err(map_repo_error)
    }

    async fn count_watched(&self, user_id: Uuid) -> Result<u64, WatchlistError> {
        self.repository
            .count_watched(user_id)
            .await
            .map_err(map_repo_error)
    }

    async fn activity(&self, user_id: Uuid) -> Result<Vec<ListedMovie>, WatchlistError> {
        self.repository
            .recent(user_id, ACTIVITY_LIMIT)
            .await
            .map_err(map_repo_error)
    }

    async fn entry(
        &self,
        user_id: Uuid,
        movie_id: Uuid,
    ) -> Result<Option<ListEntry>, WatchlistError> {
        self.repository
            .find(user_id, movie_id)
            .await
            .map_err(map_repo_error)
    }
}
