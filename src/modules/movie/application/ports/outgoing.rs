use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::movie::application::domain::{Movie, MovieDraft, MovieWithRelations};

#[derive(Debug, Clone, thiserror::Error)]
pub enum MovieRepositoryError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Movie not found")]
    NotFound,

    #[error("A movie with this title, year and director already exists")]
    Duplicate,
}

#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Inserts the movie, its creator row and all association rows in one
    /// transaction.
    async fn insert(
        &self,
        draft: &MovieDraft,
        creator_id: Uuid,
        genre_ids: &[Uuid],
        country_ids: &[Uuid],
    ) -> Result<Movie, MovieRepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Movie>, MovieRepositoryError>;

    async fn find_with_relations(
        &self,
        id: Uuid,
    ) -> Result<Option<MovieWithRelations>, MovieRepositoryError>;

    /// Duplicate identity is (title, year, director), title and director
    /// compared ignoring case, absent fields compared as equal.
    async fn exists_duplicate(
        &self,
        title: &str,
        year: Option<i32>,
        director: Option<&str>,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, MovieRepositoryError>;

    async fn update(&self, id: Uuid, draft: &MovieDraft) -> Result<Movie, MovieRepositoryError>;

    async fn genre_ids_of(&self, movie_id: Uuid) -> Result<Vec<Uuid>, MovieRepositoryError>;

    async fn country_ids_of(&self, movie_id: Uuid) -> Result<Vec<Uuid>, MovieRepositoryError>;

    async fn add_genres(
        &self,
        movie_id: Uuid,
        genre_ids: &[Uuid],
    ) -> Result<(), MovieRepositoryError>;

    async fn remove_genres(
        &self,
        movie_id: Uuid,
        genre_ids: &[Uuid],
    ) -> Result<(), MovieRepositoryError>;

    async fn add_countries(
        &self,
        movie_id: Uuid,
        country_ids: &[Uuid],
    ) -> Result<(), MovieRepositoryError>;

    async fn remove_countries(
        &self,
        movie_id: Uuid,
        country_ids: &[Uuid],
    ) -> Result<(), MovieRepositoryError>;

    /// Removes the movie together with its association rows, creator rows,
    /// list entries and reports, all in one transaction.
    async fn delete_cascade(&self, movie_id: Uuid) -> Result<(), MovieRepositoryError>;

    /// All non-null user ratings currently recorded for the movie.
    async fn ratings_for(&self, movie_id: Uuid) -> Result<Vec<i16>, MovieRepositoryError>;

    async fn set_rating(&self, movie_id: Uuid, rating: f64) -> Result<(), MovieRepositoryError>;

    /// Case-insensitive substring match across title, director,
    /// description, stringified year and linked genre/country names.
    async fn search(
        &self,
        term: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Movie>, MovieRepositoryError>;

    async fn find_all(&self, offset: u64, limit: u64) -> Result<Vec<Movie>, MovieRepositoryError>;

    async fn is_creator(
        &self,
        movie_id: Uuid,
        user_id: Uuid,
    ) -> Result<bool, MovieRepositoryError>;

    async fn creator_of(&self, movie_id: Uuid) -> Result<Option<Uuid>, MovieRepositoryError>;
}
