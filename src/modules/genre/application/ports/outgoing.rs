use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::genre::application::domain::Genre;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GenreRepositoryError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Genre not found")]
    NotFound,

    #[error("Genre name already taken")]
    DuplicateName,

    #[error("Genre is still referenced by movies")]
    InUse,
}

/// Persistence port for the genres table. The unique-violation mapping in
/// `insert`/`rename` is the authoritative duplicate signal; `exists_by_name`
/// is only an early exit for the service.
#[async_trait]
pub trait GenreRepository: Send + Sync {
    /// All genres ordered by name ascending, windowed.
    async fn find_all(&self, offset: u64, limit: u64) -> Result<Vec<Genre>, GenreRepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Genre>, GenreRepositoryError>;

    /// Case-insensitive exact-name existence check, optionally excluding one
    /// row (update-time uniqueness).
    async fn exists_by_name(
        &self,
        name: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, GenreRepositoryError>;

    async fn insert(&self, name: &str) -> Result<Genre, GenreRepositoryError>;

    async fn rename(&self, id: Uuid, name: &str) -> Result<Genre, GenreRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), GenreRepositoryError>;

    /// id -> name projection for multi-select form population.
    async fn dictionary(&self) -> Result<HashMap<Uuid, String>, GenreRepositoryError>;

    /// Case-insensitive substring match on name, windowed.
    async fn search(
        &self,
        term: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Genre>, GenreRepositoryError>;
}
