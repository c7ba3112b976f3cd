use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::genre::application::domain::Genre;
use crate::shared::api::Page;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GenreError {
    #[error("Genre not found")]
    NotFound,

    #[error("A genre with this name already exists")]
    DuplicateName,

    #[error("Genre name cannot be empty")]
    EmptyName,

    #[error("Genre name must not exceed 64 characters")]
    NameTooLong,

    #[error("Genre is still referenced by movies")]
    InUse,

    #[error("Repository error: {0}")]
    Repository(String),
}

/// Incoming port mirroring the genre reference-data operations: listing,
/// uniqueness-checked create/update, delete, dictionary projection and
/// free-text search. All expected business-rule failures are enum
/// variants, never panics.
#[async_trait]
pub trait GenreUseCase: Send + Sync {
    async fn list(&self, page: Page) -> Result<Vec<Genre>, GenreError>;

    async fn get(&self, id: Uuid) -> Result<Genre, GenreError>;

    async fn create(&self, name: String) -> Result<Genre, GenreError>;

    async fn update(&self, id: Uuid, name: String) -> Result<Genre, GenreError>;

    async fn delete(&self, id: Uuid) -> Result<(), GenreError>;

    async fn dictionary(&self) -> Result<HashMap<Uuid, String>, GenreError>;

    /// Blank or missing terms fall back to the full listing.
    async fn search(&self, term: Option<&str>, page: Page) -> Result<Vec<Genre>, GenreError>;
}
