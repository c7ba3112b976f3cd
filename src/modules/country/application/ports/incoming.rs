use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::country::application::domain::Country;
use crate::shared::api::Page;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CountryError {
    #[error("Country not found")]
    NotFound,

    #[error("A country with this name already exists")]
    DuplicateName,

    #[error("Country name cannot be empty")]
    EmptyName,

    #[error("Country name must not exceed 64 characters")]
    NameTooLong,

    #[error("Country is still referenced by movies")]
    InUse,

    #[error("Repository error: {0}")]
    Repository(String),
}

/// Country reference-data operations, same surface as genres.
#[async_trait]
pub trait CountryUseCase: Send + Sync {
    async fn list(&self, page: Page) -> Result<Vec<Country>, CountryError>;

    async fn get(&self, id: Uuid) -> Result<Country, CountryError>;

    async fn create(&self, name: String) -> Result<Country, CountryError>;

    async fn update(&self, id: Uuid, name: String) -> Result<Country, CountryError>;

    async fn delete(&self, id: Uuid) -> Result<(), CountryError>;

    async fn dictionary(&self) -> Result<HashMap<Uuid, String>, CountryError>;

    async fn search(&self, term: Option<&str>, page: Page) -> Result<Vec<Country>, CountryError>;
}
