use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::country::application::domain::Country;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CountryRepositoryError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Country not found")]
    NotFound,

    #[error("Country name already taken")]
    DuplicateName,

    #[error("Country is referenced by movies")]
    InUse,
}

#[async_trait]
pub trait CountryRepository: Send + Sync {
    async fn find_all(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Country>, CountryRepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Country>, CountryRepositoryError>;

    async fn exists_by_name(
        &self,
        name: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, CountryRepositoryError>;

    async fn insert(&self, name: &str) -> Result<Country, CountryRepositoryError>;

    async fn rename(&self, id: Uuid, name: &str) -> Result<Country, CountryRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), CountryRepositoryError>;

    async fn dictionary(&self) -> Result<HashMap<Uuid, String>, CountryRepositoryError>;

    async fn search(
        &self,
        term: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Country>, CountryRepositoryError>;
}
