use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::country::application::domain::Country;
use crate::modules::country::application::ports::incoming::{CountryError, CountryUseCase};
use crate::modules::country::application::ports::outgoing::{
    CountryRepository, CountryRepositoryError,
};
use crate::shared::api::Page;

const MAX_NAME_LEN: usize = 64;

#[derive(Debug, Clone)]
pub struct CountryService<R>
where
    R: CountryRepository,
{
    repository: R,
}

impl<R> CountryService<R>
where
    R: CountryRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    fn normalize_name(name: &str) -> Result<String, CountryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CountryError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(CountryError::NameTooLong);
        }
        Ok(name.to_string())
    }
}

fn map_repo_error(err: CountryRepositoryError) -> CountryError {
    match err {
        CountryRepositoryError::NotFound => CountryError::NotFound,
        CountryRepositoryError::DuplicateName => CountryError::DuplicateName,
        CountryRepositoryError::InUse => CountryError::InUse,
        CountryRepositoryError::Database(msg) => CountryError::Repository(msg),
    }
}

#[async_trait]
impl<R> CountryUseCase for CountryService<R>
where
    R: CountryRepository,
{
    async fn list(&self, page: Page) -> Result<Vec<Country>, CountryError> {
        self.repository
            .find_all(page.offset, page.limit)
            .await
            .map_err(map_repo_error)
    }

    async fn get(&self, id: Uuid) -> Result<Country, CountryError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_repo_error)?
            .ok_or(CountryError::NotFound)
    }

    async fn create(&self, name: String) -> Result<Country, CountryError> {
        let name = Self::normalize_name(&name)?;

        if self
            .repository
            .exists_by_name(&name, None)
            .await
            .map_err(map_repo_error)?
        {
            return Err(CountryError::DuplicateName);
        }

        self.repository.insert(&name).await.map_err(map_repo_error)
    }

    async fn update(&self, id: Uuid, name: String) -> Result<Country, CountryError> {
        let name = Self::normalize_name(&name)?;

        if self
            .repository
            .find_by_id(id)
            .await
            .map_err(map_repo_error)?
            .is_none()
        {
            return Err(CountryError::NotFound);
        }

        if self
            .repository
            .exists_by_name(&name, Some(id))
            .await
            .map_err(map_repo_error)?
        {
            return Err(CountryError::DuplicateName);
        }

        self.repository
            .rename(id, &name)
            .await
            .map_err(map_repo_error)
    }

    async fn delete(&self, id: Uuid) -> Result<(), CountryError> {
        self.repository.delete(id).await.map_err(map_repo_error)
    }

    async fn dictionary(&self) -> Result<HashMap<Uuid, String>, CountryError> {
        self.repository.dictionary().await.map_err(map_repo_error)
    }

    async fn search(&self, term: Option<&str>, page: Page) -> Result<Vec<Country>, CountryError> {
        match term.map(str::trim) {
            None | Some("") => self.list(page).await,
            Some(term) => self
                .repository
                .search(term, page.offset, page.limit)
                .await
                .map_err(map_repo_error),
        }
    }
}
