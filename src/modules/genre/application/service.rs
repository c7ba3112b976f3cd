use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::genre::application::domain::Genre;
use crate::modules::genre::application::ports::incoming::{GenreError, GenreUseCase};
use crate::modules::genre::application::ports::outgoing::{GenreRepository, GenreRepositoryError};
use crate::shared::api::Page;

const MAX_NAME_LEN: usize = 64;

#[derive(Debug, Clone)]
pub struct GenreService<R>
where
    R: GenreRepository,
{
    repository: R,
}

impl<R> GenreService<R>
where
    R: GenreRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    fn normalize_name(name: &str) -> Result<String, GenreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GenreError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(GenreError::NameTooLong);
        }
        Ok(name.to_string())
    }
}

fn map_repo_error(err: GenreRepositoryError) -> GenreError {
    match err {
        GenreRepositoryError::NotFound => GenreError::NotFound,
        GenreRepositoryError::DuplicateName => GenreError::DuplicateName,
        GenreRepositoryError::InUse => GenreError::InUse,
        GenreRepositoryError::Database(msg) => GenreError::Repository(msg),
    }
}

#[async_trait]
impl<R> GenreUseCase for GenreService<R>
where
    R: GenreRepository,
{
    async fn list(&self, page: Page) -> Result<Vec<Genre>, GenreError> {
        self.repository
            .find_all(page.offset, page.limit)
            .await
            .map_err(map_repo_error)
    }

    async fn get(&self, id: Uuid) -> Result<Genre, GenreError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_repo_error)?
            .ok_or(GenreError::NotFound)
    }

    async fn create(&self, name: String) -> Result<Genre, GenreError> {
        let name = Self::normalize_name(&name)?;

        // Early exit only; the unique index is what actually guards
        // against concurrent duplicates.
        if self
            .repository
            .exists_by_name(&name, None)
            .await
            .map_err(map_repo_error)?
        {
            return Err(GenreError::DuplicateName);
        }

        self.repository.insert(&name).await.map_err(map_repo_error)
    }

    async fn update(&self, id: Uuid, name: String) -> Result<Genre, GenreError> {
        let name = Self::normalize_name(&name)?;

        if self
            .repository
            .find_by_id(id)
            .await
            .map_err(map_repo_error)?
            .is_none()
        {
            return Err(GenreError::NotFound);
        }

        if self
            .repository
            .exists_by_name(&name, Some(id))
            .await
            .map_err(map_repo_error)?
        {
            return Err(GenreError::DuplicateName);
        }

        self.repository
            .rename(id, &name)
            .await
            .map_err(map_repo_error)
    }

    async fn delete(&self, id: Uuid) -> Result<(), GenreError> {
        self.repository.delete(id).await.map_err(map_repo_error)
    }

    async fn dictionary(&self) -> Result<HashMap<Uuid, String>, GenreError> {
        self.repository.dictionary().await.map_err(map_repo_error)
    }

    async fn search(&self, term: Option<&str>, page: Page) -> Result<Vec<Genre>, GenreError> {
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
