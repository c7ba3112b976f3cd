use async_trait::async_trait;

use crate::modules::auth::application::domain::UserSummary;
use crate::modules::auth::application::ports::outgoing::UserRepository;
use crate::shared::api::Page;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUsersError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IGetUsersUseCase: Send + Sync {
    /// Admin listing with optional username search and ban-state filter.
    async fn execute(
        &self,
        search: Option<&str>,
        banned: Option<bool>,
        page: Page,
    ) -> Result<Vec<UserSummary>, GetUsersError>;
}

pub struct GetUsersUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetUsersUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

}

#[async_trait]
impl<R> IGetUsersUseCase for GetUsersUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        search: Option<&str>,
        banned: Option<bool>,
        page: Page,
    ) -> Result<Vec<UserSummary>, GetUsersError> {
        let users = match search.map(str::trim).filter(|term| !term.is_empty()) {
            Some(term) => {
                self.repository
                    .search(term, banned, page.offset, page.limit)
                    .await
            }
            None => {
                self.repository
                    .find_all(banned, page.offset, page.limit)
                    .await
            }
        }
        .map_err(|e| GetUsersError::RepositoryError(e.to_string()))?;

        Ok(users.into_iter().map(UserSummary::from).collect())
    }
}
