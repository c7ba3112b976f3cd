use std::collections::HashSet;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::movie::application::domain::{Movie, MovieWithRelations};
use crate::modules::movie::application::ports::incoming::{
    Actor, MovieCommand, MovieError, MovieRatingUpdater, MovieUseCase,
};
use crate::modules::movie::application::ports::outgoing::{MovieRepository, MovieRepositoryError};
use crate::shared::api::Page;

#[derive(Debug, Clone)]
pub struct MovieService<R>
where
    R: MovieRepository,
{
    repository: R,
}

impl<R> MovieService<R>
where
    R: MovieRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    async fn authorize(&self, movie_id: Uuid, actor: Actor) -> Result<(), MovieError> {
        if actor.is_admin {
            return Ok(());
        }
        if self
            .repository
            .is_creator(movie_id, actor.user_id)
            .await
            .map_err(map_repo_error)?
        {
            return Ok(());
        }
        Err(MovieError::Forbidden)
    }

    /// Brings the association rows in line with `desired`: inserts what is
    /// missing, removes what is extraneous, leaves the intersection alone.
    async fn reconcile_genres(
        &self,
        movie_id: Uuid,
        desired: &[Uuid],
    ) -> Result<(), MovieError> {
        let current: HashSet<Uuid> = self
            .repository
            .genre_ids_of(movie_id)
            .await
            .map_err(map_repo_error)?
            .into_iter()
            .collect();
        let desired: HashSet<Uuid> = desired.iter().copied().collect();

        let to_add: Vec<Uuid> = desired.difference(&current).copied().collect();
        let to_remove: Vec<Uuid> = current.difference(&desired).copied().collect();

        if !to_add.is_empty() {
            self.repository
                .add_genres(movie_id, &to_add)
                .await
                .map_err(map_repo_error)?;
        }
        if !to_remove.is_empty() {
            self.repository
                .remove_genres(movie_id, &to_remove)
                .await
                .map_err(map_repo_error)?;
        }
        Ok(())
    }

    async fn reconcile_countries(
        &self,
        movie_id: Uuid,
        desired: &[Uuid],
    ) -> Result<(), MovieError> {
        let current: HashSet<Uuid> = self
            .repository
            .country_ids_of(movie_id)
            .await
            .map_err(map_repo_error)?
            .into_iter()
            .collect();
        let desired: HashSet<Uuid> = desired.iter().copied().collect();

        let to_add: Vec<Uuid> = desired.difference(&current).copied().collect();
        let to_remove: Vec<Uuid> = current.difference(&desired).copied().collect();

        if !to_add.is_empty() {
            self.repository
                .add_countries(movie_id, &to_add)
                .await
                .map_err(map_repo_error)?;
        }
        if !to_remove.is_empty() {
            self.repository
                .remove_countries(movie_id, &to_remove)
                .await
                .map_err(map_repo_error)?;
        }
        Ok(())
    }
}

fn map_repo_error(err: MovieRepositoryError) -> MovieError {
    match err {
        MovieRepositoryError::NotFound => MovieError::NotFound,
        MovieRepositoryError::Duplicate => MovieError::DuplicateMovie,
        MovieRepositoryError::Database(msg) => MovieError::Repository(msg),
    }
}

pub(crate) fn mean_rating(ratings: &[i16]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    ratings.iter().map(|r| f64::from(*r)).sum::<f64>() / ratings.len() as f64
}

#[async_trait]
impl<R> MovieUseCase for MovieService<R>
where
    R: MovieRepository,
{
    async fn create(
        &self,
        command: MovieCommand,
        creator_id: Uuid,
    ) -> Result<MovieWithRelations, MovieError> {
        let draft = &command.draft;

        // Early exit; the unique index is the authoritative guard.
        if self
            .repository
            .exists_duplicate(&draft.title, draft.year, draft.director.as_deref(), None)
            .await
            .map_err(map_repo_error)?
        {
            return Err(MovieError::DuplicateMovie);
        }

        let movie = self
            .repository
            .insert(draft, creator_id, &command.genre_ids, &command.country_ids)
            .await
            .map_err(map_repo_error)?;

        self.repository
            .find_with_relations(movie.id)
            .await
            .map_err(map_repo_error)?
            .ok_or(MovieError::NotFound)
    }

    async fn get(&self, id: Uuid) -> Result<Movie, MovieError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_repo_error)?
            .ok_or(MovieError::NotFound)
    }

    async fn get_details(&self, id: Uuid) -> Result<MovieWithRelations, MovieError> {
        self.repository
            .find_with_relations(id)
            .await
            .map_err(map_repo_error)?
            .ok_or(MovieError::NotFound)
    }

    async fn update(
        &self,
        id: Uuid,
        command: MovieCommand,
        actor: Actor,
    ) -> Result<MovieWithRelations, MovieError> {
        if self
            .repository
            .find_by_id(id)
            .await
            .map_err(map_repo_error)?
            .is_none()
        {
            return Err(MovieError::NotFound);
        }

        self.authorize(id, actor).await?;

        let draft = &command.draft;
        if self
            .repository
            .exists_duplicate(
                &draft.title,
                draft.year,
                draft.director.as_deref(),
                Some(id),
            )
            .await
            .map_err(map_repo_error)?
        {
            return Err(MovieError::DuplicateMovie);
        }

        self.repository
            .update(id, draft)
            .await
            .map_err(map_repo_error)?;

        self.reconcile_genres(id, &command.genre_ids).await?;
        self.reconcile_countries(id, &command.country_ids).await?;

        self.repository
            .find_with_relations(id)
            .await
            .map_err(map_repo_error)?
            .ok_or(MovieError::NotFound)
    }

    async fn delete(&self, id: Uuid, actor: Actor) -> Result<(), MovieError> {
        if self
            .repository
            .find_by_id(id)
            .await
            .map_err(map_repo_error)?
            .is_none()
        {
            return Err(MovieError::NotFound);
        }

        self.authorize(id, actor).await?;

        self.repository
            .delete_cascade(id)
            .await
            .map_err(map_repo_error)
    }

    async fn search(&self, term: Option<&str>, page: Page) -> Result<Vec<Movie>, MovieError> {
        match term.map(str::trim) {
            None | Some("") => self
                .repository
                .find_all(page.offset, page.limit)
                .await
                .map_err(map_repo_error),
            Some(term) => self
                .repository
                .search(term, page.offset, page.limit)
                .await
                .map_err(map_repo_error),
        }
    }

    async fn is_creator(&self, movie_id: Uuid, user_id: Uuid) -> Result<bool, MovieError> {
        self.repository
            .is_creator(movie_id, user_id)
            .await
            .map_err(map_repo_error)
    }

    async fn creator_of(&self, movie_id: Uuid) -> Result<Option<Uuid>, MovieError> {
        if self
            .repository
            .find_by_id(movie_id)
            .await
            .map_err(map_repo_error)?
            .is_none()
        {
            return Err(MovieError::NotFound);
        }

        self.repository
            .creator_of(movie_id)
            .await
            .map_err(map_repo_error)
    }
}

#[async_trait]
impl<R> MovieRatingUpdater for MovieService<R>
where
    R: MovieRepository,
{
    async fn recompute_rating(&self, movie_id: Uuid) -> Result<f64, MovieError> {
        let ratings = self
            .repository
            .ratings_for(movie_id)
            .await
            .map_err(map_repo_error)?;

        let mean = mean_rating(&ratings);

        self.repository
            .set_rating(movie_id, mean)
            .await
            .map_err(map_repo_error)?;

        Ok(mean)
    }
}
