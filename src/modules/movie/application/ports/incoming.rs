use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::movie::application::domain::{Movie, MovieDraft, MovieWithRelations};
use crate::shared::api::Page;

const MAX_TITLE_LEN: usize = 200;

#[derive(Debug, Clone, thiserror::Error)]
pub enum MovieError {
    #[error("Movie not found")]
    NotFound,

    #[error("A movie with this title, year and director already exists")]
    DuplicateMovie,

    #[error("Only the creator or an admin may modify a movie")]
    Forbidden,

    #[error("Repository error: {0}")]
    Repository(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MovieCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title must not exceed 200 characters")]
    TitleTooLong,

    #[error("Year is out of range")]
    InvalidYear,
}

/// Validated movie payload; construction is the only way to obtain one.
#[derive(Debug, Clone)]
pub struct MovieCommand {
    pub draft: MovieDraft,
    pub genre_ids: Vec<Uuid>,
    pub country_ids: Vec<Uuid>,
}

impl MovieCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: String,
        year: Option<i32>,
        duration: Option<i32>,
        director: Option<String>,
        description: Option<String>,
        cover: Option<String>,
        genre_ids: Vec<Uuid>,
        country_ids: Vec<Uuid>,
    ) -> Result<Self, MovieCommandError> {
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(MovieCommandError::EmptyTitle);
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(MovieCommandError::TitleTooLong);
        }
        if let Some(year) = year {
            if !(1888..=2100).contains(&year) {
                return Err(MovieCommandError::InvalidYear);
            }
        }

        let director = director
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(Self {
            draft: MovieDraft {
                title,
                year,
                duration,
                director,
                description,
                cover,
            },
            genre_ids: dedup(genre_ids),
            country_ids: dedup(country_ids),
        })
    }
}

fn dedup(mut ids: Vec<Uuid>) -> Vec<Uuid> {
    ids.sort();
    ids.dedup();
    ids
}

/// The caller of a mutation, as established by the auth extractors.
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    pub user_id: Uuid,
    pub is_admin: bool,
}

#[async_trait]
pub trait MovieUseCase: Send + Sync {
    async fn create(
        &self,
        command: MovieCommand,
        creator_id: Uuid,
    ) -> Result<MovieWithRelations, MovieError>;

    async fn get(&self, id: Uuid) -> Result<Movie, MovieError>;

    async fn get_details(&self, id: Uuid) -> Result<MovieWithRelations, MovieError>;

    async fn update(
        &self,
        id: Uuid,
        command: MovieCommand,
        actor: Actor,
    ) -> Result<MovieWithRelations, MovieError>;

    async fn delete(&self, id: Uuid, actor: Actor) -> Result<(), MovieError>;

    async fn search(&self, term: Option<&str>, page: Page) -> Result<Vec<Movie>, MovieError>;

    async fn is_creator(&self, movie_id: Uuid, user_id: Uuid) -> Result<bool, MovieError>;

    /// `NotFound` when the movie is missing; `None` when it exists but no
    /// creator row was recorded.
    async fn creator_of(&self, movie_id: Uuid) -> Result<Option<Uuid>, MovieError>;
}

/// Narrow seam for the watchlist service, which must refresh a movie's
/// aggregate rating after list writes without seeing the full use case.
#[async_trait]
pub trait MovieRatingUpdater: Send + Sync {
    /// Returns the freshly persisted mean.
    async fn recompute_rating(&self, movie_id: Uuid) -> Result<f64, MovieError>;
}
