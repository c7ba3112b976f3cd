use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use super::sea_orm_entity as user_movies;
use crate::modules::movie::adapter::outgoing::sea_orm_entity::movies;
use crate::modules::movie::application::domain::Movie;
use crate::modules::watchlist::application::domain::{ListEntry, ListedMovie};
use crate::modules::watchlist::application::ports::outgoing::{
    WatchlistRepository, WatchlistRepositoryError,
};

#[derive(Debug, Clone)]
pub struct WatchlistRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl WatchlistRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Resolves the movies behind a page of entries, keeping entry order.
    async fn join_movies(
        &self,
        entries: Vec<user_movies::Model>,
    ) -> Result<Vec<ListedMovie>, WatchlistRepositoryError> {
        if entries.is_empty() {
            return Ok(vec![]);
        }

        let ids: Vec<Uuid> = entries.iter().map(|e| e.movie_id).collect();

        let movie_rows = movies::Entity::find()
            .filter(movies::Column::Id.is_in(ids))
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        let by_id: HashMap<Uuid, Movie> = movie_rows
            .into_iter()
            .map(|m| (m.id, m.into_domain()))
            .collect();

        Ok(entries
            .into_iter()
            .filter_map(|entry| {
                by_id.get(&entry.movie_id).map(|movie| ListedMovie {
                    movie: movie.clone(),
                    is_watched: entry.is_watched,
                    rating: entry.rating,
                    watched_at: entry.watched_at.into(),
                })
            })
            .collect())
    }
}

fn db_err(e: sea_orm::DbErr) -> WatchlistRepositoryError {
    WatchlistRepositoryError::Database(e.to_string())
}

fn sql_limit(limit: u64) -> Option<u64> {
    (limit != u64::MAX).then_some(limit)
}

#[async_trait]
impl WatchlistRepository for WatchlistRepositoryPostgres {
    async fn movie_exists(&self, movie_id: Uuid) -> Result<bool, WatchlistRepositoryError> {
        let row = movies::Entity::find_by_id(movie_id)
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(row.is_some())
    }

    async fn upsert(&self, entry: ListEntry) -> Result<ListEntry, WatchlistRepositoryError> {
        let active = user_movies::ActiveModel {
            user_id: Set(entry.user_id),
            movie_id: Set(entry.movie_id),
            is_watched: Set(entry.is_watched),
            rating: Set(entry.rating),
            watched_at: Set(entry.watched_at.fixed_offset()),
        };

        user_movies::Entity::insert(active)
            .on_conflict(
                OnConflict::columns([
                    user_movies::Column::UserId,
                    user_movies::Column::MovieId,
                ])
                .update_columns([
                    user_movies::Column::IsWatched,
                    user_movies::Column::Rating,
                    user_movies::Column::WatchedAt,
                ])
                .to_owned(),
            )
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(entry)
    }

    async fn find(
        &self,
        user_id: Uuid,
        movie_id: Uuid,
    ) -> Result<Option<ListEntry>, WatchlistRepositoryError> {
        let row = user_movies::Entity::find_by_id((user_id, movie_id))
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(row.map(user_movies::Model::into_domain))
    }

    async fn remove(
        &self,
        user_id: Uuid,
        movie_id: Uuid,
    ) -> Result<(), WatchlistRepositoryError> {
        let result = user_movies::Entity::delete_by_id((user_id, movie_id))
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(WatchlistRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn list(
        &self,
        user_id: Uuid,
        is_watched: bool,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<ListedMovie>, WatchlistRepositoryError> {
        let entries = user_movies::Entity::find()
            .filter(user_movies::Column::UserId.eq(user_id))
            .filter(user_movies::Column::IsWatched.eq(is_watched))
            .order_by_desc(user_movies::Column::WatchedAt)
            .offset(offset)
            .limit(sql_limit(limit))
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        self.join_movies(entries).await
    }

    async fn search_in_list(
        &self,
        user_id: Uuid,
        term: &str,
        is_watched: Option<bool>,
    ) -> Result<Vec<ListedMovie>, WatchlistRepositoryError> {
        let mut query = user_movies::Entity::find()
            .filter(user_movies::Column::UserId.eq(user_id))
            .order_by_desc(user_movies::Column::WatchedAt);

        if let Some(is_watched) = is_watched {
            query = query.filter(user_movies::Column::IsWatched.eq(is_watched));
        }

        let entries = query.all(&*self.db).await.map_err(db_err)?;
        let joined = self.join_movies(entries).await?;

        if term.is_empty() {
            return Ok(joined);
        }

        let term = term.to_lowercase();
        Ok(joined
            .into_iter()
            .filter(|row| row.movie.title.to_lowercase().contains(&term))
            .collect())
    }

    async fn count_watched(&self, user_id: Uuid) -> Result<u64, WatchlistRepositoryError> {
        user_movies::Entity::find()
            .filter(user_movies::Column::UserId.eq(user_id))
            .filter(user_movies::Column::IsWatched.eq(true))
            .count(&*self.db)
            .await
            .map_err(db_err)
    }

    async fn recent(
        &self,
        user_id: Uuid,
        limit: u64,
    ) -> Result<Vec<ListedMovie>, WatchlistRepositoryError> {
        let entries = user_movies::Entity::find()
            .filter(user_movies::Column::UserId.eq(user_id))
            .order_by_desc(user_movies::Column::WatchedAt)
            .limit(sql_limit(limit))
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        self.join_movies(entries).await
    }
}
