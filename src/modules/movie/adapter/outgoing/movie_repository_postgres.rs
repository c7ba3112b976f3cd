use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::{Alias, Condition, Expr, Func, Query, SelectStatement};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, SqlErr, TransactionTrait,
};
use uuid::Uuid;

use super::sea_orm_entity::{movie_countries, movie_creators, movie_genres, movies};
use crate::modules::country::adapter::outgoing::sea_orm_entity as countries;
use crate::modules::genre::adapter::outgoing::sea_orm_entity as genres;
use crate::modules::movie::application::domain::{
    Movie, MovieDraft, MovieWithRelations, NamedRef,
};
use crate::modules::movie::application::ports::outgoing::{
    MovieRepository, MovieRepositoryError,
};
use crate::modules::report::adapter::outgoing::sea_orm_entity as reports;
use crate::modules::watchlist::adapter::outgoing::sea_orm_entity as user_movies;

#[derive(Debug, Clone)]
pub struct MovieRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MovieRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> MovieRepositoryError {
    MovieRepositoryError::Database(e.to_string())
}

fn write_err(e: sea_orm::DbErr) -> MovieRepositoryError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => MovieRepositoryError::Duplicate,
        _ => MovieRepositoryError::Database(e.to_string()),
    }
}

fn sql_limit(limit: u64) -> Option<u64> {
    (limit != u64::MAX).then_some(limit)
}

/// Movie ids whose linked genre names match the pattern.
fn genre_match_subquery(pattern: &str) -> SelectStatement {
    Query::select()
        .column(movie_genres::Column::MovieId)
        .from(movie_genres::Entity)
        .inner_join(
            genres::Entity,
            Expr::col((genres::Entity, genres::Column::Id))
                .equals((movie_genres::Entity, movie_genres::Column::GenreId)),
        )
        .and_where(
            Expr::expr(Func::lower(Expr::col((
                genres::Entity,
                genres::Column::Name,
            ))))
            .like(pattern),
        )
        .to_owned()
}

fn country_match_subquery(pattern: &str) -> SelectStatement {
    Query::select()
        .column(movie_countries::Column::MovieId)
        .from(movie_countries::Entity)
        .inner_join(
            countries::Entity,
            Expr::col((countries::Entity, countries::Column::Id))
                .equals((movie_countries::Entity, movie_countries::Column::CountryId)),
        )
        .and_where(
            Expr::expr(Func::lower(Expr::col((
                countries::Entity,
                countries::Column::Name,
            ))))
            .like(pattern),
        )
        .to_owned()
}

#[async_trait]
impl MovieRepository for MovieRepositoryPostgres {
    async fn insert(
        &self,
        draft: &MovieDraft,
        creator_id: Uuid,
        genre_ids: &[Uuid],
        country_ids: &[Uuid],
    ) -> Result<Movie, MovieRepositoryError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let movie = movies::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(draft.title.clone()),
            year: Set(draft.year),
            duration: Set(draft.duration),
            director: Set(draft.director.clone()),
            description: Set(draft.description.clone()),
            cover: Set(draft.cover.clone()),
            rating: Set(0.0),
            created_at: Set(chrono::Utc::now().fixed_offset()),
        }
        .insert(&txn)
        .await
        .map_err(write_err)?;

        movie_creators::ActiveModel {
            movie_id: Set(movie.id),
            user_id: Set(creator_id),
        }
        .insert(&txn)
        .await
        .map_err(write_err)?;

        if !genre_ids.is_empty() {
            let rows = genre_ids.iter().map(|genre_id| movie_genres::ActiveModel {
                movie_id: Set(movie.id),
                genre_id: Set(*genre_id),
            });
            movie_genres::Entity::insert_many(rows)
                .exec(&txn)
                .await
                .map_err(write_err)?;
        }

        if !country_ids.is_empty() {
            let rows = country_ids
                .iter()
                .map(|country_id| movie_countries::ActiveModel {
                    movie_id: Set(movie.id),
                    country_id: Set(*country_id),
                });
            movie_countries::Entity::insert_many(rows)
                .exec(&txn)
                .await
                .map_err(write_err)?;
        }

        txn.commit().await.map_err(db_err)?;

        Ok(movie.into_domain())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Movie>, MovieRepositoryError> {
        let row = movies::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(row.map(movies::Model::into_domain))
    }

    async fn find_with_relations(
        &self,
        id: Uuid,
    ) -> Result<Option<MovieWithRelations>, MovieRepositoryError> {
        let Some(movie) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let genre_rows = genres::Entity::find()
            .filter(
                genres::Column::Id.in_subquery(
                    Query::select()
                        .column(movie_genres::Column::GenreId)
                        .from(movie_genres::Entity)
                        .and_where(movie_genres::Column::MovieId.eq(id))
                        .to_owned(),
                ),
            )
            .order_by_asc(genres::Column::Name)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        let country_rows = countries::Entity::find()
            .filter(
                countries::Column::Id.in_subquery(
                    Query::select()
                        .column(movie_countries::Column::CountryId)
                        .from(movie_countries::Entity)
                        .and_where(movie_countries::Column::MovieId.eq(id))
                        .to_owned(),
                ),
            )
            .order_by_asc(countries::Column::Name)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(Some(MovieWithRelations {
            movie,
            genres: genre_rows
                .into_iter()
                .map(|g| NamedRef {
                    id: g.id,
                    name: g.name,
                })
                .collect(),
            countries: country_rows
                .into_iter()
                .map(|c| NamedRef {
                    id: c.id,
                    name: c.name,
                })
                .collect(),
        }))
    }

    async fn exists_duplicate(
        &self,
        title: &str,
        year: Option<i32>,
        director: Option<&str>,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, MovieRepositoryError> {
        let mut query = movies::Entity::find().filter(
            Expr::expr(Func::lower(Expr::col(movies::Column::Title))).eq(title.to_lowercase()),
        );

        query = match year {
            Some(year) => query.filter(movies::Column::Year.eq(year)),
            None => query.filter(movies::Column::Year.is_null()),
        };

        query = match director {
            Some(director) => query.filter(
                Expr::expr(Func::lower(Expr::col(movies::Column::Director)))
                    .eq(director.to_lowercase()),
            ),
            None => query.filter(movies::Column::Director.is_null()),
        };

        if let Some(id) = exclude_id {
            query = query.filter(movies::Column::Id.ne(id));
        }

        let count = query.count(&*self.db).await.map_err(db_err)?;
        Ok(count > 0)
    }

    async fn update(&self, id: Uuid, draft: &MovieDraft) -> Result<Movie, MovieRepositoryError> {
        let active = movies::ActiveModel {
            id: Set(id),
            title: Set(draft.title.clone()),
            year: Set(draft.year),
            duration: Set(draft.duration),
            director: Set(draft.director.clone()),
            description: Set(draft.description.clone()),
            cover: Set(draft.cover.clone()),
            ..Default::default()
        };

        let updated = active.update(&*self.db).await.map_err(write_err)?;
        Ok(updated.into_domain())
    }

    async fn genre_ids_of(&self, movie_id: Uuid) -> Result<Vec<Uuid>, MovieRepositoryError> {
        let rows = movie_genres::Entity::find()
            .filter(movie_genres::Column::MovieId.eq(movie_id))
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(rows.into_iter().map(|r| r.genre_id).collect())
    }

    async fn country_ids_of(&self, movie_id: Uuid) -> Result<Vec<Uuid>, MovieRepositoryError> {
        let rows = movie_countries::Entity::find()
            .filter(movie_countries::Column::MovieId.eq(movie_id))
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(rows.into_iter().map(|r| r.country_id).collect())
    }

    async fn add_genres(
        &self,
        movie_id: Uuid,
        genre_ids: &[Uuid],
    ) -> Result<(), MovieRepositoryError> {
        if genre_ids.is_empty() {
            return Ok(());
        }

        let rows = genre_ids.iter().map(|genre_id| movie_genres::ActiveModel {
            movie_id: Set(movie_id),
            genre_id: Set(*genre_id),
        });

        movie_genres::Entity::insert_many(rows)
            .exec(&*self.db)
            .await
            .map_err(write_err)?;
        Ok(())
    }

    async fn remove_genres(
        &self,
        movie_id: Uuid,
        genre_ids: &[Uuid],
    ) -> Result<(), MovieRepositoryError> {
        if genre_ids.is_empty() {
            return Ok(());
        }

        movie_genres::Entity::delete_many()
            .filter(movie_genres::Column::MovieId.eq(movie_id))
            .filter(movie_genres::Column::GenreId.is_in(genre_ids.to_vec()))
            .exec(&*self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn add_countries(
        &self,
        movie_id: Uuid,
        country_ids: &[Uuid],
    ) -> Result<(), MovieRepositoryError> {
        if country_ids.is_empty() {
            return Ok(());
        }

        let rows = country_ids
            .iter()
            .map(|country_id| movie_countries::ActiveModel {
                movie_id: Set(movie_id),
                country_id: Set(*country_id),
            });

        movie_countries::Entity::insert_many(rows)
            .exec(&*self.db)
            .await
            .map_err(write_err)?;
        Ok(())
    }

    async fn remove_countries(
        &self,
        movie_id: Uuid,
        country_ids: &[Uuid],
    ) -> Result<(), MovieRepositoryError> {
        if country_ids.is_empty() {
            return Ok(());
        }

        movie_countries::Entity::delete_many()
            .filter(movie_countries::Column::MovieId.eq(movie_id))
            .filter(movie_countries::Column::CountryId.is_in(country_ids.to_vec()))
            .exec(&*self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn delete_cascade(&self, movie_id: Uuid) -> Result<(), MovieRepositoryError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        reports::Entity::delete_many()
            .filter(reports::Column::MovieId.eq(movie_id))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        user_movies::Entity::delete_many()
            .filter(user_movies::Column::MovieId.eq(movie_id))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        movie_genres::Entity::delete_many()
            .filter(movie_genres::Column::MovieId.eq(movie_id))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        movie_countries::Entity::delete_many()
            .filter(movie_countries::Column::MovieId.eq(movie_id))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        movie_creators::Entity::delete_many()
            .filter(movie_creators::Column::MovieId.eq(movie_id))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        let result = movies::Entity::delete_by_id(movie_id)
            .exec(&txn)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(MovieRepositoryError::NotFound);
        }

        txn.commit().await.map_err(db_err)?;
        Ok(())
    }

    async fn ratings_for(&self, movie_id: Uuid) -> Result<Vec<i16>, MovieRepositoryError> {
        let rows = user_movies::Entity::find()
            .filter(user_movies::Column::MovieId.eq(movie_id))
            .filter(user_movies::Column::Rating.is_not_null())
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(rows.into_iter().filter_map(|r| r.rating).collect())
    }

    async fn set_rating(&self, movie_id: Uuid, rating: f64) -> Result<(), MovieRepositoryError> {
        movies::Entity::update_many()
            .col_expr(movies::Column::Rating, Expr::value(rating))
            .filter(movies::Column::Id.eq(movie_id))
            .exec(&*self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn search(
        &self,
        term: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Movie>, MovieRepositoryError> {
        let pattern = format!("%{}%", term.to_lowercase());

        let condition = Condition::any()
            .add(Expr::expr(Func::lower(Expr::col(movies::Column::Title))).like(&pattern))
            .add(Expr::expr(Func::lower(Expr::col(movies::Column::Director))).like(&pattern))
            .add(
                Expr::expr(Func::lower(Expr::col(movies::Column::Description))).like(&pattern),
            )
            .add(
                Expr::expr(Expr::col(movies::Column::Year).cast_as(Alias::new("TEXT")))
                    .like(&pattern),
            )
            .add(movies::Column::Id.in_subquery(genre_match_subquery(&pattern)))
            .add(movies::Column::Id.in_subquery(country_match_subquery(&pattern)));

        let rows = movies::Entity::find()
            .filter(condition)
            .order_by_desc(movies::Column::Rating)
            .offset(offset)
            .limit(sql_limit(limit))
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(rows.into_iter().map(movies::Model::into_domain).collect())
    }

    async fn find_all(&self, offset: u64, limit: u64) -> Result<Vec<Movie>, MovieRepositoryError> {
        let rows = movies::Entity::find()
            .order_by_desc(movies::Column::Rating)
            .offset(offset)
            .limit(sql_limit(limit))
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(rows.into_iter().map(movies::Model::into_domain).collect())
    }

    async fn is_creator(
        &self,
        movie_id: Uuid,
        user_id: Uuid,
    ) -> Result<bool, MovieRepositoryError> {
        let row = movie_creators::Entity::find()
            .filter(movie_creators::Column::MovieId.eq(movie_id))
            .filter(movie_creators::Column::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(row.is_some())
    }

    async fn creator_of(&self, movie_id: Uuid) -> Result<Option<Uuid>, MovieRepositoryError> {
        let row = movie_creators::Entity::find()
            .filter(movie_creators::Column::MovieId.eq(movie_id))
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(row.map(|r| r.user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn movie_model(title: &str, rating: f64) -> movies::Model {
        movies::Model {
            id: Uuid::new_v4(),
            title: title.to_string(),
            year: Some(1979),
            duration: Some(117),
            director: Some("Ridley Scott".to_string()),
            description: None,
            cover: None,
            rating,
            created_at: chrono::Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn find_by_id_maps_columns_to_domain() {
        let model = movie_model("Alien", 8.5);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model.clone()]])
            .into_connection();

        let repo = MovieRepositoryPostgres::new(Arc::new(db));

        let movie = repo.find_by_id(model.id).await.unwrap().unwrap();

        assert_eq!(movie.title, "Alien");
        assert_eq!(movie.year, Some(1979));
        assert_eq!(movie.rating, 8.5);
    }

    #[tokio::test]
    async fn find_all_preserves_row_order() {
        let best = movie_model("Alien", 9.0);
        let rest = movie_model("Prometheus", 6.5);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![best.clone(), rest.clone()]])
            .into_connection();

        let repo = MovieRepositoryPostgres::new(Arc::new(db));

        let rows = repo.find_all(0, 100).await.unwrap();

        assert_eq!(rows[0].title, "Alien");
        assert_eq!(rows[1].title, "Prometheus");
    }

    #[tokio::test]
    async fn is_creator_checks_join_row() {
        let movie_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![movie_creators::Model { movie_id, user_id }]])
            .append_query_results(vec![Vec::<movie_creators::Model>::new()])
            .into_connection();

        let repo = MovieRepositoryPostgres::new(Arc::new(db));

        assert!(repo.is_creator(movie_id, user_id).await.unwrap());
        assert!(!repo.is_creator(movie_id, Uuid::new_v4()).await.unwrap());
    }

    #[tokio::test]
    async fn ratings_for_drops_null_ratings() {
        let movie_id = Uuid::new_v4();
        let rated = user_movies::Model {
            user_id: Uuid::new_v4(),
            movie_id,
            is_watched: true,
            rating: Some(8),
            watched_at: chrono::Utc::now().fixed_offset(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![rated]])
            .into_connection();

        let repo = MovieRepositoryPostgres::new(Arc::new(db));

        let ratings = repo.ratings_for(movie_id).await.unwrap();
        assert_eq!(ratings, vec![8]);
    }

    #[tokio::test]
    async fn set_rating_issues_update() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = MovieRepositoryPostgres::new(Arc::new(db));

        repo.set_rating(Uuid::new_v4(), 7.5).await.unwrap();
    }
}
