use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, SqlErr,
};
use uuid::Uuid;

use super::sea_orm_entity as genres;
use crate::modules::genre::application::domain::Genre;
use crate::modules::genre::application::ports::outgoing::{
    GenreRepository, GenreRepositoryError,
};

#[derive(Debug, Clone)]
pub struct GenreRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl GenreRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> GenreRepositoryError {
    GenreRepositoryError::Database(e.to_string())
}

fn write_err(e: sea_orm::DbErr) -> GenreRepositoryError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => GenreRepositoryError::DuplicateName,
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => GenreRepositoryError::InUse,
        _ => GenreRepositoryError::Database(e.to_string()),
    }
}

// Page::all() windows arrive as u64::MAX, which must not reach the SQL layer.
fn sql_limit(limit: u64) -> Option<u64> {
    (limit != u64::MAX).then_some(limit)
}

#[async_trait]
impl GenreRepository for GenreRepositoryPostgres {
    async fn find_all(&self, offset: u64, limit: u64) -> Result<Vec<Genre>, GenreRepositoryError> {
        let rows = genres::Entity::find()
            .order_by_asc(genres::Column::Name)
            .offset(offset)
            .limit(sql_limit(limit))
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(rows.into_iter().map(genres::Model::into_domain).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Genre>, GenreRepositoryError> {
        let row = genres::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(row.map(genres::Model::into_domain))
    }

    async fn exists_by_name(
        &self,
        name: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, GenreRepositoryError> {
        let mut query = genres::Entity::find().filter(
            Expr::expr(Func::lower(Expr::col(genres::Column::Name))).eq(name.to_lowercase()),
        );

        if let Some(id) = exclude_id {
            query = query.filter(genres::Column::Id.ne(id));
        }

        let count = query.count(&*self.db).await.map_err(db_err)?;
        Ok(count > 0)
    }

    async fn insert(&self, name: &str) -> Result<Genre, GenreRepositoryError> {
        let active = genres::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
        };

        let inserted = active.insert(&*self.db).await.map_err(write_err)?;
        Ok(inserted.into_domain())
    }

    async fn rename(&self, id: Uuid, name: &str) -> Result<Genre, GenreRepositoryError> {
        let active = genres::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
        };

        let updated = active.update(&*self.db).await.map_err(write_err)?;
        Ok(updated.into_domain())
    }

    async fn delete(&self, id: Uuid) -> Result<(), GenreRepositoryError> {
        let result = genres::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(write_err)?;

        if result.rows_affected == 0 {
            return Err(GenreRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn dictionary(&self) -> Result<HashMap<Uuid, String>, GenreRepositoryError> {
        let rows = genres::Entity::find().all(&*self.db).await.map_err(db_err)?;

        Ok(rows.into_iter().map(|g| (g.id, g.name)).collect())
    }

    async fn search(
        &self,
        term: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Genre>, GenreRepositoryError> {
        let pattern = format!("%{}%", term.to_lowercase());

        let rows = genres::Entity::find()
            .filter(Expr::expr(Func::lower(Expr::col(genres::Column::Name))).like(pattern))
            .offset(offset)
            .limit(sql_limit(limit))
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(rows.into_iter().map(genres::Model::into_domain).collect())
    }
}
