use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, SqlErr,
};
use uuid::Uuid;

use super::sea_orm_entity as countries;
use crate::modules::country::application::domain::Country;
use crate::modules::country::application::ports::outgoing::{
    CountryRepository, CountryRepositoryError,
};

#[derive(Debug, Clone)]
pub struct CountryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CountryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> CountryRepositoryError {
    CountryRepositoryError::Database(e.to_string())
}

fn write_err(e: sea_orm::DbErr) -> CountryRepositoryError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => CountryRepositoryError::DuplicateName,
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => CountryRepositoryError::InUse,
        _ => CountryRepositoryError::Database(e.to_string()),
    }
}

fn sql_limit(limit: u64) -> Option<u64> {
    (limit != u64::MAX).then_some(limit)
}

#[async_trait]
impl CountryRepository for CountryRepositoryPostgres {
    async fn find_all(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Country>, CountryRepositoryError> {
        let rows = countries::Entity::find()
            .order_by_asc(countries::Column::Name)
            .offset(offset)
            .limit(sql_limit(limit))
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(rows.into_iter().map(countries::Model::into_domain).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Country>, CountryRepositoryError> {
        let row = countries::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(row.map(countries::Model::into_domain))
    }

    async fn exists_by_name(
        &self,
        name: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, CountryRepositoryError> {
        let mut query = countries::Entity::find().filter(
            Expr::expr(Func::lower(Expr::col(countries::Column::Name))).eq(name.to_lowercase()),
        );

        if let Some(id) = exclude_id {
            query = query.filter(countries::Column::Id.ne(id));
        }

        let count = query.count(&*self.db).await.map_err(db_err)?;
        Ok(count > 0)
    }

    async fn insert(&self, name: &str) -> Result<Country, CountryRepositoryError> {
        let active = countries::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
        };

        let inserted = active.insert(&*self.db).await.map_err(write_err)?;
        Ok(inserted.into_domain())
    }

    async fn rename(&self, id: Uuid, name: &str) -> Result<Country, CountryRepositoryError> {
        let active = countries::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
        };

        let updated = active.update(&*self.db).await.map_err(write_err)?;
        Ok(updated.into_domain())
    }

    async fn delete(&self, id: Uuid) -> Result<(), CountryRepositoryError> {
        let result = countries::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(write_err)?;

        if result.rows_affected == 0 {
            return Err(CountryRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn dictionary(&self) -> Result<HashMap<Uuid, String>, CountryRepositoryError> {
        let rows = countries::Entity::find()
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(rows.into_iter().map(|c| (c.id, c.name)).collect())
    }

    async fn search(
        &self,
        term: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Country>, CountryRepositoryError> {
        let pattern = format!("%{}%", term.to_lowercase());

        let rows = countries::Entity::find()
            .filter(Expr::expr(Func::lower(Expr::col(countries::Column::Name))).like(pattern))
            .offset(offset)
            .limit(sql_limit(limit))
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(rows.into_iter().map(countries::Model::into_domain).collect())
    }
}
