use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, SqlErr,
};
use uuid::Uuid;

use super::sea_orm_entity::users;
use crate::modules::auth::application::domain::User;
use crate::modules::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};

#[derive(Debug, Clone)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> UserRepositoryError {
    UserRepositoryError::DatabaseError(e.to_string())
}

/// The unique indexes on lower(username) and lower(email) surface here.
fn write_err(e: sea_orm::DbErr) -> UserRepositoryError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => UserRepositoryError::UserAlreadyExists,
        _ => UserRepositoryError::DatabaseError(e.to_string()),
    }
}

fn sql_limit(limit: u64) -> Option<u64> {
    (limit != u64::MAX).then_some(limit)
}

/// A ban counts as active while its expiry lies in the future.
fn ban_condition(banned: bool) -> Condition {
    let now = Utc::now().fixed_offset();
    if banned {
        Condition::all().add(users::Column::BannedUntil.gt(now))
    } else {
        Condition::any()
            .add(users::Column::BannedUntil.is_null())
            .add(users::Column::BannedUntil.lte(now))
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn insert(&self, user: User) -> Result<User, UserRepositoryError> {
        let active = users::ActiveModel {
            id: Set(user.id),
            username: Set(user.username.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            role: Set(user.role.as_str().to_string()),
            banned_until: Set(user.banned_until.map(|t| t.fixed_offset())),
            created_at: Set(user.created_at.fixed_offset()),
        };

        let inserted = active.insert(&*self.db).await.map_err(write_err)?;
        Ok(inserted.into_domain())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, UserRepositoryError> {
        let row = users::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(row.map(users::Model::into_domain))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        let row = users::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(users::Column::Email)))
                    .eq(email.to_lowercase()),
            )
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(row.map(users::Model::into_domain))
    }

    async fn find_all(
        &self,
        banned: Option<bool>,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<User>, UserRepositoryError> {
        let mut query = users::Entity::find();
        if let Some(banned) = banned {
            query = query.filter(ban_condition(banned));
        }

        let rows = query
            .order_by_asc(users::Column::Username)
            .offset(offset)
            .limit(sql_limit(limit))
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(rows.into_iter().map(users::Model::into_domain).collect())
    }

    async fn search(
        &self,
        term: &str,
        banned: Option<bool>,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<User>, UserRepositoryError> {
        let pattern = format!("%{}%", term.to_lowercase());

        let mut query = users::Entity::find()
            .filter(Expr::expr(Func::lower(Expr::col(users::Column::Username))).like(&pattern));
        if let Some(banned) = banned {
            query = query.filter(ban_condition(banned));
        }

        let rows = query
            .order_by_asc(users::Column::Username)
            .offset(offset)
            .limit(sql_limit(limit))
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(rows.into_iter().map(users::Model::into_domain).collect())
    }

    async fn set_ban(
        &self,
        user_id: Uuid,
        banned_until: Option<DateTime<Utc>>,
    ) -> Result<User, UserRepositoryError> {
        let row = users::Entity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(db_err)?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let mut active: users::ActiveModel = row.into();
        active.banned_until = Set(banned_until.map(|t| t.fixed_offset()));

        let updated = active.update(&*self.db).await.map_err(db_err)?;
        Ok(updated.into_domain())
    }

    async fn delete(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        let result = users::Entity::delete_by_id(user_id)
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }
        Ok(())
    }
}
