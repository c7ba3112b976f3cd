use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::sea_orm_entity as reports;
use crate::modules::movie::adapter::outgoing::sea_orm_entity::movies;
use crate::modules::report::application::domain::{Report, ReportView};
use crate::modules::report::application::ports::outgoing::{
    ReportRepository, ReportRepositoryError,
};

#[derive(Debug, Clone)]
pub struct ReportRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReportRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Resolves movie titles for a batch of reports, keeping report order.
    async fn into_views(
        &self,
        rows: Vec<reports::Model>,
    ) -> Result<Vec<ReportView>, ReportRepositoryError> {
        if rows.is_empty() {
            return Ok(vec![]);
        }

        let ids: Vec<Uuid> = rows.iter().map(|r| r.movie_id).collect();

        let titles: HashMap<Uuid, String> = movies::Entity::find()
            .filter(movies::Column::Id.is_in(ids))
            .all(&*self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(|m| (m.id, m.title))
            .collect();

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                titles.get(&row.movie_id).map(|title| ReportView {
                    id: row.id,
                    movie_id: row.movie_id,
                    movie_title: title.clone(),
                    user_id: row.user_id,
                    comment: row.comment,
                    created_at: row.created_at.into(),
                })
            })
            .collect())
    }
}

fn db_err(e: sea_orm::DbErr) -> ReportRepositoryError {
    ReportRepositoryError::Database(e.to_string())
}

#[async_trait]
impl ReportRepository for ReportRepositoryPostgres {
    async fn insert(&self, report: Report) -> Result<Report, ReportRepositoryError> {
        let active = reports::ActiveModel {
            id: Set(report.id),
            movie_id: Set(report.movie_id),
            user_id: Set(report.user_id),
            comment: Set(report.comment.clone()),
            created_at: Set(report.created_at.fixed_offset()),
        };

        reports::Entity::insert(active)
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(report)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ReportRepositoryError> {
        let result = reports::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(ReportRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<ReportView>, ReportRepositoryError> {
        let rows = reports::Entity::find()
            .order_by_desc(reports::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        self.into_views(rows).await
    }

    async fn for_movie(&self, movie_id: Uuid) -> Result<Vec<Report>, ReportRepositoryError> {
        let rows = reports::Entity::find()
            .filter(reports::Column::MovieId.eq(movie_id))
            .order_by_desc(reports::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(rows.into_iter().map(reports::Model::into_domain).collect())
    }

    async fn filter(
        &self,
        start: DateTime<Utc>,
        end_exclusive: DateTime<Utc>,
    ) -> Result<Vec<ReportView>, ReportRepositoryError> {
        let rows = reports::Entity::find()
            .filter(reports::Column::CreatedAt.gte(start.fixed_offset()))
            .filter(reports::Column::CreatedAt.lt(end_exclusive.fixed_offset()))
            .order_by_desc(reports::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        self.into_views(rows).await
    }

    async fn movie_exists(&self, movie_id: Uuid) -> Result<bool, ReportRepositoryError> {
        let row = movies::Entity::find_by_id(movie_id)
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(row.is_some())
    }
}
