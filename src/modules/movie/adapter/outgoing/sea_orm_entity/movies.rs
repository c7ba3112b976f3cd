use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::movie::application::domain::Movie;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "movies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub title: String,
    pub year: Option<i32>,
    pub duration: Option<i32>,
    pub director: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    pub cover: Option<String>,

    /// Derived mean of user ratings, maintained by the application.
    pub rating: f64,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn into_domain(self) -> Movie {
        Movie {
            id: self.id,
            title: self.title,
            year: self.year,
            duration: self.duration,
            director: self.director,
            description: self.description,
            cover: self.cover,
            rating: self.rating,
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
