use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::watchlist::application::domain::ListEntry;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user_movies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,

    #[sea_orm(primary_key, auto_increment = false)]
    pub movie_id: Uuid,

    pub is_watched: bool,

    /// NULL for to-watch entries and unrated watched entries.
    pub rating: Option<i16>,

    pub watched_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn into_domain(self) -> ListEntry {
        ListEntry {
            user_id: self.user_id,
            movie_id: self.movie_id,
            is_watched: self.is_watched,
            rating: self.rating,
            watched_at: self.watched_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
