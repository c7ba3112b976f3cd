use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::genre::application::domain::Genre;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "genres")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub name: String,
}

impl Model {
    pub fn into_domain(self) -> Genre {
        Genre {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
