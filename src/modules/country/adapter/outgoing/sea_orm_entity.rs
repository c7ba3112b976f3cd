use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::country::application::domain::Country;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "countries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub name: String,
}

impl Model {
    pub fn into_domain(self) -> Country {
        Country {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
