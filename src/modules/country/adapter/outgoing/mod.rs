pub mod country_repository_postgres;
pub mod sea_orm_entity;

pub use country_repository_postgres::CountryRepositoryPostgres;
