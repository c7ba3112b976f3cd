pub mod movie_repository_postgres;
pub mod sea_orm_entity;

pub use movie_repository_postgres::MovieRepositoryPostgres;
