pub mod genre_repository_postgres;
pub mod sea_orm_entity;

pub use genre_repository_postgres::GenreRepositoryPostgres;
