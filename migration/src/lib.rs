pub use sea_orm_migration::prelude::*;

mod m20250512_091200_create_users_table;
mod m20250512_093015_create_genres_table;
mod m20250512_093418_create_countries_table;
mod m20250513_101502_create_movies_table;
mod m20250513_103040_create_movie_genres_table;
mod m20250513_103315_create_movie_countries_table;
mod m20250513_103558_create_movie_creators_table;
mod m20250514_120211_create_user_movies_table;
mod m20250515_084710_create_reports_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250512_091200_create_users_table::Migration),
            Box::new(m20250512_093015_create_genres_table::Migration),
            Box::new(m20250512_093418_create_countries_table::Migration),
            Box::new(m20250513_101502_create_movies_table::Migration),
            Box::new(m20250513_103040_create_movie_genres_table::Migration),
            Box::new(m20250513_103315_create_movie_countries_table::Migration),
            Box::new(m20250513_103558_create_movie_creators_table::Migration),
            Box::new(m20250514_120211_create_user_movies_table::Migration),
            Box::new(m20250515_084710_create_reports_table::Migration),
        ]
    }
}
