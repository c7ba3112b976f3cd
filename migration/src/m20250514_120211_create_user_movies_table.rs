use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserMovies::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserMovies::UserId).uuid().not_null())
                    .col(ColumnDef::new(UserMovies::MovieId).uuid().not_null())
                    .col(
                        ColumnDef::new(UserMovies::IsWatched)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(UserMovies::Rating).small_integer().null())
                    .col(
                        ColumnDef::new(UserMovies::WatchedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // One row per user/movie pair
                    .primary_key(
                        Index::create()
                            .col(UserMovies::UserId)
                            .col(UserMovies::MovieId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_movies_user_id")
                            .from(UserMovies::Table, UserMovies::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_movies_movie_id")
                            .from(UserMovies::Table, UserMovies::MovieId)
                            .to(Movies::Table, Movies::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Personal ratings stay on the 1..10 scale.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE user_movies
                ADD CONSTRAINT chk_user_movies_rating
                CHECK (rating IS NULL OR (rating >= 1 AND rating <= 10));
                "#,
            )
            .await?;

        // Average recalculation reads all ratings for one movie.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_user_movies_movie_id
                ON user_movies (movie_id);
                "#,
            )
            .await?;

        // Activity feed: newest watched entries per user.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_user_movies_watched
                ON user_movies (user_id, watched_at DESC)
                WHERE is_watched = true;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_user_movies_movie_id;
                DROP INDEX IF EXISTS idx_user_movies_watched;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserMovies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserMovies {
    Table,
    UserId,
    MovieId,
    IsWatched,
    Rating,
    WatchedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Movies {
    Table,
    Id,
}
