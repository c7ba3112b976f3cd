use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Movies::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Movies::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Movies::Year).integer().null())
                    .col(ColumnDef::new(Movies::Duration).integer().null())
                    .col(ColumnDef::new(Movies::Director).string_len(255).null())
                    .col(ColumnDef::new(Movies::Description).text().null())
                    .col(ColumnDef::new(Movies::Cover).text().null())
                    .col(
                        ColumnDef::new(Movies::Rating)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Movies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // ============================================
        // INDEXES
        // ============================================

        // 1. Duplicate detection: the same title/year/director may exist
        //    only once. NULLS NOT DISTINCT makes two NULL years (or
        //    directors) count as the same film.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_movies_title_year_director
                ON movies (lower(title), year, lower(director))
                NULLS NOT DISTINCT;
                "#,
            )
            .await?;

        // 2. Title search goes through lower() LIKE.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_movies_title_lower
                ON movies (lower(title));
                "#,
            )
            .await?;

        // 3. Newest-first listing.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_movies_created_at
                ON movies (created_at DESC);
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
                DROP INDEX IF EXISTS idx_movies_title_year_director;
                DROP INDEX IF EXISTS idx_movies_title_lower;
                DROP INDEX IF EXISTS idx_movies_created_at;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Movies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Movies {
    Table,
    Id,
    Title,
    Year,
    Duration,
    Director,
    Description,
    Cover,
    Rating,
    CreatedAt,
}
