use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MovieCountries::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(MovieCountries::MovieId).uuid().not_null())
                    .col(ColumnDef::new(MovieCountries::CountryId).uuid().not_null())
                    // Composite primary key
                    .primary_key(
                        Index::create()
                            .col(MovieCountries::MovieId)
                            .col(MovieCountries::CountryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_countries_movie_id")
                            .from(MovieCountries::Table, MovieCountries::MovieId)
                            .to(Movies::Table, Movies::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_countries_country_id")
                            .from(MovieCountries::Table, MovieCountries::CountryId)
                            .to(Countries::Table, Countries::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Fast lookup: all movies for a country
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_movie_countries_country_id
                ON movie_countries (country_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_movie_countries_country_id")
            .await?;

        manager
            .drop_table(Table::drop().table(MovieCountries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MovieCountries {
    Table,
    MovieId,
    CountryId,
}

#[derive(DeriveIden)]
enum Movies {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Countries {
    Table,
    Id,
}
