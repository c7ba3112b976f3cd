use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MovieCreators::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(MovieCreators::MovieId).uuid().not_null())
                    .col(ColumnDef::new(MovieCreators::UserId).uuid().not_null())
                    // Composite primary key
                    .primary_key(
                        Index::create()
                            .col(MovieCreators::MovieId)
                            .col(MovieCreators::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_creators_movie_id")
                            .from(MovieCreators::Table, MovieCreators::MovieId)
                            .to(Movies::Table, Movies::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_creators_user_id")
                            .from(MovieCreators::Table, MovieCreators::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Fast lookup: everything a user has added
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_movie_creators_user_id
                ON movie_creators (user_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_movie_creators_user_id")
            .await?;

        manager
            .drop_table(Table::drop().table(MovieCreators::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MovieCreators {
    Table,
    MovieId,
    UserId,
}

#[derive(DeriveIden)]
enum Movies {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
