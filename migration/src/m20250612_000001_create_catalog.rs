use sea_orm_migration::{prelude::*, schema::*};

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
                    .col(pk_auto(Movies::Id))
                    .col(string_len_null(Movies::GraphId, 100))
                    .col(string_len(Movies::Title, 200))
                    .col(integer(Movies::Released))
                    .col(integer_null(Movies::Rating))
                    .col(string_len_null(Movies::Summary, 2000))
                    .col(string_len_null(Movies::Tagline, 500))
                    .col(boolean(Movies::IsFavorite).default(false))
                    .col(big_integer_null(Movies::FavoritedAt))
                    .col(integer_null(Movies::UserRating))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movies_title")
                    .table(Movies::Table)
                    .col(Movies::Title)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movies_released")
                    .table(Movies::Table)
                    .col(Movies::Released)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Persons::Table)
                    .if_not_exists()
                    .col(pk_auto(Persons::Id))
                    .col(string_len_null(Persons::GraphId, 100))
                    .col(string_len(Persons::Name, 100))
                    .col(integer_null(Persons::Birthday))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_persons_name")
                    .table(Persons::Table)
                    .col(Persons::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Genres::Table)
                    .if_not_exists()
                    .col(pk_auto(Genres::Id))
                    .col(string_len_null(Genres::GraphId, 100))
                    .col(string_len(Genres::Name, 50))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_genres_name_unique")
                    .table(Genres::Table)
                    .col(Genres::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Genres::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Persons::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Movies::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Movies {
    Table,
    Id,
    GraphId,
    Title,
    Released,
    Rating,
    Summary,
    Tagline,
    IsFavorite,
    FavoritedAt,
    UserRating,
}

#[derive(DeriveIden)]
enum Persons {
    Table,
    Id,
    GraphId,
    Name,
    Birthday,
}

#[derive(DeriveIden)]
enum Genres {
    Table,
    Id,
    GraphId,
    Name,
}
