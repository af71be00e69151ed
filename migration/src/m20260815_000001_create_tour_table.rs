use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tour::Table)
                    .if_not_exists()
                    .col(pk_auto(Tour::Id))
                    .col(string_uniq(Tour::Name))
                    .col(string(Tour::Slug))
                    .col(integer(Tour::Duration))
                    .col(integer(Tour::MaxGroupSize))
                    .col(string(Tour::Difficulty))
                    .col(double(Tour::RatingsAverage).default(4.5))
                    .col(integer(Tour::RatingsQuantity).default(0))
                    .col(double(Tour::Price))
                    .col(double(Tour::PriceDiscount).default(0.0))
                    .col(string(Tour::Summary))
                    .col(text_null(Tour::Description))
                    .col(string(Tour::ImageCover))
                    .col(json(Tour::Images))
                    .col(
                        timestamp(Tour::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(json(Tour::StartDates))
                    .col(boolean(Tour::SecretTour).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tour::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Tour {
    Table,
    Id,
    Name,
    Slug,
    Duration,
    MaxGroupSize,
    Difficulty,
    RatingsAverage,
    RatingsQuantity,
    Price,
    PriceDiscount,
    Summary,
    Description,
    ImageCover,
    Images,
    CreatedAt,
    StartDates,
    SecretTour,
}
