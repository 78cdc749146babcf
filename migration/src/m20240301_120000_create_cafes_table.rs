use entity::cafes::{self, NAME_MAX_LEN, TEXT_MAX_LEN, URL_MAX_LEN};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(cafes::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(cafes::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(cafes::Column::Name)
                            .string_len(NAME_MAX_LEN)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(cafes::Column::MapUrl)
                            .string_len(URL_MAX_LEN)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(cafes::Column::ImgUrl)
                            .string_len(URL_MAX_LEN)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(cafes::Column::Location)
                            .string_len(TEXT_MAX_LEN)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(cafes::Column::Seats)
                            .string_len(TEXT_MAX_LEN)
                            .not_null(),
                    )
                    .col(ColumnDef::new(cafes::Column::HasToilet).boolean().not_null())
                    .col(ColumnDef::new(cafes::Column::HasWifi).boolean().not_null())
                    .col(ColumnDef::new(cafes::Column::HasSockets).boolean().not_null())
                    .col(
                        ColumnDef::new(cafes::Column::CanTakeCalls)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(cafes::Column::CoffeePrice)
                            .string_len(TEXT_MAX_LEN)
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(cafes::Entity).to_owned())
            .await
    }
}
