use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Item::Table)
                    .col(
                        ColumnDef::new(Item::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(Item::Name)
                            .string_len(100)
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Item::ImageUrl)
                            .string()
                            .null()
                    )
                    .col(
                        ColumnDef::new(Item::Location)
                            .string_len(255)
                            .null()
                    )
                    .col(
                        ColumnDef::new(Item::DateFound)
                            .date()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Item::Contact)
                            .string_len(100)
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Item::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .to_owned()
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Item::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Item {
    Table,
    Id,
    Name,
    ImageUrl,
    Location,
    DateFound,
    Contact,
    CreatedAt,
}
