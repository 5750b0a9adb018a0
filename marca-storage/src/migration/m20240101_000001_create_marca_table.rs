use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Marca {
    Table,
    Id,
    Name,
    Description,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Marca::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Marca::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Marca::Name).string_len(64).not_null())
                    .col(ColumnDef::new(Marca::Description).string_len(255).null())
                    .col(ColumnDef::new(Marca::CreatedAt).timestamp().null())
                    .col(ColumnDef::new(Marca::UpdatedAt).timestamp().null())
                    .col(ColumnDef::new(Marca::DeletedAt).timestamp().null())
                    .to_owned(),
            )
            .await?;

        // Default listings filter on deleted_at; index keeps them cheap.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_marca_deleted_at")
                    .table(Marca::Table)
                    .col(Marca::DeletedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Marca::Table).to_owned())
            .await
    }
}
