use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductBrands::Table)
                    .if_not_exists()
                    .col(pk_auto(ProductBrands::Id))
                    .col(string_len(ProductBrands::Name, 100))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProductTypes::Table)
                    .if_not_exists()
                    .col(pk_auto(ProductTypes::Id))
                    .col(string_len(ProductTypes::Name, 100))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(pk_auto(Products::Id))
                    .col(string_len(Products::Name, 100))
                    .col(text(Products::Description).default(""))
                    .col(double(Products::Price))
                    .col(string(Products::PictureUrl).default(""))
                    .col(integer(Products::ProductTypeId))
                    .col(integer(Products::ProductBrandId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_product_type")
                            .from(Products::Table, Products::ProductTypeId)
                            .to(ProductTypes::Table, ProductTypes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_product_brand")
                            .from(Products::Table, Products::ProductBrandId)
                            .to(ProductBrands::Table, ProductBrands::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Indexes backing the brand/type filters and the default name ordering
        manager
            .create_index(
                Index::create()
                    .name("idx_products_product_brand_id")
                    .table(Products::Table)
                    .col(Products::ProductBrandId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_product_type_id")
                    .table(Products::Table)
                    .col(Products::ProductTypeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_name")
                    .table(Products::Table)
                    .col(Products::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ProductTypes::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ProductBrands::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ProductBrands {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum ProductTypes {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Name,
    Description,
    Price,
    PictureUrl,
    ProductTypeId,
    ProductBrandId,
}
