//! Migration to create the tax_rates table.
//!
//! Only rows flagged active are selectable on new invoices; the numeric
//! rate is always re-read server-side when an invoice is saved.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TaxRates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TaxRates::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TaxRates::Name).string_len(100).not_null())
                    .col(ColumnDef::new(TaxRates::Rate).decimal_len(7, 2).not_null())
                    .col(
                        ColumnDef::new(TaxRates::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(TaxRates::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TaxRates::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TaxRates {
    Table,
    Id,
    Name,
    Rate,
    Active,
    CreatedAt,
}
