//! Migration to create the invoice_items table.
//!
//! Child rows of an invoice header. Quantity and unit price keep up to 4
//! fractional digits; line_total is stored already rounded to 2.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InvoiceItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InvoiceItems::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(InvoiceItems::InvoiceId).integer().not_null())
                    .col(
                        ColumnDef::new(InvoiceItems::Description)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InvoiceItems::Quantity)
                            .decimal_len(14, 4)
                            .not_null(),
                    )
                    .col(ColumnDef::new(InvoiceItems::Unit).string_len(10).not_null())
                    .col(
                        ColumnDef::new(InvoiceItems::UnitPrice)
                            .decimal_len(14, 4)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InvoiceItems::LineTotal)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(InvoiceItems::Taxed).boolean().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoice_items_invoice")
                            .from(InvoiceItems::Table, InvoiceItems::InvoiceId)
                            .to(Invoices::Table, Invoices::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_invoice_items_invoice_id")
                    .table(InvoiceItems::Table)
                    .col(InvoiceItems::InvoiceId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InvoiceItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum InvoiceItems {
    Table,
    Id,
    InvoiceId,
    Description,
    Quantity,
    Unit,
    UnitPrice,
    LineTotal,
    Taxed,
}

#[derive(DeriveIden)]
enum Invoices {
    Table,
    Id,
}
