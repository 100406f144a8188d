//! Migration to create the invoices table.
//!
//! The invoice header carries the server-computed aggregates and a
//! composite unique index on (company_id, invoice_number): invoice numbers
//! are unique per issuing company, and the constraint is what turns a
//! duplicate submission into a conflict instead of a second row.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Invoices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Invoices::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Invoices::CompanyId).integer().not_null())
                    .col(ColumnDef::new(Invoices::ClientId).integer().not_null())
                    .col(ColumnDef::new(Invoices::TaxRateId).integer().null())
                    .col(
                        ColumnDef::new(Invoices::InvoiceNumber)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Invoices::InvoiceDate).date().not_null())
                    .col(ColumnDef::new(Invoices::DueDate).date().not_null())
                    .col(ColumnDef::new(Invoices::Status).string_len(20).not_null())
                    .col(
                        ColumnDef::new(Invoices::Subtotal)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Invoices::Tax).decimal_len(14, 2).not_null())
                    .col(
                        ColumnDef::new(Invoices::Total)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Invoices::Notes).text().null())
                    .col(
                        ColumnDef::new(Invoices::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoices_company")
                            .from(Invoices::Table, Invoices::CompanyId)
                            .to(Companies::Table, Companies::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoices_client")
                            .from(Invoices::Table, Invoices::ClientId)
                            .to(Clients::Table, Clients::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoices_tax_rate")
                            .from(Invoices::Table, Invoices::TaxRateId)
                            .to(TaxRates::Table, TaxRates::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_invoices_company_invoice_number")
                    .table(Invoices::Table)
                    .col(Invoices::CompanyId)
                    .col(Invoices::InvoiceNumber)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Invoices::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Invoices {
    Table,
    Id,
    CompanyId,
    ClientId,
    TaxRateId,
    InvoiceNumber,
    InvoiceDate,
    DueDate,
    Status,
    Subtotal,
    Tax,
    Total,
    Notes,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Companies {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Clients {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum TaxRates {
    Table,
    Id,
}
