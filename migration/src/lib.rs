//! Database migrations for the invoicing service.
//!
//! This module contains all database migrations using SeaORM Migration.

pub use sea_orm_migration::prelude::*;

mod m2025_06_01_000001_create_companies;
mod m2025_06_01_000002_create_clients;
mod m2025_06_01_000003_create_tax_rates;
mod m2025_06_01_000100_create_invoices;
mod m2025_06_01_000101_create_invoice_items;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2025_06_01_000001_create_companies::Migration),
            Box::new(m2025_06_01_000002_create_clients::Migration),
            Box::new(m2025_06_01_000003_create_tax_rates::Migration),
            Box::new(m2025_06_01_000100_create_invoices::Migration),
            Box::new(m2025_06_01_000101_create_invoice_items::Migration),
        ]
    }
}
