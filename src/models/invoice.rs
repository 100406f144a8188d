//! Invoice entity model
//!
//! This module contains the SeaORM entity model for the invoices table.
//! The header row carries server-computed aggregates only; once created it
//! is never mutated by this service.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;
use rust_decimal::Decimal;

/// Lifecycle state assigned to every newly captured invoice.
pub const STATUS_DRAFT: &str = "Draft";

/// Invoice aggregate root (header row)
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "invoices")]
pub struct Model {
    /// Unique identifier for the invoice (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Issuing company
    pub company_id: i32,

    /// Billed client
    pub client_id: i32,

    /// Selected tax rate, if any
    pub tax_rate_id: Option<i32>,

    /// Invoice number, unique per issuing company
    pub invoice_number: String,

    /// Date the invoice was issued
    pub invoice_date: Date,

    /// Date payment is due
    pub due_date: Date,

    /// Lifecycle status, fixed to "Draft" at creation
    pub status: String,

    /// Sum of all item line totals
    pub subtotal: Decimal,

    /// Tax on the taxable base
    pub tax: Decimal,

    /// subtotal + tax
    pub total: Decimal,

    /// Free-form notes (optional)
    pub notes: Option<String>,

    /// Timestamp when the invoice was captured
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::company::Entity",
        from = "Column::CompanyId",
        to = "super::company::Column::Id"
    )]
    Company,
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::ClientId",
        to = "super::client::Column::Id"
    )]
    Client,
    #[sea_orm(
        belongs_to = "super::tax_rate::Entity",
        from = "Column::TaxRateId",
        to = "super::tax_rate::Column::Id"
    )]
    TaxRate,
    #[sea_orm(has_many = "super::invoice_item::Entity")]
    InvoiceItem,
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::tax_rate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TaxRate.def()
    }
}

impl Related<super::invoice_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InvoiceItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
