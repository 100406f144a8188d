//! Tax rate entity model
//!
//! This module contains the SeaORM entity model for the tax_rates table.
//! Only rows flagged active are selectable; the numeric rate is always
//! re-read server-side, never taken from the request.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;
use rust_decimal::Decimal;

/// Tax rate reference entity (rate is a percentage, e.g. 15.00)
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tax_rates")]
pub struct Model {
    /// Unique identifier for the tax rate (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Display name, e.g. "VAT"
    pub name: String,

    /// Percentage applied to the taxable base
    pub rate: Decimal,

    /// Whether the rate is selectable on new invoices
    pub active: bool,

    /// Timestamp when the rate was created
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::invoice::Entity")]
    Invoice,
}

impl Related<super::invoice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Invoice.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
