//! Invoice item entity model
//!
//! Child rows of an invoice header, inserted in submission order.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use rust_decimal::Decimal;

/// Invoice line item
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "invoice_items")]
pub struct Model {
    /// Unique identifier for the item (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Parent invoice
    pub invoice_id: i32,

    /// Item description (non-empty, at most 255 chars)
    pub description: String,

    /// Quantity, up to 4 fractional digits
    pub quantity: Decimal,

    /// Unit code (one of the fixed unit tokens)
    pub unit: String,

    /// Price per unit, up to 4 fractional digits
    pub unit_price: Decimal,

    /// round(quantity * unit_price, 2)
    pub line_total: Decimal,

    /// Whether this line contributes to the taxable base
    pub taxed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::invoice::Entity",
        from = "Column::InvoiceId",
        to = "super::invoice::Column::Id"
    )]
    Invoice,
}

impl Related<super::invoice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Invoice.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
