//! Company entity model
//!
//! This module contains the SeaORM entity model for the companies table.
//! Companies are the invoice-issuing parties; this service only ever looks
//! them up by id.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

/// Company reference entity
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    /// Unique identifier for the company (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Display name for the company
    pub name: String,

    /// Contact email (optional)
    pub email: Option<String>,

    /// Contact phone (optional)
    pub phone: Option<String>,

    /// Website URL (optional)
    pub website: Option<String>,

    /// Timestamp when the company was created
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
