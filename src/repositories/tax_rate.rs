//! Tax rate repository for database operations
//!
//! The numeric rate applied to an invoice is always re-read here; a rate
//! that has been deactivated is invisible to new submissions.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::models::tax_rate::{self, Entity as TaxRate};

/// Repository for tax rate lookups
#[derive(Debug, Clone)]
pub struct TaxRateRepository {
    db: DatabaseConnection,
}

impl TaxRateRepository {
    /// Creates a new TaxRateRepository instance
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    /// Finds an active tax rate by id. Inactive rows resolve to `None`.
    pub async fn find_active_by_id(&self, id: i32) -> Result<Option<tax_rate::Model>, DbErr> {
        TaxRate::find_by_id(id)
            .filter(tax_rate::Column::Active.eq(true))
            .one(&self.db)
            .await
    }

    /// Lists active tax rates, highest rate first.
    pub async fn list_active(&self) -> Result<Vec<tax_rate::Model>, DbErr> {
        TaxRate::find()
            .filter(tax_rate::Column::Active.eq(true))
            .order_by_desc(tax_rate::Column::Rate)
            .all(&self.db)
            .await
    }
}
