//! Company repository for database operations

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::models::company::{self, Entity as Company};

/// Repository for company lookups
#[derive(Debug, Clone)]
pub struct CompanyRepository {
    db: DatabaseConnection,
}

impl CompanyRepository {
    /// Creates a new CompanyRepository instance
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    /// Returns whether a company with the given id exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(Company::find_by_id(id).one(&self.db).await?.is_some())
    }

    /// Lists all companies ordered by name.
    pub async fn list(&self) -> Result<Vec<company::Model>, DbErr> {
        Company::find()
            .order_by_asc(company::Column::Name)
            .all(&self.db)
            .await
    }
}
