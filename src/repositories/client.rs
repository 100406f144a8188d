//! Client repository for database operations

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::models::client::{self, Entity as Client};

/// Repository for client lookups
#[derive(Debug, Clone)]
pub struct ClientRepository {
    db: DatabaseConnection,
}

impl ClientRepository {
    /// Creates a new ClientRepository instance
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    /// Returns whether a client with the given id exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(Client::find_by_id(id).one(&self.db).await?.is_some())
    }

    /// Lists all clients ordered by company name, then contact name.
    pub async fn list(&self) -> Result<Vec<client::Model>, DbErr> {
        Client::find()
            .order_by_asc(client::Column::CompanyName)
            .order_by_asc(client::Column::Name)
            .all(&self.db)
            .await
    }
}
