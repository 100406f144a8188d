//! Client entity model
//!
//! This module contains the SeaORM entity model for the clients table.
//! Clients are the billed parties; the form renderer shows a label derived
//! from company_name/name with an email fallback.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

/// Client reference entity
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    /// Unique identifier for the client (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Contact person name (optional)
    pub name: Option<String>,

    /// Client company name (optional)
    pub company_name: Option<String>,

    /// Contact email (optional)
    pub email: Option<String>,

    /// Internal customer code (optional)
    pub customer_code: Option<String>,

    /// Timestamp when the client was created
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    /// Label shown in the client dropdown: "company_name - name", falling
    /// back to the email address when both parts are empty.
    pub fn display_label(&self) -> String {
        let company = self.company_name.as_deref().unwrap_or("");
        let name = self.name.as_deref().unwrap_or("");
        let label = format!("{} - {}", company, name).trim().to_string();

        if label == "-" {
            self.email.clone().unwrap_or_else(|| "Client".to_string())
        } else {
            label
        }
    }
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn client(
        name: Option<&str>,
        company_name: Option<&str>,
        email: Option<&str>,
    ) -> Model {
        Model {
            id: 1,
            name: name.map(String::from),
            company_name: company_name.map(String::from),
            email: email.map(String::from),
            customer_code: None,
            created_at: Utc::now().into(),
        }
    }

    #[test]
    fn label_combines_company_and_name() {
        let c = client(Some("Jane Doe"), Some("Acme Corp"), None);
        assert_eq!(c.display_label(), "Acme Corp - Jane Doe");
    }

    #[test]
    fn label_falls_back_to_email() {
        let c = client(None, None, Some("billing@acme.test"));
        assert_eq!(c.display_label(), "billing@acme.test");
    }

    #[test]
    fn label_defaults_when_nothing_set() {
        let c = client(None, None, None);
        assert_eq!(c.display_label(), "Client");
    }
}
