//! Database seeding functionality
//!
//! Populates the reference tables with demo rows so a freshly migrated
//! local database has something to select on the invoice form. Seeding
//! only runs when the tables are empty.

use anyhow::Result;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, Set};

use crate::models::{client, company, tax_rate};

/// Seeds companies, clients and tax rates when each table is empty.
pub async fn seed_reference_data(db: &DatabaseConnection) -> Result<()> {
    if company::Entity::find().count(db).await? == 0 {
        tracing::info!("Seeding demo companies");
        company::Entity::insert_many([
            company::ActiveModel {
                name: Set("Northwind Consulting".to_string()),
                email: Set(Some("billing@northwind.test".to_string())),
                phone: Set(None),
                website: Set(Some("https://northwind.test".to_string())),
                created_at: Set(Utc::now().into()),
                ..Default::default()
            },
            company::ActiveModel {
                name: Set("Aurora Studio".to_string()),
                email: Set(Some("hello@aurora.test".to_string())),
                phone: Set(None),
                website: Set(None),
                created_at: Set(Utc::now().into()),
                ..Default::default()
            },
        ])
        .exec(db)
        .await?;
    }

    if client::Entity::find().count(db).await? == 0 {
        tracing::info!("Seeding demo clients");
        client::Entity::insert_many([
            client::ActiveModel {
                name: Set(Some("Jane Doe".to_string())),
                company_name: Set(Some("Acme Corp".to_string())),
                email: Set(Some("jane@acme.test".to_string())),
                customer_code: Set(Some("ACME-001".to_string())),
                created_at: Set(Utc::now().into()),
                ..Default::default()
            },
            client::ActiveModel {
                name: Set(None),
                company_name: Set(None),
                email: Set(Some("orders@globex.test".to_string())),
                customer_code: Set(None),
                created_at: Set(Utc::now().into()),
                ..Default::default()
            },
        ])
        .exec(db)
        .await?;
    }

    if tax_rate::Entity::find().count(db).await? == 0 {
        tracing::info!("Seeding demo tax rates");
        tax_rate::Entity::insert_many([
            tax_rate::ActiveModel {
                name: Set("Standard VAT".to_string()),
                rate: Set(Decimal::new(1500, 2)),
                active: Set(true),
                created_at: Set(Utc::now().into()),
                ..Default::default()
            },
            tax_rate::ActiveModel {
                name: Set("Reduced VAT".to_string()),
                rate: Set(Decimal::new(500, 2)),
                active: Set(true),
                created_at: Set(Utc::now().into()),
                ..Default::default()
            },
            tax_rate::ActiveModel {
                name: Set("Legacy rate".to_string()),
                rate: Set(Decimal::new(1800, 2)),
                active: Set(false),
                created_at: Set(Utc::now().into()),
                ..Default::default()
            },
        ])
        .exec(db)
        .await?;
    }

    Ok(())
}
