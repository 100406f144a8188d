//! # Data Models
//!
//! This module contains the SeaORM entities used throughout the invoicing
//! service.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod client;
pub mod company;
pub mod invoice;
pub mod invoice_item;
pub mod tax_rate;

pub use client::Entity as Client;
pub use company::Entity as Company;
pub use invoice::Entity as Invoice;
pub use invoice_item::Entity as InvoiceItem;
pub use tax_rate::Entity as TaxRate;

/// Basic service information response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    /// The name of the service
    pub service: String,
    /// The version of the service
    pub version: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            service: "invoicing".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
