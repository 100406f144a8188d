//! # Reference Data Handlers
//!
//! Read-only endpoints backing the invoice form: selectable companies,
//! clients and active tax rates, plus prefill defaults for a new invoice.

use axum::extract::State;
use axum::response::Json;
use chrono::{Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{ApiError, SubmitError};
use crate::money::format_2dp;
use crate::repositories::{ClientRepository, CompanyRepository, TaxRateRepository};
use crate::server::AppState;

/// A selectable issuing company
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CompanyOption {
    pub id: i32,
    pub name: String,
}

/// A selectable client with its dropdown label
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClientOption {
    pub id: i32,
    /// "company_name - name", falling back to the email address
    pub label: String,
    /// Internal customer code, if assigned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_code: Option<String>,
}

/// A selectable tax rate
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TaxRateOption {
    pub id: i32,
    pub name: String,
    /// Percentage as a fixed 2-decimal string
    #[schema(example = "15.00")]
    pub rate: String,
}

/// Prefill values for a blank invoice form
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InvoiceDefaults {
    /// Suggested invoice number, unique enough to avoid accidental collisions
    #[schema(example = "INV-20240501-A3F2B1")]
    pub invoice_number: String,
    /// Today's date
    pub invoice_date: String,
    /// 30 days from today
    pub due_date: String,
}

/// Lists companies selectable on the invoice form
#[utoipa::path(
    get,
    path = "/api/v1/companies",
    responses(
        (status = 200, description = "Companies ordered by name", body = [CompanyOption]),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "reference"
)]
pub async fn list_companies(
    State(state): State<AppState>,
) -> Result<Json<Vec<CompanyOption>>, SubmitError> {
    let companies = CompanyRepository::new(&state.db).list().await?;

    Ok(Json(
        companies
            .into_iter()
            .map(|company| CompanyOption {
                id: company.id,
                name: company.name,
            })
            .collect(),
    ))
}

/// Lists clients selectable on the invoice form
#[utoipa::path(
    get,
    path = "/api/v1/clients",
    responses(
        (status = 200, description = "Clients with display labels", body = [ClientOption]),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "reference"
)]
pub async fn list_clients(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClientOption>>, SubmitError> {
    let clients = ClientRepository::new(&state.db).list().await?;

    Ok(Json(
        clients
            .into_iter()
            .map(|client| ClientOption {
                id: client.id,
                label: client.display_label(),
                customer_code: client.customer_code,
            })
            .collect(),
    ))
}

/// Lists active tax rates
#[utoipa::path(
    get,
    path = "/api/v1/tax-rates",
    responses(
        (status = 200, description = "Active tax rates, highest first", body = [TaxRateOption]),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "reference"
)]
pub async fn list_tax_rates(
    State(state): State<AppState>,
) -> Result<Json<Vec<TaxRateOption>>, SubmitError> {
    let tax_rates = TaxRateRepository::new(&state.db).list_active().await?;

    Ok(Json(
        tax_rates
            .into_iter()
            .map(|tax_rate| TaxRateOption {
                id: tax_rate.id,
                name: tax_rate.name,
                rate: format_2dp(tax_rate.rate),
            })
            .collect(),
    ))
}

/// Returns prefill defaults for a new invoice
#[utoipa::path(
    get,
    path = "/api/v1/invoices/defaults",
    responses(
        (status = 200, description = "Prefill values for a blank form", body = InvoiceDefaults)
    ),
    tag = "invoices"
)]
pub async fn invoice_defaults() -> Json<InvoiceDefaults> {
    let today = Utc::now().date_naive();
    let suffix: u32 = rand::thread_rng().gen_range(0..0x100_0000);

    Json(InvoiceDefaults {
        invoice_number: format!("INV-{}-{:06X}", today.format("%Y%m%d"), suffix),
        invoice_date: today.format("%Y-%m-%d").to_string(),
        due_date: (today + Duration::days(30)).format("%Y-%m-%d").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn defaults_shape_is_stable() {
        let Json(defaults) = invoice_defaults().await;

        assert!(defaults.invoice_number.starts_with("INV-"));
        let parts: Vec<&str> = defaults.invoice_number.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[1].len(), 8);
        assert_eq!(parts[2].len(), 6);
        assert!(parts[2].chars().all(|c| c.is_ascii_hexdigit()));

        let invoice_date =
            chrono::NaiveDate::parse_from_str(&defaults.invoice_date, "%Y-%m-%d").unwrap();
        let due_date = chrono::NaiveDate::parse_from_str(&defaults.due_date, "%Y-%m-%d").unwrap();
        assert_eq!(due_date - invoice_date, chrono::Duration::days(30));
    }
}
