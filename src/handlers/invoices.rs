//! # Invoice Capture Handler
//!
//! POST endpoint accepting the form-encoded invoice submission. The pipeline
//! runs parse, validate, reference checks, totals recomputation and the
//! transactional insert, stopping at the first failure.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{ApiError, SubmitError};
use crate::form::parse_submission;
use crate::money::format_2dp;
use crate::repositories::{
    ClientRepository, CompanyRepository, InvoiceRepository, TaxRateRepository,
};
use crate::server::AppState;
use crate::validation::{compute_totals, validate_submission};

/// Success payload returned after an invoice is captured.
///
/// Monetary fields are fixed 2-decimal strings so clients never see float
/// artifacts.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InvoiceCreatedResponse {
    /// Always `true` on success
    pub ok: bool,
    /// Id of the newly created invoice
    pub invoice_id: i32,
    /// Sum of all line totals
    #[schema(example = "200.00")]
    pub subtotal: String,
    /// Tax on the taxable base
    #[schema(example = "30.00")]
    pub tax: String,
    /// subtotal + tax
    #[schema(example = "230.00")]
    pub total: String,
}

/// Captures a new invoice from a form-encoded submission
#[utoipa::path(
    post,
    path = "/api/v1/invoices",
    request_body(content = String, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Invoice created", body = InvoiceCreatedResponse),
        (status = 422, description = "Validation failed", body = ApiError),
        (status = 409, description = "Duplicate invoice number", body = ApiError),
        (status = 500, description = "Persistence failure", body = ApiError)
    ),
    tag = "invoices"
)]
pub async fn submit_invoice(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<InvoiceCreatedResponse>), SubmitError> {
    let submission = parse_submission(&body)?;
    let draft = validate_submission(&submission)?;

    let companies = CompanyRepository::new(&state.db);
    if !companies.exists(draft.company_id).await? {
        return Err(SubmitError::InvalidReference(
            "Invalid company selected.".to_string(),
        ));
    }

    let clients = ClientRepository::new(&state.db);
    if !clients.exists(draft.client_id).await? {
        return Err(SubmitError::InvalidReference(
            "Invalid client selected.".to_string(),
        ));
    }

    let rate = match draft.tax_rate_id {
        Some(id) => {
            let tax_rates = TaxRateRepository::new(&state.db);
            match tax_rates.find_active_by_id(id).await? {
                Some(tax_rate) => tax_rate.rate,
                None => {
                    return Err(SubmitError::InvalidReference(
                        "Invalid tax rate selected.".to_string(),
                    ));
                }
            }
        }
        None => Decimal::ZERO,
    };

    let totals = compute_totals(&draft.items, rate)?;

    let invoices = InvoiceRepository::new(&state.db);
    let invoice_id = invoices.create_invoice(&draft, &totals).await?;

    Ok((
        StatusCode::CREATED,
        Json(InvoiceCreatedResponse {
            ok: true,
            invoice_id,
            subtotal: format_2dp(totals.subtotal),
            tax: format_2dp(totals.tax),
            total: format_2dp(totals.total),
        }),
    ))
}

/// Fallback for non-POST methods on the submission route.
pub async fn method_not_allowed() -> SubmitError {
    SubmitError::MethodNotAllowed
}
