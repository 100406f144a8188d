//! # Error Handling
//!
//! This module provides unified error handling for the invoicing service.
//! Every failure serializes to the wire shape `{ "ok": false, "error": "..." }`
//! with an HTTP status reflecting the failure class.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Unified API error response structure
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApiError {
    /// HTTP status code for the response
    #[serde(skip_serializing, skip_deserializing)]
    pub status: StatusCode,
    /// Always `false` on error responses
    pub ok: bool,
    /// Human-readable error message
    pub error: String,
}

impl ApiError {
    /// Create a new API error with the given status code and message
    pub fn new<S: Into<String>>(status: StatusCode, message: S) -> Self {
        Self {
            status,
            ok: false,
            error: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, axum::Json(self)).into_response()
    }
}

pub(crate) fn is_unique_violation(error: &sea_orm::DbErr) -> bool {
    use sea_orm::RuntimeErr;

    const PG_UNIQUE: &str = "23505";
    const MYSQL_DUPLICATE_CODES: &[&str] = &["1022", "1062", "1169", "1586"];
    const SQLITE_DUPLICATE_CODES: &[&str] = &["1555", "2067"];

    let runtime_err = match error {
        sea_orm::DbErr::Query(RuntimeErr::SqlxError(sqlx_err))
        | sea_orm::DbErr::Exec(RuntimeErr::SqlxError(sqlx_err)) => sqlx_err,
        _ => return false,
    };

    let Some(db_error) = runtime_err.as_database_error() else {
        return false;
    };

    if db_error.is_unique_violation() {
        return true;
    }

    if let Some(code) = db_error.code() {
        let code_str = code.as_ref();
        if code_str == PG_UNIQUE
            || MYSQL_DUPLICATE_CODES.contains(&code_str)
            || SQLITE_DUPLICATE_CODES.contains(&code_str)
        {
            return true;
        }
    }

    false
}

/// Failure taxonomy for the invoice submission pipeline.
///
/// Every variant maps to a user-facing message and an HTTP status; the
/// first failing check terminates processing, so a response always carries
/// exactly one reason.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// The submission endpoint only accepts POST.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// A required scalar field is absent, empty or non-positive.
    #[error("Missing required fields.")]
    MissingRequiredField,

    /// A scalar field is present but malformed (bad date, length overflow).
    #[error("{0}")]
    InvalidFormat(String),

    /// An id does not reference an existing (or active) reference row.
    #[error("{0}")]
    InvalidReference(String),

    /// Per-item validation failure, reported against the item's 1-based
    /// ordinal position.
    #[error("Item #{ordinal} {reason}.")]
    InvalidItem { ordinal: usize, reason: String },

    /// The (company_id, invoice_number) pair already exists.
    #[error("Invoice number already exists for this company.")]
    DuplicateInvoiceNumber,

    /// A write failed for any reason other than the uniqueness constraint.
    #[error("{0}")]
    Persistence(String),

    /// Catch-all; internal detail is logged, never leaked.
    #[error("Unexpected server error.")]
    Unexpected,
}

impl SubmitError {
    /// Per-item failure against the 1-based ordinal shown to the user.
    pub fn invalid_item(ordinal: usize, reason: &str) -> Self {
        SubmitError::InvalidItem {
            ordinal,
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            SubmitError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            SubmitError::MissingRequiredField
            | SubmitError::InvalidFormat(_)
            | SubmitError::InvalidReference(_)
            | SubmitError::InvalidItem { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            SubmitError::DuplicateInvoiceNumber => StatusCode::CONFLICT,
            SubmitError::Persistence(_) | SubmitError::Unexpected => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<SubmitError> for ApiError {
    fn from(error: SubmitError) -> Self {
        ApiError::new(error.status_code(), error.to_string())
    }
}

impl IntoResponse for SubmitError {
    fn into_response(self) -> Response {
        ApiError::from(self).into_response()
    }
}

impl From<sea_orm::DbErr> for SubmitError {
    fn from(error: sea_orm::DbErr) -> Self {
        if is_unique_violation(&error) {
            tracing::debug!(?error, "Unique constraint violation detected");
            return SubmitError::DuplicateInvoiceNumber;
        }

        tracing::error!("Database error: {:?}", error);
        SubmitError::Unexpected
    }
}

impl From<anyhow::Error> for SubmitError {
    fn from(error: anyhow::Error) -> Self {
        // Log the full error for debugging
        tracing::error!("Internal error: {:?}", error);
        SubmitError::Unexpected
    }
}
