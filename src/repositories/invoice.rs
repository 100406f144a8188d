//! Invoice repository for database operations
//!
//! Persists the invoice header and its items in a single transaction; a
//! failure at any point leaves no partial invoice behind.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait};

use crate::error::{SubmitError, is_unique_violation};
use crate::models::invoice::{self, STATUS_DRAFT};
use crate::models::invoice_item;
use crate::validation::{InvoiceDraft, Totals};

/// Repository for invoice persistence
#[derive(Debug, Clone)]
pub struct InvoiceRepository {
    db: DatabaseConnection,
}

impl InvoiceRepository {
    /// Creates a new InvoiceRepository instance
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    /// Inserts the invoice header and all items transactionally and returns
    /// the new invoice id.
    ///
    /// A uniqueness violation on (company_id, invoice_number) maps to
    /// [`SubmitError::DuplicateInvoiceNumber`]; any other write failure rolls
    /// the transaction back and reports which phase failed.
    pub async fn create_invoice(
        &self,
        draft: &InvoiceDraft,
        totals: &Totals,
    ) -> Result<i32, SubmitError> {
        let txn = self.db.begin().await.map_err(SubmitError::from)?;

        let header = invoice::ActiveModel {
            company_id: Set(draft.company_id),
            client_id: Set(draft.client_id),
            tax_rate_id: Set(draft.tax_rate_id),
            invoice_number: Set(draft.invoice_number.clone()),
            invoice_date: Set(draft.invoice_date),
            due_date: Set(draft.due_date),
            status: Set(STATUS_DRAFT.to_string()),
            subtotal: Set(totals.subtotal),
            tax: Set(totals.tax),
            total: Set(totals.total),
            notes: Set(draft.notes.clone()),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };

        let header = match header.insert(&txn).await {
            Ok(model) => model,
            Err(err) => {
                let _ = txn.rollback().await;
                if is_unique_violation(&err) {
                    return Err(SubmitError::DuplicateInvoiceNumber);
                }
                tracing::error!("Invoice header insert failed: {:?}", err);
                return Err(SubmitError::Persistence(
                    "Failed to save invoice header.".to_string(),
                ));
            }
        };

        let items: Vec<invoice_item::ActiveModel> = draft
            .items
            .iter()
            .map(|item| invoice_item::ActiveModel {
                invoice_id: Set(header.id),
                description: Set(item.description.clone()),
                quantity: Set(item.quantity),
                unit: Set(item.unit.as_str().to_string()),
                unit_price: Set(item.unit_price),
                line_total: Set(item.line_total),
                taxed: Set(item.taxed),
                ..Default::default()
            })
            .collect();

        if let Err(err) = invoice_item::Entity::insert_many(items).exec(&txn).await {
            let _ = txn.rollback().await;
            tracing::error!(invoice_id = header.id, "Invoice items insert failed: {:?}", err);
            return Err(SubmitError::Persistence(
                "Failed to save invoice items.".to_string(),
            ));
        }

        txn.commit().await.map_err(SubmitError::from)?;

        tracing::info!(
            invoice_id = header.id,
            company_id = draft.company_id,
            items = draft.items.len(),
            "Invoice captured"
        );

        Ok(header.id)
    }
}
