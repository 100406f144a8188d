//! Form-encoded submission decoding.
//!
//! The invoice form posts its line items as parallel arrays keyed by a
//! shared item index (`items[description][0]`, `items[quantity][0]`, ...).
//! This module decodes the body while preserving pair order and assembles
//! one [`RawItem`] record per index before any validation runs, so the rest
//! of the pipeline only ever sees an ordered item sequence.
//!
//! The `taxed` key may appear more than once for the same index (a hidden
//! field paired with a checkbox); the last value wins.

use std::collections::BTreeMap;

use url::form_urlencoded;

use crate::error::SubmitError;

/// Raw per-item fields as submitted, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawItem {
    pub description: Option<String>,
    pub quantity: Option<String>,
    pub unit: Option<String>,
    pub unit_price: Option<String>,
    /// Last submitted value for this index; `"1"` means taxed.
    pub taxed: Option<String>,
}

/// Raw submission fields as decoded from the request body.
///
/// Scalars follow last-value-wins semantics; items are ordered by their
/// submitted index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceSubmission {
    pub company_id: Option<String>,
    pub client_id: Option<String>,
    pub tax_rate_id: Option<String>,
    pub invoice_number: Option<String>,
    pub invoice_date: Option<String>,
    pub due_date: Option<String>,
    pub notes: Option<String>,
    /// Item records in index order.
    pub items: Vec<RawItem>,
    /// Whether any `items[...]` key was present at all.
    pub has_items: bool,
}

/// Splits an `items[<field>][<index>]` key into its field and index parts.
fn parse_item_key(key: &str) -> Option<(&str, usize)> {
    let rest = key.strip_prefix("items[")?;
    let (field, rest) = rest.split_once(']')?;
    let rest = rest.strip_prefix('[')?;
    let index = rest.strip_suffix(']')?;
    if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((field, index.parse().ok()?))
}

/// Decodes a form-encoded body into an [`InvoiceSubmission`].
///
/// Unknown keys are ignored; malformed `items[...]` keys reject the whole
/// payload since the item arrays can no longer be trusted to line up.
pub fn parse_submission(body: &[u8]) -> Result<InvoiceSubmission, SubmitError> {
    let mut submission = InvoiceSubmission::default();
    let mut items: BTreeMap<usize, RawItem> = BTreeMap::new();

    for (key, value) in form_urlencoded::parse(body) {
        let key = key.as_ref();
        let value = value.into_owned();

        match key {
            "company_id" => submission.company_id = Some(value),
            "client_id" => submission.client_id = Some(value),
            "tax_rate_id" => submission.tax_rate_id = Some(value),
            "invoice_number" => submission.invoice_number = Some(value),
            "invoice_date" => submission.invoice_date = Some(value),
            "due_date" => submission.due_date = Some(value),
            "notes" => submission.notes = Some(value),
            // a flat scalar under the items key carries no line at all
            "items" => {
                return Err(SubmitError::InvalidFormat("Items are required.".to_string()));
            }
            _ if key.starts_with("items[") => {
                submission.has_items = true;

                let Some((field, index)) = parse_item_key(key) else {
                    return Err(SubmitError::InvalidFormat(
                        "Invalid items payload.".to_string(),
                    ));
                };

                let item = items.entry(index).or_default();
                match field {
                    "description" => item.description = Some(value),
                    "quantity" => item.quantity = Some(value),
                    "unit" => item.unit = Some(value),
                    "unit_price" => item.unit_price = Some(value),
                    // duplicated taxed pairs collapse to the last value
                    "taxed" => item.taxed = Some(value),
                    _ => {
                        return Err(SubmitError::InvalidFormat(
                            "Invalid items payload.".to_string(),
                        ));
                    }
                }
            }
            _ => {}
        }
    }

    submission.items = items.into_values().collect();
    Ok(submission)
}
