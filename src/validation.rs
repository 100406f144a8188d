//! Submission validation and totals computation.
//!
//! Transforms a raw [`InvoiceSubmission`] into a fully typed
//! [`InvoiceDraft`], or fails with the first offending reason. Nothing
//! client-computed survives this step: line totals are re-derived here and
//! the invoice aggregates are recomputed in [`compute_totals`] from the
//! server-fetched tax rate.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::SubmitError;
use crate::form::{InvoiceSubmission, RawItem};
use crate::money::{parse_amount, round2};
use crate::units::UnitCode;

pub const MAX_INVOICE_NUMBER_LEN: usize = 50;
pub const MAX_DESCRIPTION_LEN: usize = 255;
pub const MAX_NOTES_LEN: usize = 5000;

/// A validated line item carrying its derived line total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftItem {
    pub description: String,
    pub quantity: Decimal,
    pub unit: UnitCode,
    pub unit_price: Decimal,
    pub taxed: bool,
    /// round(quantity * unit_price, 2)
    pub line_total: Decimal,
}

/// A fully validated invoice draft, ready for totals computation and
/// persistence. Reference ids are syntactically valid here; existence
/// checks happen against the repositories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDraft {
    pub company_id: i32,
    pub client_id: i32,
    pub tax_rate_id: Option<i32>,
    pub invoice_number: String,
    pub invoice_date: NaiveDate,
    pub due_date: NaiveDate,
    pub notes: Option<String>,
    pub items: Vec<DraftItem>,
}

impl InvoiceDraft {
    /// Renders the draft back into the raw submission shape. Validating
    /// the result reproduces this draft exactly, which keeps validation
    /// idempotent over already-normalized input.
    pub fn to_submission(&self) -> InvoiceSubmission {
        InvoiceSubmission {
            company_id: Some(self.company_id.to_string()),
            client_id: Some(self.client_id.to_string()),
            tax_rate_id: self.tax_rate_id.map(|id| id.to_string()),
            invoice_number: Some(self.invoice_number.clone()),
            invoice_date: Some(self.invoice_date.format("%Y-%m-%d").to_string()),
            due_date: Some(self.due_date.format("%Y-%m-%d").to_string()),
            notes: self.notes.clone(),
            items: self
                .items
                .iter()
                .map(|item| RawItem {
                    description: Some(item.description.clone()),
                    quantity: Some(item.quantity.to_string()),
                    unit: Some(item.unit.as_str().to_string()),
                    unit_price: Some(item.unit_price.to_string()),
                    taxed: Some(if item.taxed { "1" } else { "0" }.to_string()),
                })
                .collect(),
            has_items: true,
        }
    }
}

/// Monetary aggregates derived from a draft's items and the effective
/// tax rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    /// Sum of all line totals
    pub subtotal: Decimal,
    /// Sum of line totals of taxed items
    pub taxable: Decimal,
    /// round(taxable * rate / 100, 2)
    pub tax: Decimal,
    /// round(subtotal + tax, 2)
    pub total: Decimal,
}

fn parse_date(raw: &str, error: &str) -> Result<NaiveDate, SubmitError> {
    let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| SubmitError::InvalidFormat(error.to_string()))?;

    // the input must round-trip unchanged ("2024-1-1" is not a valid form)
    if parsed.format("%Y-%m-%d").to_string() != raw {
        return Err(SubmitError::InvalidFormat(error.to_string()));
    }

    Ok(parsed)
}

fn validate_item(ordinal: usize, raw: &RawItem) -> Result<DraftItem, SubmitError> {
    let description = raw.description.as_deref().unwrap_or("").trim().to_string();
    if description.is_empty() || description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(SubmitError::invalid_item(
            ordinal,
            "has an invalid description",
        ));
    }

    if raw.quantity.is_none() || raw.unit_price.is_none() {
        return Err(SubmitError::invalid_item(
            ordinal,
            "is missing quantity or unit price",
        ));
    }

    let quantity = raw.quantity.as_deref().and_then(parse_amount);
    let quantity = match quantity {
        Some(q) if q > Decimal::ZERO => q,
        _ => {
            return Err(SubmitError::invalid_item(ordinal, "has an invalid quantity"));
        }
    };

    let unit: UnitCode = raw
        .unit
        .as_deref()
        .unwrap_or("")
        .trim()
        .parse()
        .map_err(|_| SubmitError::invalid_item(ordinal, "has an invalid unit"))?;

    let unit_price = raw
        .unit_price
        .as_deref()
        .and_then(parse_amount)
        .ok_or_else(|| SubmitError::invalid_item(ordinal, "has an invalid unit price"))?;

    let taxed = raw.taxed.as_deref() == Some("1");

    // the amount grammar bounds fractional digits but not integer digits,
    // so the product can exceed Decimal range
    let line_total = quantity
        .checked_mul(unit_price)
        .map(round2)
        .ok_or_else(|| SubmitError::invalid_item(ordinal, "has an invalid unit price"))?;

    Ok(DraftItem {
        description,
        quantity,
        unit,
        unit_price,
        taxed,
        line_total,
    })
}

/// Validates a raw submission into an [`InvoiceDraft`].
///
/// Checks run in a fixed order and stop at the first failure; item
/// failures carry the item's 1-based ordinal. Only syntactic and
/// structural rules live here; reference existence is the repositories'
/// concern.
pub fn validate_submission(submission: &InvoiceSubmission) -> Result<InvoiceDraft, SubmitError> {
    let company_id: i32 = submission
        .company_id
        .as_deref()
        .unwrap_or("")
        .trim()
        .parse()
        .unwrap_or(0);
    let client_id: i32 = submission
        .client_id
        .as_deref()
        .unwrap_or("")
        .trim()
        .parse()
        .unwrap_or(0);

    let invoice_number = submission
        .invoice_number
        .as_deref()
        .unwrap_or("")
        .trim()
        .to_string();
    let invoice_date_raw = submission.invoice_date.as_deref().unwrap_or("").trim();
    let due_date_raw = submission.due_date.as_deref().unwrap_or("").trim();

    if company_id <= 0 || client_id <= 0 || invoice_number.is_empty()
        || invoice_date_raw.is_empty()
        || due_date_raw.is_empty()
    {
        return Err(SubmitError::MissingRequiredField);
    }

    if invoice_number.chars().count() > MAX_INVOICE_NUMBER_LEN {
        return Err(SubmitError::InvalidFormat(
            "Invoice number is too long.".to_string(),
        ));
    }

    if invoice_date_raw.chars().count() > 10 || due_date_raw.chars().count() > 10 {
        return Err(SubmitError::InvalidFormat(
            "Invalid date format.".to_string(),
        ));
    }

    let invoice_date = parse_date(invoice_date_raw, "Invalid invoice date.")?;
    let due_date = parse_date(due_date_raw, "Invalid due date.")?;

    let notes = submission
        .notes
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(String::from);
    if let Some(ref n) = notes {
        if n.chars().count() > MAX_NOTES_LEN {
            return Err(SubmitError::InvalidFormat("Notes is too long.".to_string()));
        }
    }

    // an empty or non-positive selection means no tax is applied; anything
    // else must be a positive integer (existence is checked later)
    let tax_rate_id = match submission.tax_rate_id.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => match raw.parse::<i32>() {
            Ok(id) if id > 0 => Some(id),
            _ => {
                return Err(SubmitError::InvalidReference(
                    "Invalid tax rate selected.".to_string(),
                ));
            }
        },
    };

    if !submission.has_items {
        return Err(SubmitError::InvalidFormat("Items are required.".to_string()));
    }

    // only records with a submitted description count as items; stray
    // indexes carrying just a quantity are not visible to the user
    let submitted: Vec<&RawItem> = submission
        .items
        .iter()
        .filter(|item| item.description.is_some())
        .collect();

    if submitted.is_empty() {
        return Err(SubmitError::InvalidFormat(
            "Please add at least one invoice item.".to_string(),
        ));
    }

    let mut items = Vec::with_capacity(submitted.len());
    for (position, raw) in submitted.iter().enumerate() {
        items.push(validate_item(position + 1, raw)?);
    }

    Ok(InvoiceDraft {
        company_id,
        client_id,
        tax_rate_id,
        invoice_number,
        invoice_date,
        due_date,
        notes,
        items,
    })
}

/// Recomputes the monetary aggregates from validated items and the
/// effective tax rate (a percentage; zero when no rate was selected).
///
/// Aggregates that exceed `Decimal` range map to the generic server error.
pub fn compute_totals(items: &[DraftItem], rate: Decimal) -> Result<Totals, SubmitError> {
    let mut subtotal = Decimal::ZERO;
    let mut taxable = Decimal::ZERO;

    for item in items {
        subtotal = subtotal
            .checked_add(item.line_total)
            .ok_or(SubmitError::Unexpected)?;
        if item.taxed {
            taxable = taxable
                .checked_add(item.line_total)
                .ok_or(SubmitError::Unexpected)?;
        }
    }

    let tax = taxable
        .checked_mul(rate)
        .map(|t| round2(t / Decimal::from(100)))
        .ok_or(SubmitError::Unexpected)?;
    let total = subtotal
        .checked_add(tax)
        .map(round2)
        .ok_or(SubmitError::Unexpected)?;

    Ok(Totals {
        subtotal,
        taxable,
        tax,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn item(description: &str, quantity: &str, unit: &str, price: &str, taxed: &str) -> RawItem {
        RawItem {
            description: Some(description.to_string()),
            quantity: Some(quantity.to_string()),
            unit: Some(unit.to_string()),
            unit_price: Some(price.to_string()),
            taxed: Some(taxed.to_string()),
        }
    }

    fn submission() -> InvoiceSubmission {
        InvoiceSubmission {
            company_id: Some("1".to_string()),
            client_id: Some("2".to_string()),
            tax_rate_id: None,
            invoice_number: Some("INV-20240501-AB12CD".to_string()),
            invoice_date: Some("2024-05-01".to_string()),
            due_date: Some("2024-05-31".to_string()),
            notes: None,
            items: vec![item("Labor", "2", "hrs", "50.00", "0")],
            has_items: true,
        }
    }

    #[test]
    fn accepts_a_well_formed_submission() {
        let draft = validate_submission(&submission()).unwrap();

        assert_eq!(draft.company_id, 1);
        assert_eq!(draft.client_id, 2);
        assert_eq!(draft.tax_rate_id, None);
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.items[0].unit, UnitCode::Hrs);
        assert_eq!(draft.items[0].line_total, Decimal::from_str("100.00").unwrap());
        assert!(!draft.items[0].taxed);
    }

    #[test]
    fn validation_is_idempotent_over_normalized_drafts() {
        let mut sub = submission();
        sub.notes = Some("  padded notes  ".to_string());
        sub.invoice_number = Some("  INV-1  ".to_string());

        let draft = validate_submission(&sub).unwrap();
        let again = validate_submission(&draft.to_submission()).unwrap();

        assert_eq!(draft, again);
    }

    #[test]
    fn missing_required_scalars_are_rejected() {
        for field in ["company_id", "client_id", "invoice_number", "invoice_date", "due_date"] {
            let mut sub = submission();
            match field {
                "company_id" => sub.company_id = None,
                "client_id" => sub.client_id = Some("0".to_string()),
                "invoice_number" => sub.invoice_number = Some("   ".to_string()),
                "invoice_date" => sub.invoice_date = Some("".to_string()),
                "due_date" => sub.due_date = None,
                _ => unreachable!(),
            }
            assert_eq!(
                validate_submission(&sub).unwrap_err(),
                SubmitError::MissingRequiredField,
                "field: {field}"
            );
        }
    }

    #[test]
    fn non_numeric_company_id_counts_as_missing() {
        let mut sub = submission();
        sub.company_id = Some("abc".to_string());

        assert_eq!(
            validate_submission(&sub).unwrap_err(),
            SubmitError::MissingRequiredField
        );
    }

    #[test]
    fn overlong_invoice_number_is_rejected() {
        let mut sub = submission();
        sub.invoice_number = Some("N".repeat(51));

        assert_eq!(
            validate_submission(&sub).unwrap_err(),
            SubmitError::InvalidFormat("Invoice number is too long.".to_string())
        );

        sub.invoice_number = Some("N".repeat(50));
        assert!(validate_submission(&sub).is_ok());
    }

    #[test]
    fn calendar_invalid_dates_are_rejected() {
        let mut sub = submission();
        sub.invoice_date = Some("2024-13-01".to_string());
        assert_eq!(
            validate_submission(&sub).unwrap_err(),
            SubmitError::InvalidFormat("Invalid invoice date.".to_string())
        );

        let mut sub = submission();
        sub.due_date = Some("2024-02-30".to_string());
        assert_eq!(
            validate_submission(&sub).unwrap_err(),
            SubmitError::InvalidFormat("Invalid due date.".to_string())
        );
    }

    #[test]
    fn non_canonical_date_forms_are_rejected() {
        let mut sub = submission();
        sub.invoice_date = Some("2024-5-1".to_string());
        assert_eq!(
            validate_submission(&sub).unwrap_err(),
            SubmitError::InvalidFormat("Invalid invoice date.".to_string())
        );

        let mut sub = submission();
        sub.invoice_date = Some("01-05-2024".to_string());
        assert!(validate_submission(&sub).is_err());
    }

    #[test]
    fn due_date_may_precede_invoice_date() {
        let mut sub = submission();
        sub.due_date = Some("2024-04-01".to_string());

        assert!(validate_submission(&sub).is_ok());
    }

    #[test]
    fn empty_notes_normalize_to_absent() {
        let mut sub = submission();
        sub.notes = Some("   ".to_string());

        let draft = validate_submission(&sub).unwrap();
        assert_eq!(draft.notes, None);
    }

    #[test]
    fn overlong_notes_are_rejected() {
        let mut sub = submission();
        sub.notes = Some("x".repeat(5001));

        assert_eq!(
            validate_submission(&sub).unwrap_err(),
            SubmitError::InvalidFormat("Notes is too long.".to_string())
        );
    }

    #[test]
    fn tax_rate_id_blank_means_no_tax() {
        let mut sub = submission();
        sub.tax_rate_id = Some("".to_string());

        let draft = validate_submission(&sub).unwrap();
        assert_eq!(draft.tax_rate_id, None);
    }

    #[test]
    fn tax_rate_id_must_be_positive_integer() {
        for bad in ["0", "-1", "abc"] {
            let mut sub = submission();
            sub.tax_rate_id = Some(bad.to_string());

            assert_eq!(
                validate_submission(&sub).unwrap_err(),
                SubmitError::InvalidReference("Invalid tax rate selected.".to_string()),
                "value: {bad}"
            );
        }
    }

    #[test]
    fn missing_items_key_is_rejected() {
        let mut sub = submission();
        sub.items.clear();
        sub.has_items = false;

        assert_eq!(
            validate_submission(&sub).unwrap_err(),
            SubmitError::InvalidFormat("Items are required.".to_string())
        );
    }

    #[test]
    fn no_described_items_is_rejected() {
        let mut sub = submission();
        sub.items = vec![RawItem {
            quantity: Some("1".to_string()),
            ..Default::default()
        }];

        assert_eq!(
            validate_submission(&sub).unwrap_err(),
            SubmitError::InvalidFormat("Please add at least one invoice item.".to_string())
        );
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let mut sub = submission();
        sub.items = vec![item("Labor", "0", "hrs", "50.00", "0")];

        assert_eq!(
            validate_submission(&sub).unwrap_err(),
            SubmitError::invalid_item(1, "has an invalid quantity")
        );
    }

    #[test]
    fn quantity_fractional_digit_boundary() {
        let mut sub = submission();
        sub.items = vec![item("Labor", "1.23456", "hrs", "50.00", "0")];
        assert_eq!(
            validate_submission(&sub).unwrap_err(),
            SubmitError::invalid_item(1, "has an invalid quantity")
        );

        sub.items = vec![item("Labor", "1.2345", "hrs", "50.00", "0")];
        assert!(validate_submission(&sub).is_ok());
    }

    #[test]
    fn zero_unit_price_is_accepted() {
        let mut sub = submission();
        sub.items = vec![item("Labor", "1", "hrs", "0", "0")];

        let draft = validate_submission(&sub).unwrap();
        assert_eq!(draft.items[0].line_total, Decimal::ZERO);
    }

    #[test]
    fn negative_unit_price_is_rejected() {
        let mut sub = submission();
        sub.items = vec![item("Labor", "1", "hrs", "-5", "0")];

        assert_eq!(
            validate_submission(&sub).unwrap_err(),
            SubmitError::invalid_item(1, "has an invalid unit price")
        );
    }

    #[test]
    fn unknown_unit_is_rejected() {
        let mut sub = submission();
        sub.items = vec![item("Labor", "1", "dozen", "5", "0")];

        assert_eq!(
            validate_submission(&sub).unwrap_err(),
            SubmitError::invalid_item(1, "has an invalid unit")
        );
    }

    #[test]
    fn missing_quantity_reports_ordinal() {
        let mut sub = submission();
        sub.items = vec![
            item("Labor", "1", "hrs", "5", "0"),
            RawItem {
                description: Some("Parts".to_string()),
                unit: Some("units".to_string()),
                ..Default::default()
            },
        ];

        assert_eq!(
            validate_submission(&sub).unwrap_err(),
            SubmitError::invalid_item(2, "is missing quantity or unit price")
        );
    }

    #[test]
    fn first_failing_item_wins() {
        let mut sub = submission();
        sub.items = vec![
            item("Labor", "0", "hrs", "5", "0"),
            item("", "1", "hrs", "5", "0"),
        ];

        assert_eq!(
            validate_submission(&sub).unwrap_err(),
            SubmitError::invalid_item(1, "has an invalid quantity")
        );
    }

    #[test]
    fn overlong_amounts_overflow_to_item_error() {
        let huge = "9".repeat(25);
        let mut sub = submission();
        sub.items = vec![item("Labor", &huge, "hrs", &huge, "0")];

        assert_eq!(
            validate_submission(&sub).unwrap_err(),
            SubmitError::invalid_item(1, "has an invalid unit price")
        );
    }

    #[test]
    fn totals_overflow_reports_generic_failure() {
        let item = DraftItem {
            description: "Huge".to_string(),
            quantity: Decimal::ONE,
            unit: UnitCode::Units,
            unit_price: Decimal::MAX,
            taxed: false,
            line_total: Decimal::MAX,
        };

        let err = compute_totals(&[item.clone(), item], Decimal::ZERO).unwrap_err();
        assert_eq!(err, SubmitError::Unexpected);
    }

    #[test]
    fn totals_without_tax() {
        let draft = validate_submission(&submission()).unwrap();
        let totals = compute_totals(&draft.items, Decimal::ZERO).unwrap();

        assert_eq!(totals.subtotal, Decimal::from_str("100.00").unwrap());
        assert_eq!(totals.taxable, Decimal::ZERO);
        assert_eq!(totals.tax, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::from_str("100.00").unwrap());
    }

    #[test]
    fn totals_with_fifteen_percent_tax() {
        let mut sub = submission();
        sub.items = vec![item("Consulting", "1", "units", "200.00", "1")];

        let draft = validate_submission(&sub).unwrap();
        let totals = compute_totals(&draft.items, Decimal::from(15)).unwrap();

        assert_eq!(totals.subtotal, Decimal::from_str("200.00").unwrap());
        assert_eq!(totals.taxable, Decimal::from_str("200.00").unwrap());
        assert_eq!(totals.tax, Decimal::from_str("30.00").unwrap());
        assert_eq!(totals.total, Decimal::from_str("230.00").unwrap());
    }

    #[test]
    fn only_taxed_lines_contribute_to_taxable() {
        let mut sub = submission();
        sub.items = vec![
            item("Taxed", "1", "units", "100.00", "1"),
            item("Untaxed", "1", "units", "50.00", "0"),
        ];

        let draft = validate_submission(&sub).unwrap();
        let totals = compute_totals(&draft.items, Decimal::from(10)).unwrap();

        assert_eq!(totals.subtotal, Decimal::from_str("150.00").unwrap());
        assert_eq!(totals.taxable, Decimal::from_str("100.00").unwrap());
        assert_eq!(totals.tax, Decimal::from_str("10.00").unwrap());
        assert_eq!(totals.total, Decimal::from_str("160.00").unwrap());
    }

    #[test]
    fn line_total_rounds_half_up() {
        let mut sub = submission();
        // 1.5 * 1.01 = 1.515 -> 1.52
        sub.items = vec![item("Edge", "1.5", "units", "1.01", "0")];

        let draft = validate_submission(&sub).unwrap();
        assert_eq!(draft.items[0].line_total, Decimal::from_str("1.52").unwrap());
    }
}
