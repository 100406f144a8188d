//! Property tests for monetary parsing and totals computation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use invoicing::money::{format_2dp, parse_amount, round2};
use invoicing::units::UnitCode;
use invoicing::validation::{DraftItem, compute_totals};

/// An in-grammar amount: up to 4 fractional digits, non-negative.
fn amount() -> impl Strategy<Value = Decimal> {
    (0u64..1_000_000u64, 0u32..=4u32).prop_map(|(mantissa, scale)| Decimal::new(mantissa as i64, scale))
}

fn draft_item() -> impl Strategy<Value = DraftItem> {
    (
        "[a-z]{1,20}",
        amount().prop_filter("quantity must be positive", |q| *q > Decimal::ZERO),
        0usize..UnitCode::ALL.len(),
        amount(),
        any::<bool>(),
    )
        .prop_map(|(description, quantity, unit_index, unit_price, taxed)| DraftItem {
            description,
            quantity,
            unit: UnitCode::ALL[unit_index],
            unit_price,
            taxed,
            line_total: round2(quantity * unit_price),
        })
}

proptest! {
    #[test]
    fn total_is_subtotal_plus_tax(items in prop::collection::vec(draft_item(), 1..10), rate in 0u32..=10000u32) {
        let rate = Decimal::new(rate as i64, 2);
        let totals = compute_totals(&items, rate).unwrap();

        prop_assert_eq!(totals.total, round2(totals.subtotal + totals.tax));
    }

    #[test]
    fn taxable_never_exceeds_subtotal(items in prop::collection::vec(draft_item(), 1..10), rate in 0u32..=10000u32) {
        let rate = Decimal::new(rate as i64, 2);
        let totals = compute_totals(&items, rate).unwrap();

        prop_assert!(totals.taxable <= totals.subtotal);
        prop_assert!(totals.tax >= Decimal::ZERO);
    }

    #[test]
    fn subtotal_is_sum_of_line_totals(items in prop::collection::vec(draft_item(), 1..10)) {
        let totals = compute_totals(&items, Decimal::ZERO).unwrap();
        let expected: Decimal = items.iter().map(|i| i.line_total).sum();

        prop_assert_eq!(totals.subtotal, expected);
        prop_assert_eq!(totals.tax, Decimal::ZERO);
    }

    #[test]
    fn untaxed_items_never_contribute_tax(items in prop::collection::vec(draft_item(), 1..10), rate in 1u32..=10000u32) {
        let rate = Decimal::new(rate as i64, 2);
        let untaxed: Vec<DraftItem> = items
            .into_iter()
            .map(|mut item| {
                item.taxed = false;
                item
            })
            .collect();

        let totals = compute_totals(&untaxed, rate).unwrap();
        prop_assert_eq!(totals.tax, Decimal::ZERO);
        prop_assert_eq!(totals.total, totals.subtotal);
    }

    #[test]
    fn parse_amount_round_trips_canonical_text(value in amount()) {
        let text = value.to_string();
        let parsed = parse_amount(&text);

        prop_assert_eq!(parsed, Some(value));
    }

    #[test]
    fn formatted_amounts_always_have_two_decimals(value in amount()) {
        let formatted = format_2dp(round2(value));
        let (_, fraction) = formatted.split_once('.').expect("decimal point");

        prop_assert_eq!(fraction.len(), 2);
    }
}
