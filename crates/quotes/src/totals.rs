use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::labor::LaborTotals;
use crate::line_item::QuoteLineItem;

/// Standard VAT rate applied to parts lines, 20%.
pub const STANDARD_VAT_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 2);

/// Labor is always taxed at the standard rate, whatever the parts mix.
pub const LABOR_VAT_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 2);

/// The three figures printed at the bottom of every quote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteTotals {
    pub total_ex_tax: Decimal,
    pub total_vat: Decimal,
    pub total_inc_tax: Decimal,
}

/// VAT owed on a single parts line. Used (occasion) parts are exempt.
pub fn line_vat(item: &QuoteLineItem) -> Decimal {
    if item.intervention.is_vat_exempt() {
        Decimal::ZERO
    } else {
        item.line_total_ex_tax() * STANDARD_VAT_RATE
    }
}

/// Computes quote totals from the parts lines and labor amounts.
///
/// HT is the sum of line subtotals plus the labor subtotal. VAT is
/// accumulated per line (exempt lines contribute nothing) plus 20% of the
/// labor. TTC is their sum. Every line counts, including ones with a blank
/// description: while a quote is being edited the figures must track the
/// whole table. The save flow drops blank lines before calling this, so
/// persisted totals only cover what is actually stored.
pub fn compute_totals(items: &[QuoteLineItem], labor: &LaborTotals) -> QuoteTotals {
    let mut parts_subtotal = Decimal::ZERO;
    let mut vat = Decimal::ZERO;

    for item in items {
        parts_subtotal += item.line_total_ex_tax();
        vat += line_vat(item);
    }

    let labor_subtotal = labor.subtotal();
    vat += labor_subtotal * LABOR_VAT_RATE;

    let total_ex_tax = parts_subtotal + labor_subtotal;
    QuoteTotals {
        total_ex_tax,
        total_vat: vat,
        total_inc_tax: total_ex_tax + vat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_item::InterventionKind;
    use crate::quote::QuoteId;
    use proptest::prelude::*;

    fn line(
        quote_id: QuoteId,
        description: &str,
        quantity: u32,
        price_cents: i64,
        intervention: InterventionKind,
    ) -> QuoteLineItem {
        QuoteLineItem::new(
            quote_id,
            0,
            description,
            quantity,
            Decimal::new(price_cents, 2),
            intervention,
        )
    }

    #[test]
    fn standard_parts_and_bodywork_labor() {
        let quote_id = QuoteId::new();
        let items = vec![line(
            quote_id,
            "Pare-choc avant",
            2,
            10_000,
            InterventionKind::Replacement,
        )];
        let labor = LaborTotals::new(
            Decimal::new(50, 0),
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
        );

        let totals = compute_totals(&items, &labor);
        assert_eq!(totals.total_ex_tax, Decimal::new(250, 0));
        assert_eq!(totals.total_vat, Decimal::new(50, 0));
        assert_eq!(totals.total_inc_tax, Decimal::new(300, 0));
    }

    #[test]
    fn used_part_is_vat_exempt_but_labor_is_not() {
        let quote_id = QuoteId::new();
        let items = vec![line(
            quote_id,
            "Aile arrière occasion",
            2,
            10_000,
            InterventionKind::Used,
        )];
        let labor = LaborTotals::new(
            Decimal::new(50, 0),
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
        );

        let totals = compute_totals(&items, &labor);
        assert_eq!(totals.total_ex_tax, Decimal::new(250, 0));
        assert_eq!(totals.total_vat, Decimal::new(10, 0));
        assert_eq!(totals.total_inc_tax, Decimal::new(260, 0));
    }

    #[test]
    fn empty_quote_totals_zero() {
        let totals = compute_totals(&[], &LaborTotals::default());
        assert_eq!(totals, QuoteTotals::default());
    }

    #[test]
    fn blank_lines_still_count_while_editing() {
        let quote_id = QuoteId::new();
        let items = vec![
            line(quote_id, "Phare gauche", 1, 80_000, InterventionKind::New),
            line(quote_id, "   ", 1, 20_000, InterventionKind::New),
        ];
        let totals = compute_totals(&items, &LaborTotals::default());
        assert_eq!(totals.total_ex_tax, Decimal::new(1000, 0));
        assert_eq!(totals.total_vat, Decimal::new(200, 0));
    }

    #[test]
    fn labor_only_quote() {
        let labor = LaborTotals::new(
            Decimal::new(300, 0),
            Decimal::new(200, 0),
            Decimal::ZERO,
            Decimal::ZERO,
        );
        let totals = compute_totals(&[], &labor);
        assert_eq!(totals.total_ex_tax, Decimal::new(500, 0));
        assert_eq!(totals.total_vat, Decimal::new(100, 0));
        assert_eq!(totals.total_inc_tax, Decimal::new(600, 0));
    }

    fn arb_intervention() -> impl Strategy<Value = InterventionKind> {
        prop_oneof![
            Just(InterventionKind::Replacement),
            Just(InterventionKind::Used),
            Just(InterventionKind::Repair),
            Just(InterventionKind::New),
        ]
    }

    fn arb_item(quote_id: QuoteId) -> impl Strategy<Value = QuoteLineItem> {
        (1u32..50, 0i64..5_000_000, arb_intervention()).prop_map(
            move |(quantity, price_cents, intervention)| {
                QuoteLineItem::new(
                    quote_id,
                    0,
                    "Pièce",
                    quantity,
                    Decimal::new(price_cents, 2),
                    intervention,
                )
            },
        )
    }

    fn arb_labor() -> impl Strategy<Value = LaborTotals> {
        (0i64..100_000, 0i64..100_000, 0i64..100_000, 0i64..100_000).prop_map(|(t, p, m, e)| {
            LaborTotals::new(
                Decimal::new(t, 2),
                Decimal::new(p, 2),
                Decimal::new(m, 2),
                Decimal::new(e, 2),
            )
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn ttc_is_ht_plus_vat(
            items in prop::collection::vec(arb_item(QuoteId::new()), 0..20),
            labor in arb_labor(),
        ) {
            let totals = compute_totals(&items, &labor);
            prop_assert_eq!(
                totals.total_inc_tax,
                totals.total_ex_tax + totals.total_vat
            );
        }

        #[test]
        fn totals_are_additive_over_line_partition(
            items in prop::collection::vec(arb_item(QuoteId::new()), 0..20),
            split in 0usize..20,
        ) {
            let split = split.min(items.len());
            let labor = LaborTotals::default();
            let whole = compute_totals(&items, &labor);
            let left = compute_totals(&items[..split], &labor);
            let right = compute_totals(&items[split..], &labor);
            prop_assert_eq!(whole.total_ex_tax, left.total_ex_tax + right.total_ex_tax);
            prop_assert_eq!(whole.total_vat, left.total_vat + right.total_vat);
        }

        #[test]
        fn used_only_quotes_carry_no_parts_vat(
            items in prop::collection::vec(
                (1u32..50, 0i64..5_000_000).prop_map(|(quantity, price_cents)| {
                    QuoteLineItem::new(
                        QuoteId::new(),
                        0,
                        "Pièce occasion",
                        quantity,
                        Decimal::new(price_cents, 2),
                        InterventionKind::Used,
                    )
                }),
                0..20,
            ),
        ) {
            let totals = compute_totals(&items, &LaborTotals::default());
            prop_assert_eq!(totals.total_vat, Decimal::ZERO);
            prop_assert_eq!(totals.total_inc_tax, totals.total_ex_tax);
        }

        #[test]
        fn labor_vat_is_twenty_percent_of_labor(labor in arb_labor()) {
            let totals = compute_totals(&[], &labor);
            prop_assert_eq!(totals.total_vat, labor.subtotal() * LABOR_VAT_RATE);
        }
    }
}
