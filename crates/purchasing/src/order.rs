use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use atelier_parties::SupplierId;
use atelier_quotes::QuoteLineItem;

use crate::fulfillment::FulfillmentStatus;

/// A purchase order derived from one supplier's share of a quote.
///
/// Orders are never persisted; they are recomputed from the quote's
/// current lines every time they are displayed, so editing the quote
/// can never leave a stale order behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrderGroup {
    /// `BC-<quote number>-<group index, 1-based>`.
    pub reference: String,
    pub supplier_id: Option<SupplierId>,
    pub items: Vec<QuoteLineItem>,
    /// Sum of the grouped lines, ex tax.
    pub total_ex_tax: Decimal,
}

impl PurchaseOrderGroup {
    /// Percentage of lines marked done, rounded to the nearest integer.
    /// An order with no lines reports zero rather than dividing by zero.
    pub fn progress(&self, status_of: impl Fn(&QuoteLineItem) -> FulfillmentStatus) -> u32 {
        if self.items.is_empty() {
            return 0;
        }
        let done = self
            .items
            .iter()
            .filter(|item| status_of(item).is_complete())
            .count();
        ((done as f64 / self.items.len() as f64) * 100.0).round() as u32
    }
}

/// Groups a quote's parts lines by supplier into purchase orders.
///
/// Groups keep first-appearance order so references stay stable across
/// renders as long as the lines do not move. Lines without a supplier
/// form their own group, and blank lines are skipped entirely.
pub fn group_by_supplier(quote_number: &str, items: &[QuoteLineItem]) -> Vec<PurchaseOrderGroup> {
    let mut groups: Vec<(Option<SupplierId>, Vec<QuoteLineItem>)> = Vec::new();

    for item in items.iter().filter(|item| !item.is_blank()) {
        match groups.iter_mut().find(|(key, _)| *key == item.supplier_id) {
            Some((_, members)) => members.push(item.clone()),
            None => groups.push((item.supplier_id, vec![item.clone()])),
        }
    }

    groups
        .into_iter()
        .enumerate()
        .map(|(index, (supplier_id, items))| {
            let total_ex_tax = items
                .iter()
                .map(QuoteLineItem::line_total_ex_tax)
                .sum::<Decimal>();
            PurchaseOrderGroup {
                reference: format!("BC-{}-{}", quote_number, index + 1),
                supplier_id,
                items,
                total_ex_tax,
            }
        })
        .collect()
}
