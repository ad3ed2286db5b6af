//! Quotes (devis): line items, labor, and the pricing engine that turns
//! them into HT / TVA / TTC totals.

pub mod labor;
pub mod line_item;
pub mod quote;
pub mod totals;

pub use labor::LaborTotals;
pub use line_item::{
    coerce_quantity, coerce_unit_price, parse_quantity, InterventionKind, LineItemId,
    QuoteLineItem,
};
pub use quote::{Quote, QuoteId, QuoteStatus};
pub use totals::{compute_totals, QuoteTotals, LABOR_VAT_RATE, STANDARD_VAT_RATE};
