use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use atelier_catalog::{ArticleId, CatalogArticle};
use atelier_core::{record_id_newtype, Entity};
use atelier_parties::SupplierId;

use crate::quote::QuoteId;

record_id_newtype! {
    /// Quote line item identifier.
    LineItemId
}

/// How a damaged part is handled on a quote line.
///
/// The kind drives the VAT treatment: a used (occasion) part is sold
/// VAT-exempt, everything else carries the standard rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InterventionKind {
    /// Replace with a new OEM part.
    Replacement,
    /// Replace with a second-hand part.
    Used,
    /// Repair the existing part.
    Repair,
    /// Fit a part that was not previously there.
    New,
}

impl InterventionKind {
    /// French label shown in the intervention column.
    pub fn label(self) -> &'static str {
        match self {
            InterventionKind::Replacement => "Remplacement",
            InterventionKind::Used => "Occasion",
            InterventionKind::Repair => "Réparation",
            InterventionKind::New => "Neuf",
        }
    }

    /// Used parts are exempt from VAT.
    pub fn is_vat_exempt(self) -> bool {
        matches!(self, InterventionKind::Used)
    }
}

/// One parts line on a quote.
///
/// `position` preserves on-screen ordering; line items are stored
/// separately from the quote header and replaced wholesale on save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteLineItem {
    pub id: LineItemId,
    pub quote_id: QuoteId,
    pub position: u32,
    pub description: String,
    pub quantity: u32,
    pub unit_price_ex_tax: Decimal,
    pub intervention: InterventionKind,
    pub supplier_id: Option<SupplierId>,
    /// Set when the line was composed from a catalog article.
    pub article_id: Option<ArticleId>,
}

impl QuoteLineItem {
    /// Builds a line with input coercion applied: quantity is clamped to at
    /// least 1 and a negative unit price falls back to zero. Bad numeric
    /// input never fails a save, it degrades to the harmless value.
    pub fn new(
        quote_id: QuoteId,
        position: u32,
        description: impl Into<String>,
        quantity: u32,
        unit_price_ex_tax: Decimal,
        intervention: InterventionKind,
    ) -> Self {
        Self {
            id: LineItemId::new(),
            quote_id,
            position,
            description: description.into(),
            quantity: coerce_quantity(quantity),
            unit_price_ex_tax: coerce_unit_price(unit_price_ex_tax),
            intervention,
            supplier_id: None,
            article_id: None,
        }
    }

    /// Composes a line from a catalog article: description, unit price and
    /// default supplier are pre-filled, and the article is referenced so
    /// later price changes in the catalog do not rewrite history.
    pub fn from_article(
        quote_id: QuoteId,
        position: u32,
        article: &CatalogArticle,
        quantity: u32,
        intervention: InterventionKind,
    ) -> Self {
        let mut line = Self::new(
            quote_id,
            position,
            article.description.clone(),
            quantity,
            article.unit_price_ex_tax,
            intervention,
        );
        line.supplier_id = article.supplier_id;
        line.article_id = Some(article.id);
        line
    }

    pub fn with_supplier(mut self, supplier_id: SupplierId) -> Self {
        self.supplier_id = Some(supplier_id);
        self
    }

    /// Line subtotal before tax: quantity × unit price.
    pub fn line_total_ex_tax(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price_ex_tax
    }

    /// A line whose description is blank is dropped at save time.
    pub fn is_blank(&self) -> bool {
        self.description.trim().is_empty()
    }
}

impl Entity for QuoteLineItem {
    type Id = LineItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A quantity of zero makes no sense on a parts line; clamp to 1.
pub fn coerce_quantity(quantity: u32) -> u32 {
    quantity.max(1)
}

/// Quantity form input: zero, negative or unparsable all coerce to 1.
pub fn parse_quantity(input: &str) -> u32 {
    match input.trim().parse::<i64>() {
        Ok(n) if n >= 1 => n.min(u32::MAX as i64) as u32,
        _ => 1,
    }
}

/// Negative prices fall back to zero rather than failing the save.
pub fn coerce_unit_price(price: Decimal) -> Decimal {
    if price < Decimal::ZERO {
        Decimal::ZERO
    } else {
        price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: u32, price: Decimal) -> QuoteLineItem {
        QuoteLineItem::new(
            QuoteId::new(),
            0,
            "Pare-choc avant",
            quantity,
            price,
            InterventionKind::Replacement,
        )
    }

    #[test]
    fn zero_quantity_coerces_to_one() {
        let line = item(0, Decimal::new(100, 0));
        assert_eq!(line.quantity, 1);
        assert_eq!(line.line_total_ex_tax(), Decimal::new(100, 0));
    }

    #[test]
    fn negative_price_coerces_to_zero() {
        let line = item(2, Decimal::new(-50, 0));
        assert_eq!(line.unit_price_ex_tax, Decimal::ZERO);
        assert_eq!(line.line_total_ex_tax(), Decimal::ZERO);
    }

    #[test]
    fn line_total_multiplies_quantity() {
        let line = item(3, Decimal::new(1255, 2));
        assert_eq!(line.line_total_ex_tax(), Decimal::new(3765, 2));
    }

    #[test]
    fn quantity_input_coerces_to_one() {
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity("-5"), 1);
        assert_eq!(parse_quantity("abc"), 1);
        assert_eq!(parse_quantity(""), 1);
        assert_eq!(parse_quantity(" 4 "), 4);
    }

    #[test]
    fn only_used_parts_are_exempt() {
        assert!(InterventionKind::Used.is_vat_exempt());
        assert!(!InterventionKind::Replacement.is_vat_exempt());
        assert!(!InterventionKind::Repair.is_vat_exempt());
        assert!(!InterventionKind::New.is_vat_exempt());
    }

    #[test]
    fn from_article_prefills_and_references() {
        let article = CatalogArticle::new("Pare-brise", Decimal::new(2400, 0))
            .unwrap()
            .with_supplier(SupplierId::new());
        let line = QuoteLineItem::from_article(
            QuoteId::new(),
            0,
            &article,
            1,
            InterventionKind::Replacement,
        );
        assert_eq!(line.description, "Pare-brise");
        assert_eq!(line.unit_price_ex_tax, Decimal::new(2400, 0));
        assert_eq!(line.supplier_id, article.supplier_id);
        assert_eq!(line.article_id, Some(article.id));
    }

    #[test]
    fn blank_description_is_detected() {
        let line = item(1, Decimal::ONE);
        assert!(!line.is_blank());
        let mut blank = line.clone();
        blank.description = "   ".into();
        assert!(blank.is_blank());
    }
}
