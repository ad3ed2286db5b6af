use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use atelier_core::{record_id_newtype, DomainError, DomainResult, Entity};
use atelier_parties::SupplierId;

record_id_newtype! {
    /// Catalog article identifier.
    ArticleId
}

/// Reference data for a part or service that can be pulled into a quote.
///
/// Selecting an article pre-fills a line item's description, unit price and
/// default supplier; the line item then evolves independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogArticle {
    pub id: ArticleId,
    pub description: String,
    pub unit_price_ex_tax: Decimal,
    pub supplier_id: Option<SupplierId>,
    pub created_at: DateTime<Utc>,
}

impl CatalogArticle {
    pub fn new(
        description: impl Into<String>,
        unit_price_ex_tax: Decimal,
    ) -> DomainResult<Self> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(DomainError::validation("article description is required"));
        }
        if unit_price_ex_tax < Decimal::ZERO {
            return Err(DomainError::validation(
                "article unit price must not be negative",
            ));
        }

        Ok(Self {
            id: ArticleId::new(),
            description,
            unit_price_ex_tax,
            supplier_id: None,
            created_at: Utc::now(),
        })
    }

    pub fn with_supplier(mut self, supplier_id: SupplierId) -> Self {
        self.supplier_id = Some(supplier_id);
        self
    }
}

impl Entity for CatalogArticle {
    type Id = ArticleId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_description() {
        let err = CatalogArticle::new("   ", Decimal::new(100, 0)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rejects_negative_price() {
        let err = CatalogArticle::new("Pare-choc avant", Decimal::new(-1, 0)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn zero_price_is_allowed() {
        let article = CatalogArticle::new("Forfait geste commercial", Decimal::ZERO).unwrap();
        assert_eq!(article.unit_price_ex_tax, Decimal::ZERO);
    }
}
