use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use atelier_core::{record_id_newtype, DomainError, DomainResult, Entity};

use crate::case::CaseId;

record_id_newtype! {
    /// Expense identifier.
    ExpenseId
}

/// A cost booked against a case (parts bought, subcontracted work, ...).
///
/// Expenses are the cost side of the profitability view; revenue comes
/// from the case's quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub case_id: CaseId,
    pub label: String,
    pub amount: Decimal,
    pub spent_on: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    pub fn new(
        case_id: CaseId,
        label: impl Into<String>,
        amount: Decimal,
        spent_on: NaiveDate,
    ) -> DomainResult<Self> {
        if amount < Decimal::ZERO {
            return Err(DomainError::validation("expense amount must not be negative"));
        }

        Ok(Self {
            id: ExpenseId::new(),
            case_id,
            label: label.into(),
            amount,
            spent_on,
            created_at: Utc::now(),
        })
    }
}

impl Entity for Expense {
    type Id = ExpenseId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
