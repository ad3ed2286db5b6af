use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use atelier_cases::CaseId;
use atelier_core::{record_id_newtype, DomainError, DomainResult, Entity};

use crate::labor::LaborTotals;
use crate::totals::QuoteTotals;

record_id_newtype! {
    /// Quote identifier.
    QuoteId
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuoteStatus {
    Draft,
    Sent,
    Accepted,
    Rejected,
}

impl QuoteStatus {
    pub fn label(self) -> &'static str {
        match self {
            QuoteStatus::Draft => "Brouillon",
            QuoteStatus::Sent => "Envoyé",
            QuoteStatus::Accepted => "Accepté",
            QuoteStatus::Rejected => "Rejeté",
        }
    }
}

/// Quote header. Every quote belongs to a case. Line items live in their
/// own collection keyed by `quote_id`; `totals` is recomputed from them on
/// every save so the stored figures never drift from the lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: QuoteId,
    pub number: String,
    pub issued_on: NaiveDate,
    pub status: QuoteStatus,
    pub case_id: CaseId,
    pub labor: LaborTotals,
    pub totals: QuoteTotals,
    pub created_at: DateTime<Utc>,
}

impl Quote {
    pub fn new(
        number: impl Into<String>,
        issued_on: NaiveDate,
        case_id: CaseId,
    ) -> DomainResult<Self> {
        let number = number.into();
        if number.trim().is_empty() {
            return Err(DomainError::validation("quote number is required"));
        }

        Ok(Self {
            id: QuoteId::new(),
            number,
            issued_on,
            status: QuoteStatus::Draft,
            case_id,
            labor: LaborTotals::default(),
            totals: QuoteTotals::default(),
            created_at: Utc::now(),
        })
    }
}

impl Entity for Quote {
    type Id = QuoteId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
