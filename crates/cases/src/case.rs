use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use atelier_core::{record_id_newtype, DomainError, DomainResult, Entity};
use atelier_parties::{AgentId, ClientId, ExpertId, InsurerId};
use atelier_vehicles::VehicleId;

record_id_newtype! {
    /// Repair case identifier.
    CaseId
}

/// Case lifecycle, as shown on the case board.
///
/// Transitions are driven by explicit user action; nothing in the domain
/// advances a case automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseStatus {
    Open,
    InProgress,
    Prepared,
    Sent,
    Accepted,
    Rejected,
}

impl CaseStatus {
    /// French label used on screens and documents.
    pub fn label(self) -> &'static str {
        match self {
            CaseStatus::Open => "Ouvert",
            CaseStatus::InProgress => "En cours",
            CaseStatus::Prepared => "Préparé",
            CaseStatus::Sent => "Envoyé",
            CaseStatus::Accepted => "Accepté",
            CaseStatus::Rejected => "Rejeté",
        }
    }
}

/// A repair case folder.
///
/// All links are optional: a case can be opened before the insurer or
/// expert is known. `number` is assigned by the numbering service
/// (`AFF-<year>-NNN`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub id: CaseId,
    pub number: String,
    pub opened_on: NaiveDate,
    pub status: CaseStatus,
    pub client_id: Option<ClientId>,
    pub vehicle_id: Option<VehicleId>,
    pub insurer_id: Option<InsurerId>,
    pub expert_id: Option<ExpertId>,
    pub agent_id: Option<AgentId>,
    pub description: Option<String>,
    /// Insurance policy number.
    pub policy_number: Option<String>,
    /// Insurer-side claim reference (réf sinistre).
    pub claim_ref: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Case {
    pub fn new(number: impl Into<String>, opened_on: NaiveDate) -> DomainResult<Self> {
        let number = number.into();
        if number.trim().is_empty() {
            return Err(DomainError::validation("case number is required"));
        }

        Ok(Self {
            id: CaseId::new(),
            number,
            opened_on,
            status: CaseStatus::Open,
            client_id: None,
            vehicle_id: None,
            insurer_id: None,
            expert_id: None,
            agent_id: None,
            description: None,
            policy_number: None,
            claim_ref: None,
            created_at: Utc::now(),
        })
    }
}

impl Entity for Case {
    type Id = CaseId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
