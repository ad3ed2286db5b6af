use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use atelier_core::{record_id_newtype, DomainError, DomainResult, Entity};

use crate::contact::ContactInfo;

record_id_newtype! {
    /// Insurance company identifier.
    InsurerId
}

/// An insurance company paying for (part of) a repair case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insurer {
    pub id: InsurerId,
    pub name: String,
    pub contact: ContactInfo,
    pub created_at: DateTime<Utc>,
}

impl Insurer {
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("insurer name is required"));
        }

        Ok(Self {
            id: InsurerId::new(),
            name,
            contact: ContactInfo::default(),
            created_at: Utc::now(),
        })
    }
}

impl Entity for Insurer {
    type Id = InsurerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
