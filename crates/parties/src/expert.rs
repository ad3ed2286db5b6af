use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use atelier_core::{record_id_newtype, DomainError, DomainResult, Entity};

use crate::contact::ContactInfo;

record_id_newtype! {
    /// Claims expert identifier.
    ExpertId
}

/// The claims expert assessing damage on behalf of an insurer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expert {
    pub id: ExpertId,
    pub last_name: String,
    pub first_name: String,
    pub contact: ContactInfo,
    pub created_at: DateTime<Utc>,
}

impl Expert {
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
    ) -> DomainResult<Self> {
        let last_name = last_name.into();
        if last_name.trim().is_empty() {
            return Err(DomainError::validation("expert last name is required"));
        }

        Ok(Self {
            id: ExpertId::new(),
            last_name,
            first_name: first_name.into(),
            contact: ContactInfo::default(),
            created_at: Utc::now(),
        })
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
            .trim_end()
            .to_string()
    }
}

impl Entity for Expert {
    type Id = ExpertId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
