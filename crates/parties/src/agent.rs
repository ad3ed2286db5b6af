use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use atelier_core::{record_id_newtype, DomainError, DomainResult, Entity};

use crate::contact::ContactInfo;

record_id_newtype! {
    /// Insurance agent identifier.
    AgentId
}

/// The insurance agent brokering a case, optionally tied to a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub last_name: String,
    pub first_name: String,
    pub company: Option<String>,
    pub contact: ContactInfo,
    pub created_at: DateTime<Utc>,
}

impl Agent {
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
    ) -> DomainResult<Self> {
        let last_name = last_name.into();
        if last_name.trim().is_empty() {
            return Err(DomainError::validation("agent last name is required"));
        }

        Ok(Self {
            id: AgentId::new(),
            last_name,
            first_name: first_name.into(),
            company: None,
            contact: ContactInfo::default(),
            created_at: Utc::now(),
        })
    }

    /// Display label used on printed documents ("Bennis Omar - AXA Courtage").
    pub fn display_label(&self) -> String {
        let name = format!("{} {}", self.last_name, self.first_name);
        match &self.company {
            Some(company) => format!("{} - {}", name.trim_end(), company),
            None => name.trim_end().to_string(),
        }
    }
}

impl Entity for Agent {
    type Id = AgentId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_label_includes_company_when_present() {
        let mut agent = Agent::new("Bennis", "Omar").unwrap();
        assert_eq!(agent.display_label(), "Bennis Omar");

        agent.company = Some("AXA Courtage".to_string());
        assert_eq!(agent.display_label(), "Bennis Omar - AXA Courtage");
    }
}
