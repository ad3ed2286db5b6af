use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use atelier_core::{record_id_newtype, DomainError, DomainResult, Entity};

use crate::contact::ContactInfo;

record_id_newtype! {
    /// Client identifier.
    ClientId
}

/// A garage client (the vehicle owner).
///
/// `code` is the human-readable file code printed on documents
/// (`CL00042`); it is assigned by the numbering service at registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub code: String,
    pub last_name: String,
    pub first_name: String,
    pub contact: ContactInfo,
    /// Moroccan company identifier (Identifiant Commun de l'Entreprise).
    pub ice: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Client {
    pub fn new(
        code: impl Into<String>,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
    ) -> DomainResult<Self> {
        let last_name = last_name.into();
        if last_name.trim().is_empty() {
            return Err(DomainError::validation("client last name is required"));
        }

        Ok(Self {
            id: ClientId::new(),
            code: code.into(),
            last_name,
            first_name: first_name.into(),
            contact: ContactInfo::default(),
            ice: None,
            created_at: Utc::now(),
        })
    }

    /// Display name, given name first ("Yasmine Alaoui").
    pub fn full_name(&self) -> String {
        if self.first_name.is_empty() {
            self.last_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

impl Entity for Client {
    type Id = ClientId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
