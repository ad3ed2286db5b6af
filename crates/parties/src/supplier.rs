use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use atelier_core::{record_id_newtype, DomainError, DomainResult, Entity};

use crate::contact::ContactInfo;

record_id_newtype! {
    /// Supplier identifier.
    SupplierId
}

/// A parts supplier. Quote line items and catalog articles reference it;
/// purchase orders are grouped per supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    pub contact: ContactInfo,
    pub created_at: DateTime<Utc>,
}

impl Supplier {
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("supplier name is required"));
        }

        Ok(Self {
            id: SupplierId::new(),
            name,
            contact: ContactInfo::default(),
            created_at: Utc::now(),
        })
    }
}

impl Entity for Supplier {
    type Id = SupplierId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
