use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use atelier_core::{record_id_newtype, DomainError, DomainResult, Entity};
use atelier_parties::ClientId;

record_id_newtype! {
    /// Vehicle identifier.
    VehicleId
}

/// A client vehicle under repair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    /// Registration plate ("12345-A-6").
    pub registration: String,
    pub make: String,
    pub model: String,
    pub chassis_number: Option<String>,
    /// First-registration date (date de mise en circulation).
    pub first_registration: Option<NaiveDate>,
    pub client_id: ClientId,
    pub created_at: DateTime<Utc>,
}

impl Vehicle {
    pub fn new(
        registration: impl Into<String>,
        make: impl Into<String>,
        model: impl Into<String>,
        client_id: ClientId,
    ) -> DomainResult<Self> {
        let registration = registration.into();
        if registration.trim().is_empty() {
            return Err(DomainError::validation("vehicle registration is required"));
        }

        Ok(Self {
            id: VehicleId::new(),
            registration,
            make: make.into(),
            model: model.into(),
            chassis_number: None,
            first_registration: None,
            client_id,
            created_at: Utc::now(),
        })
    }

    /// Display label ("Dacia Logan (12345-A-6)").
    pub fn display_label(&self) -> String {
        format!("{} {} ({})", self.make, self.model, self.registration)
    }
}

impl Entity for Vehicle {
    type Id = VehicleId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
