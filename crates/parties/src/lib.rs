//! People and organizations around a repair case.
//!
//! Flat records with validating constructors: clients, suppliers, insurers,
//! experts and agents carry no computed state beyond their identity.

pub mod agent;
pub mod client;
pub mod contact;
pub mod expert;
pub mod insurer;
pub mod supplier;

pub use agent::{Agent, AgentId};
pub use client::{Client, ClientId};
pub use contact::ContactInfo;
pub use expert::{Expert, ExpertId};
pub use insurer::{Insurer, InsurerId};
pub use supplier::{Supplier, SupplierId};
