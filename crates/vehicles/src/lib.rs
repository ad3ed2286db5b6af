//! Vehicle records.

pub mod vehicle;

pub use vehicle::{Vehicle, VehicleId};
