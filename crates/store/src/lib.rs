//! In-memory persistence: typed record collections behind a small trait,
//! sequence counters for document numbering, and the warehouse bundling
//! one collection per record type.

pub mod collection;
pub mod counter;
pub mod error;
pub mod warehouse;

pub use collection::{Collection, InMemoryCollection};
pub use counter::SequenceCounter;
pub use error::{StoreError, StoreResult};
pub use warehouse::Warehouse;
