//! Application services: the use-case layer that ties the record store,
//! the pricing engine, purchasing and documents together.

pub mod config;
pub mod error;
pub mod insights;
pub mod quoting;
pub mod registry;

pub use config::ShopProfile;
pub use error::{ServiceError, ServiceResult};
pub use insights::InsightsService;
pub use quoting::{LineItemDraft, QuoteService};
pub use registry::Registry;
