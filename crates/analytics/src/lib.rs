//! Read-only figures over the record collections: per-case profitability,
//! dashboard counters, top clients and the case status breakdown.
//!
//! Everything here is a pure function over slices so the same code serves
//! the live store and the tests.

pub mod dashboard;
pub mod profitability;

pub use dashboard::{status_distribution, top_clients, ClientRevenue, DashboardSummary};
pub use profitability::{case_profitability, CaseProfitability};
