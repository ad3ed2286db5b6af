//! Repair cases (affaires): the folder linking a client, vehicle, insurer,
//! expert and agent, plus the expenses booked against it.

pub mod case;
pub mod expense;

pub use case::{Case, CaseId, CaseStatus};
pub use expense::{Expense, ExpenseId};
