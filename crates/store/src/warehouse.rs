use std::sync::Arc;

use atelier_cases::{Case, CaseId, Expense};
use atelier_catalog::CatalogArticle;
use atelier_parties::{Agent, Client, Expert, Insurer, Supplier};
use atelier_purchasing::Fulfillment;
use atelier_quotes::{Quote, QuoteId, QuoteLineItem};
use atelier_vehicles::Vehicle;

use crate::collection::InMemoryCollection;
use crate::counter::SequenceCounter;
use crate::error::StoreResult;

/// One collection per record type plus the numbering counters.
///
/// Collections are `Arc`ed so services can hold just the ones they need;
/// cloning the warehouse clones handles, not data.
#[derive(Debug, Default, Clone)]
pub struct Warehouse {
    pub clients: Arc<InMemoryCollection<Client>>,
    pub vehicles: Arc<InMemoryCollection<Vehicle>>,
    pub suppliers: Arc<InMemoryCollection<Supplier>>,
    pub insurers: Arc<InMemoryCollection<Insurer>>,
    pub experts: Arc<InMemoryCollection<Expert>>,
    pub agents: Arc<InMemoryCollection<Agent>>,
    pub articles: Arc<InMemoryCollection<CatalogArticle>>,
    pub cases: Arc<InMemoryCollection<Case>>,
    pub expenses: Arc<InMemoryCollection<Expense>>,
    pub quotes: Arc<InMemoryCollection<Quote>>,
    pub quote_lines: Arc<InMemoryCollection<QuoteLineItem>>,
    pub fulfillment: Arc<InMemoryCollection<Fulfillment>>,
    pub counters: Arc<SequenceCounter>,
}

impl Warehouse {
    pub fn new() -> Self {
        Self::default()
    }

    /// A quote's lines, in on-screen order.
    pub fn lines_for_quote(&self, quote_id: QuoteId) -> StoreResult<Vec<QuoteLineItem>> {
        let mut lines = self.quote_lines.scan(|records| {
            records
                .values()
                .filter(|line| line.quote_id == quote_id)
                .cloned()
                .collect::<Vec<_>>()
        })?;
        lines.sort_by_key(|line| line.position);
        Ok(lines)
    }

    /// Swaps a quote's lines for a new set in one exclusive section, so a
    /// concurrent reader never observes the quote with no lines at all.
    /// Fulfillment entries for lines that did not survive are dropped.
    pub fn replace_quote_lines(
        &self,
        quote_id: QuoteId,
        lines: Vec<QuoteLineItem>,
    ) -> StoreResult<()> {
        self.quote_lines.mutate(|records| {
            records.retain(|_, line| line.quote_id != quote_id);
            for line in lines {
                records.insert(line.id, line);
            }
        })?;

        let surviving: std::collections::HashSet<_> =
            self.quote_lines.scan(|all| all.keys().copied().collect())?;
        self.fulfillment.mutate(|records| {
            records.retain(|line_id, _| surviving.contains(line_id));
        })?;

        Ok(())
    }

    /// All expenses booked against a case.
    pub fn expenses_for_case(&self, case_id: CaseId) -> StoreResult<Vec<Expense>> {
        self.expenses.scan(|records| {
            records
                .values()
                .filter(|expense| expense.case_id == case_id)
                .cloned()
                .collect()
        })
    }

    /// All quotes attached to a case.
    pub fn quotes_for_case(&self, case_id: CaseId) -> StoreResult<Vec<Quote>> {
        self.quotes.scan(|records| {
            records
                .values()
                .filter(|quote| quote.case_id == case_id)
                .cloned()
                .collect()
        })
    }
}
