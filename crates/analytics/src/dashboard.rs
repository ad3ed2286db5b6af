use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use atelier_cases::{Case, CaseStatus};
use atelier_parties::ClientId;
use atelier_quotes::Quote;

/// Headline counters for the landing screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub client_count: usize,
    pub vehicle_count: usize,
    pub case_count: usize,
    pub open_case_count: usize,
    pub quote_count: usize,
    /// All quotes summed, tax included.
    pub total_quoted_inc_tax: Decimal,
    /// All case expenses summed.
    pub total_expenses: Decimal,
    /// Quoted revenue minus expenses.
    pub net_profit: Decimal,
}

/// One row of the top-clients ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRevenue {
    pub client_id: ClientId,
    pub revenue: Decimal,
    pub quote_count: usize,
}

/// How many cases sit in each status. Statuses with no cases are absent.
pub fn status_distribution(cases: &[Case]) -> HashMap<CaseStatus, usize> {
    let mut distribution = HashMap::new();
    for case in cases {
        *distribution.entry(case.status).or_insert(0) += 1;
    }
    distribution
}

/// Ranks clients by quoted revenue, best first, keeping at most `limit`.
///
/// A quote reaches a client through its case; quotes on a case without
/// a client count for nobody.
pub fn top_clients(quotes: &[Quote], cases: &[Case], limit: usize) -> Vec<ClientRevenue> {
    let client_of_case: HashMap<_, _> = cases
        .iter()
        .filter_map(|case| case.client_id.map(|client_id| (case.id, client_id)))
        .collect();

    let mut per_client: HashMap<ClientId, (Decimal, usize)> = HashMap::new();
    for quote in quotes {
        let Some(client_id) = client_of_case.get(&quote.case_id) else {
            continue;
        };
        let entry = per_client.entry(*client_id).or_insert((Decimal::ZERO, 0));
        entry.0 += quote.totals.total_inc_tax;
        entry.1 += 1;
    }

    let mut ranking: Vec<ClientRevenue> = per_client
        .into_iter()
        .map(|(client_id, (revenue, quote_count))| ClientRevenue {
            client_id,
            revenue,
            quote_count,
        })
        .collect();
    ranking.sort_by(|a, b| b.revenue.cmp(&a.revenue));
    ranking.truncate(limit);
    ranking
}
