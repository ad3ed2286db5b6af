use std::collections::HashMap;

use rust_decimal::Decimal;

use atelier_analytics::{
    case_profitability, status_distribution, top_clients, CaseProfitability, ClientRevenue,
    DashboardSummary,
};
use atelier_cases::{CaseId, CaseStatus};
use atelier_store::{Collection, Warehouse};

use crate::error::ServiceResult;

/// Read side: dashboard counters, per-case profitability and the client
/// ranking, all computed on demand from the live collections.
#[derive(Clone)]
pub struct InsightsService {
    warehouse: Warehouse,
}

impl InsightsService {
    pub fn new(warehouse: Warehouse) -> Self {
        Self { warehouse }
    }

    pub fn dashboard(&self) -> ServiceResult<DashboardSummary> {
        let cases = self.warehouse.cases.list()?;
        let quotes = self.warehouse.quotes.list()?;
        let total_quoted_inc_tax: Decimal =
            quotes.iter().map(|quote| quote.totals.total_inc_tax).sum();
        let total_expenses: Decimal = self
            .warehouse
            .expenses
            .list()?
            .iter()
            .map(|expense| expense.amount)
            .sum();

        Ok(DashboardSummary {
            client_count: self.warehouse.clients.len()?,
            vehicle_count: self.warehouse.vehicles.len()?,
            case_count: cases.len(),
            open_case_count: cases
                .iter()
                .filter(|case| case.status == CaseStatus::Open)
                .count(),
            quote_count: quotes.len(),
            total_quoted_inc_tax,
            total_expenses,
            net_profit: total_quoted_inc_tax - total_expenses,
        })
    }

    pub fn case_profitability(&self, case_id: CaseId) -> ServiceResult<CaseProfitability> {
        let quotes = self.warehouse.quotes_for_case(case_id)?;
        let expenses = self.warehouse.expenses_for_case(case_id)?;
        Ok(case_profitability(&quotes, &expenses))
    }

    pub fn top_clients(&self, limit: usize) -> ServiceResult<Vec<ClientRevenue>> {
        let quotes = self.warehouse.quotes.list()?;
        let cases = self.warehouse.cases.list()?;
        Ok(top_clients(&quotes, &cases, limit))
    }

    pub fn status_distribution(&self) -> ServiceResult<HashMap<CaseStatus, usize>> {
        let cases = self.warehouse.cases.list()?;
        Ok(status_distribution(&cases))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_cases::{Case, Expense};
    use atelier_quotes::{Quote, QuoteTotals};
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn dashboard_counts_open_cases_separately() {
        let warehouse = Warehouse::new();
        let open = Case::new("AFF-2024-001", date()).unwrap();
        let mut accepted = Case::new("AFF-2024-002", date()).unwrap();
        accepted.status = CaseStatus::Accepted;
        warehouse.cases.insert(open).unwrap();
        warehouse.cases.insert(accepted).unwrap();

        let summary = InsightsService::new(warehouse).dashboard().unwrap();
        assert_eq!(summary.case_count, 2);
        assert_eq!(summary.open_case_count, 1);
    }

    #[test]
    fn profitability_joins_quotes_and_expenses_of_the_case() {
        let warehouse = Warehouse::new();
        let case = Case::new("AFF-2024-001", date()).unwrap();
        warehouse.cases.insert(case.clone()).unwrap();

        let mut quote = Quote::new("DEV-2024-001", date(), case.id).unwrap();
        quote.totals = QuoteTotals {
            total_ex_tax: Decimal::new(1000, 0),
            total_vat: Decimal::new(200, 0),
            total_inc_tax: Decimal::new(1200, 0),
        };
        warehouse.quotes.insert(quote).unwrap();
        warehouse
            .expenses
            .insert(Expense::new(case.id, "Pièces", Decimal::new(700, 0), date()).unwrap())
            .unwrap();

        let result = InsightsService::new(warehouse)
            .case_profitability(case.id)
            .unwrap();
        assert_eq!(result.revenue, Decimal::new(1200, 0));
        assert_eq!(result.profit, Decimal::new(500, 0));
    }
}
