use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use atelier_cases::Expense;
use atelier_quotes::Quote;

/// The money view of a single case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseProfitability {
    /// Sum of the case's quote totals, tax included.
    pub revenue: Decimal,
    /// Sum of the expenses booked against the case.
    pub expenses: Decimal,
    pub profit: Decimal,
    /// Profit over revenue as a percentage, rounded to two decimals.
    /// Zero when there is no revenue yet.
    pub margin_percent: Decimal,
}

pub fn case_profitability(quotes: &[Quote], expenses: &[Expense]) -> CaseProfitability {
    let revenue: Decimal = quotes.iter().map(|quote| quote.totals.total_inc_tax).sum();
    let spent: Decimal = expenses.iter().map(|expense| expense.amount).sum();
    let profit = revenue - spent;

    let margin_percent = if revenue == Decimal::ZERO {
        Decimal::ZERO
    } else {
        (profit / revenue * Decimal::new(100, 0))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    };

    CaseProfitability {
        revenue,
        expenses: spent,
        profit,
        margin_percent,
    }
}
