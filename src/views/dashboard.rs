use rust_decimal::Decimal;

use crate::models::Transaction;
use crate::views::aggregate::{aggregate, Summary};
use crate::views::projection::recent;

pub const DEFAULT_RECENT_COUNT: usize = 5;

/// One slice of the income versus expense chart.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ChartSlice {
    pub label: &'static str,
    pub total: Decimal,
    /// Percentage of the combined income and expense totals.
    pub share: Decimal
}

/// Everything the presentation layer needs after a recompute pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub summary: Summary,
    pub recent: Vec<Transaction>,
    pub chart: [ChartSlice; 2]
}

impl Dashboard {
    pub fn build(transactions: &[Transaction], recent_count: usize) -> Self {
        let summary = aggregate(transactions);
        let combined = summary.income_total.saturating_add(summary.expense_total);

        let share = |total: Decimal| {
            total.checked_mul(Decimal::ONE_HUNDRED)
                .and_then(|scaled| scaled.checked_div(combined))
                .map(|share| share.round_dp(2))
                .unwrap_or(Decimal::ZERO)
        };

        Self {
            summary,
            recent: recent(transactions, recent_count).into_iter().cloned().collect(),
            chart: [
                ChartSlice { label: "Income", total: summary.income_total, share: share(summary.income_total) },
                ChartSlice { label: "Expense", total: summary.expense_total, share: share(summary.expense_total) }
            ]
        }
    }
}
