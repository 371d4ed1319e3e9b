use rust_decimal::Decimal;

use crate::models::Transaction;

/// Totals derived from the whole collection.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Summary {
    /// Sum of every signed contribution.
    pub balance: Decimal,
    /// Sum of the positive contributions.
    pub income_total: Decimal,
    /// Magnitude of the sum of the negative contributions.
    pub expense_total: Decimal
}

/// Computes the balance, income total and expense total of `transactions`.
///
/// Pure: the same input always yields the same summary. An empty collection yields all zeros.
pub fn aggregate(transactions: &[Transaction]) -> Summary {
    let mut summary = Summary::default();

    for transaction in transactions {
        let contribution = transaction.signed_amount();

        summary.balance = summary.balance.saturating_add(contribution);

        if contribution.is_sign_positive() {
            summary.income_total = summary.income_total.saturating_add(contribution);
        } else {
            summary.expense_total = summary.expense_total.saturating_sub(contribution);
        }
    }

    summary
}
