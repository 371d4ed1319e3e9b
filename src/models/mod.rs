mod transaction;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

pub use transaction::Transaction;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense
}

impl TransactionType {
    /// The direction this type moves the balance in.
    pub fn sign(&self) -> Decimal {
        match self {
            TransactionType::Income => Decimal::ONE,
            TransactionType::Expense => Decimal::NEGATIVE_ONE
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Income => formatter.write_str("income"),
            TransactionType::Expense => formatter.write_str("expense")
        }
    }
}
