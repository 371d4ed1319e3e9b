use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::TransactionType;
use crate::types::{Amount, TransactionId};

/// A single income or expense entry, exactly as it is held in the stored blob.
///
/// The `amount` is always a positive magnitude; whether it adds to or subtracts from the balance
/// is decided by `transaction_type`. The `date` is fixed when the record is created and survives
/// every later edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Opaque identifier, unique within the collection.
    pub id: TransactionId,
    /// Free-text label, never empty.
    pub description: String,
    /// Positive magnitude of the entry.
    pub amount: Amount,
    /// Whether the entry is income or an expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Creation timestamp.
    pub date: DateTime<Utc>,
    /// Informational flag only; nothing is scheduled from it.
    #[serde(default)]
    pub recurring: bool
}

impl Transaction {
    /// The contribution of this entry to the balance.
    pub fn signed_amount(&self) -> Decimal {
        self.amount.value() * self.transaction_type.sign()
    }
}
