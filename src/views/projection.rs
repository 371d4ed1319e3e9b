use crate::models::Transaction;

/// The last `count` transactions, most recent first.
pub fn recent(transactions: &[Transaction], count: usize) -> Vec<&Transaction> {
    transactions.iter().rev().take(count).collect()
}

/// Every transaction, most recent first.
pub fn full(transactions: &[Transaction]) -> Vec<&Transaction> {
    transactions.iter().rev().collect()
}

/// Transactions whose description contains `term` ignoring case, or whose amount contains it
/// literally, most recent first. An empty term matches everything.
pub fn search<'a>(transactions: &'a [Transaction], term: &str) -> Vec<&'a Transaction> {
    if term.is_empty() {
        return full(transactions);
    }

    let term = term.to_lowercase();

    transactions.iter()
        .rev()
        .filter(|transaction| {
            transaction.description.to_lowercase().contains(&term)
                || transaction.amount.to_string().contains(&term)
        })
        .collect()
}
