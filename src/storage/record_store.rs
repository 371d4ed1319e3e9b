use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::models::Transaction;
use crate::storage::errors::StorageError;
use crate::storage::Storage;
use crate::types::TransactionId;
use crate::views::{Dashboard, Observer, DEFAULT_RECENT_COUNT};

/// Owns the transaction collection and mirrors it to a single storage slot.
///
/// This is the only holder of the collection. Every successful save is followed by a recompute
/// pass that hands a fresh [`Dashboard`] to each subscribed [`Observer`].
pub struct RecordStore<S: Storage> {
    storage: Arc<S>,
    key: String,
    transactions: Vec<Transaction>,
    recent_count: usize,
    observers: Vec<Box<dyn Observer>>
}

impl<S: Storage> RecordStore<S> {
    /// Reads the collection stored under `key`.
    ///
    /// Never fails: a missing slot, an unreadable slot or a malformed blob all yield an empty
    /// collection. A malformed blob is copied to `<key>.corrupt` first so the next save cannot
    /// destroy it.
    pub fn load(storage: Arc<S>, key: impl Into<String>) -> Self {
        let key = key.into();

        let transactions = match storage.read(&key) {
            Ok(Some(blob)) => match decode(&blob) {
                Ok(transactions) => {
                    info!("Loaded [{}] transactions from [{key}]", transactions.len());
                    transactions
                },
                Err(error) => {
                    warn!("Discarding stored transactions in [{key}]: {error}");
                    backup_corrupt_blob(storage.as_ref(), &key, &blob);
                    Vec::new()
                }
            },
            Ok(None) => {
                info!("No stored transactions in [{key}], starting empty");
                Vec::new()
            },
            Err(error) => {
                warn!("Could not read stored transactions in [{key}], starting empty: {error}");
                Vec::new()
            }
        };

        Self {
            storage,
            key,
            transactions,
            recent_count: DEFAULT_RECENT_COUNT,
            observers: Vec::new()
        }
    }

    /// Sets how many transactions the recompute pass puts in the recent list.
    pub fn with_recent_count(mut self, recent_count: usize) -> Self {
        self.recent_count = recent_count;
        self
    }

    pub fn subscribe(&mut self, observer: Box<dyn Observer>) {
        self.observers.push(observer);
    }

    /// The current collection, oldest first.
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn find(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|transaction| &transaction.id == id)
    }

    pub fn contains(&self, id: &TransactionId) -> bool {
        self.find(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Replaces the whole collection, in storage first and then in memory, and refreshes observers.
    ///
    /// # Errors
    /// Returns `StorageError` if the blob could not be written; the previous collection is kept.
    pub fn save(&mut self, transactions: Vec<Transaction>) -> Result<(), StorageError> {
        let blob = serde_json::to_string(&transactions)?;
        self.storage.write(&self.key, &blob)?;

        debug!("Saved [{}] transactions to [{}]", transactions.len(), self.key);

        self.transactions = transactions;
        self.refresh();

        Ok(())
    }

    /// Recomputes the dashboard and hands it to every observer.
    pub fn refresh(&self) {
        if self.observers.is_empty() {
            return;
        }

        let dashboard = Dashboard::build(&self.transactions, self.recent_count);

        for observer in &self.observers {
            observer.refresh(&dashboard);
        }
    }
}

/// Parses a stored blob, rejecting it as a whole if any record breaks a collection invariant.
pub(crate) fn decode(blob: &str) -> Result<Vec<Transaction>, StorageError> {
    let transactions: Vec<Transaction> = serde_json::from_str(blob)?;
    let mut seen = HashSet::with_capacity(transactions.len());

    for transaction in &transactions {
        if transaction.description.trim().is_empty() {
            return Err(StorageError::InvalidData(format!("Transaction [{}] has an empty description", transaction.id)));
        }

        if !seen.insert(&transaction.id) {
            return Err(StorageError::InvalidData(format!("Transaction [{}] appears more than once", transaction.id)));
        }
    }

    Ok(transactions)
}

fn backup_corrupt_blob<S: Storage>(storage: &S, key: &str, blob: &str) {
    let backup_key = format!("{key}.corrupt");

    match storage.write(&backup_key, blob) {
        Ok(_) => warn!("Stored transactions were copied to [{backup_key}]"),
        Err(error) => warn!("Could not copy stored transactions to [{backup_key}]: {error}")
    }
}
