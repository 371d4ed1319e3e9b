use crate::storage::StorageError;
use crate::types::{AmountError, TransactionId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Validation error: Description is required")]
    EmptyDescription,
    #[error("Validation error: {0}")]
    InvalidAmount(#[from] AmountError)
}

#[derive(Debug, Error)]
pub enum MutationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Transaction [{0}] was not found")]
    NotFound(TransactionId),
    #[error("Transaction [{0}] was removed before the edit was submitted")]
    StaleEdit(TransactionId),
    #[error(transparent)]
    Storage(#[from] StorageError)
}
