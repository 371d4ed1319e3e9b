use crate::models::{Transaction, TransactionType};
use crate::types::TransactionId;

/// Raw form values as the input collaborator supplies them.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Draft {
    pub description: String,
    /// Unparsed amount text.
    pub amount: String,
    pub transaction_type: TransactionType,
    pub recurring: bool
}

impl Draft {
    pub fn new(description: impl Into<String>, amount: impl Into<String>, transaction_type: TransactionType) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            transaction_type,
            recurring: false
        }
    }

    pub fn recurring(mut self, recurring: bool) -> Self {
        self.recurring = recurring;
        self
    }
}

impl From<&Transaction> for Draft {
    fn from(transaction: &Transaction) -> Self {
        Self {
            description: transaction.description.clone(),
            amount: transaction.amount.to_string(),
            transaction_type: transaction.transaction_type,
            recurring: transaction.recurring
        }
    }
}

/// What a submit will do.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub enum Mode {
    /// Submitting appends a new transaction.
    #[default]
    Create,
    /// Submitting rewrites `target`; `draft` holds its values as they were when editing began.
    Editing {
        target: TransactionId,
        draft: Draft
    }
}

impl Mode {
    pub fn draft(&self) -> Option<&Draft> {
        match self {
            Mode::Create => None,
            Mode::Editing { draft, .. } => Some(draft)
        }
    }
}

/// The confirmation collaborator's answer to a destructive request.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Confirmation {
    Accepted,
    Declined
}

impl From<bool> for Confirmation {
    fn from(accepted: bool) -> Self {
        if accepted { Confirmation::Accepted } else { Confirmation::Declined }
    }
}
