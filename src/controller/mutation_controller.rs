use std::str::FromStr;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::controller::errors::{MutationError, ValidationError};
use crate::controller::{Confirmation, Draft, Mode};
use crate::models::Transaction;
use crate::storage::{RecordStore, Storage};
use crate::types::{Amount, TransactionId};

/// Exclusive upper bound of generated identifiers.
pub const ID_SPACE: u32 = 100_000_000;

/// Checks raw form input and returns the trimmed description with the parsed amount.
///
/// # Errors
/// Returns `ValidationError` if the description is blank or the amount is blank, non-numeric
/// or not greater than zero.
pub fn validate_input(description: &str, amount: &str) -> Result<(String, Amount), ValidationError> {
    let description = description.trim();

    if description.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }

    let amount = Amount::from_str(amount)?;

    Ok((description.to_string(), amount))
}

/// Draws one identifier candidate. Callers must still check it against the collection.
pub(crate) fn candidate_id(rng: &mut StdRng) -> TransactionId {
    TransactionId::new(rng.gen_range(0..ID_SPACE).to_string())
}

/// Validates and applies every change to the collection, tracking whether the next submit
/// creates or edits a transaction.
pub struct MutationController<S: Storage> {
    store: RecordStore<S>,
    mode: Mode,
    rng: StdRng
}

impl<S: Storage> MutationController<S> {
    pub fn new(store: RecordStore<S>) -> Self {
        Self {
            store,
            mode: Mode::Create,
            rng: StdRng::from_entropy()
        }
    }

    /// Replaces the identifier source, mainly so tests can pin the sequence.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn store(&self) -> &RecordStore<S> {
        &self.store
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Creates a transaction or rewrites the one being edited, depending on the current mode.
    ///
    /// On success the controller returns to [`Mode::Create`] and the id of the written
    /// transaction is returned. A transaction edited in place keeps its id and creation date.
    ///
    /// # Errors
    /// - `Validation` if the draft is invalid; the mode is kept so the user can correct it.
    /// - `StaleEdit` if the edit target no longer exists; the mode falls back to Create.
    /// - `Storage` if the collection could not be persisted; nothing changes.
    pub fn submit(&mut self, draft: Draft) -> Result<TransactionId, MutationError> {
        let (description, amount) = validate_input(&draft.description, &draft.amount)?;

        let target = match &self.mode {
            Mode::Create => None,
            Mode::Editing { target, .. } => Some(target.clone())
        };

        match target {
            None => self.create(description, amount, &draft),
            Some(target) => self.update(target, description, amount, &draft)
        }
    }

    /// Switches to editing `id`, returning its current values for the form.
    ///
    /// # Errors
    /// Returns `NotFound` if no transaction has that id; the mode falls back to Create.
    pub fn begin_edit(&mut self, id: &TransactionId) -> Result<&Draft, MutationError> {
        let Some(transaction) = self.store.find(id) else {
            self.mode = Mode::Create;
            return Err(MutationError::NotFound(id.clone()));
        };

        let draft = Draft::from(transaction);
        debug!("Editing transaction [{id}]");

        self.mode = Mode::Editing { target: id.clone(), draft };

        self.mode.draft().ok_or_else(|| MutationError::NotFound(id.clone()))
    }

    /// Abandons an edit in progress without touching the collection.
    pub fn cancel_edit(&mut self) {
        if let Mode::Editing { target, .. } = &self.mode {
            debug!("Edit of transaction [{target}] cancelled");
        }

        self.mode = Mode::Create;
    }

    /// Deletes the transaction with `id` once the deletion is confirmed.
    ///
    /// Returns whether a transaction was removed. An unknown id is not an error and leaves the
    /// collection as it was.
    pub fn remove(&mut self, id: &TransactionId, confirmation: Confirmation) -> Result<bool, MutationError> {
        if confirmation == Confirmation::Declined {
            debug!("Deletion of transaction [{id}] was declined");
            return Ok(false);
        }

        let mut transactions = self.store.all().to_vec();
        let before = transactions.len();
        transactions.retain(|transaction| &transaction.id != id);
        let removed = transactions.len() != before;

        self.store.save(transactions)?;

        if removed {
            info!("Transaction [{id}] deleted");
        } else {
            warn!("Transaction [{id}] was not found, nothing deleted");
        }

        Ok(removed)
    }

    /// Empties the collection once the reset is confirmed. Any edit in progress is dropped.
    pub fn reset_all(&mut self, confirmation: Confirmation) -> Result<bool, MutationError> {
        if confirmation == Confirmation::Declined {
            debug!("Reset was declined");
            return Ok(false);
        }

        let count = self.store.len();
        self.store.save(Vec::new())?;
        self.mode = Mode::Create;

        info!("All [{count}] transactions were deleted");

        Ok(true)
    }

    fn create(&mut self, description: String, amount: Amount, draft: &Draft) -> Result<TransactionId, MutationError> {
        let transaction = Transaction {
            id: self.generate_id(),
            description,
            amount,
            transaction_type: draft.transaction_type,
            date: Utc::now(),
            recurring: draft.recurring
        };
        let id = transaction.id.clone();

        let mut transactions = self.store.all().to_vec();
        transactions.push(transaction);
        self.store.save(transactions)?;

        info!("Transaction [{id}]:[{}] of [{amount}] added", draft.transaction_type);

        Ok(id)
    }

    fn update(&mut self, target: TransactionId, description: String, amount: Amount, draft: &Draft) -> Result<TransactionId, MutationError> {
        let mut transactions = self.store.all().to_vec();

        let Some(transaction) = transactions.iter_mut().find(|transaction| transaction.id == target) else {
            self.mode = Mode::Create;
            return Err(MutationError::StaleEdit(target));
        };

        transaction.description = description;
        transaction.amount = amount;
        transaction.transaction_type = draft.transaction_type;
        transaction.recurring = draft.recurring;

        self.store.save(transactions)?;
        self.mode = Mode::Create;

        info!("Transaction [{target}]:[{}] updated to [{amount}]", draft.transaction_type);

        Ok(target)
    }

    fn generate_id(&mut self) -> TransactionId {
        loop {
            let id = candidate_id(&mut self.rng);

            if !self.store.contains(&id) {
                return id;
            }

            debug!("Generated id [{id}] already exists, drawing again");
        }
    }
}
