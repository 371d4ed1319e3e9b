use tracing::debug;

use crate::actors::errors::SessionError;
use crate::controller::{Confirmation, Draft, MutationController};
use crate::engine::{Action, Event};
use crate::models::Transaction;
use crate::storage::Storage;
use crate::types::TransactionId;
use crate::views::search;

/// The loaded collection together with the interaction state around it.
pub struct Session<S: Storage> {
    controller: MutationController<S>,
    search_term: String
}

impl<S: Storage> Session<S> {
    pub fn new(controller: MutationController<S>) -> Self {
        Self {
            controller,
            search_term: String::new()
        }
    }

    pub fn controller(&self) -> &MutationController<S> {
        &self.controller
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The transactions list as currently filtered by the search box, most recent first.
    pub fn visible(&self) -> Vec<&Transaction> {
        search(self.controller.store().all(), &self.search_term)
    }

    /// Applies one user event to completion.
    ///
    /// # Errors
    /// Returns `SessionError` if the event lacks a required column or the mutation it maps
    /// onto fails. The session stays usable either way.
    pub fn handle(&mut self, event: Event) -> Result<(), SessionError> {
        match event.action {
            Action::Submit => {
                let draft = self.draft_from(&event)?;
                let id = self.controller.submit(draft)?;
                debug!("Submit stored transaction [{id}]");
            },
            Action::Edit => {
                let id = Self::require_id(&event)?;
                self.controller.begin_edit(&id)?;
            },
            Action::Cancel => self.controller.cancel_edit(),
            Action::Delete => {
                let id = Self::require_id(&event)?;
                self.controller.remove(&id, Self::confirmation(&event))?;
            },
            Action::Reset => {
                self.controller.reset_all(Self::confirmation(&event))?;
            },
            Action::Search => {
                self.search_term = event.term.unwrap_or_default();
                debug!("Search [{}] matches [{}] transactions", self.search_term, self.visible().len());
            }
        }

        Ok(())
    }

    //NOTE: While editing, the form starts out filled with the target's values, so any column left
    //      empty keeps what was there.
    fn draft_from(&self, event: &Event) -> Result<Draft, SessionError> {
        let prefilled = self.controller.mode().draft();

        let transaction_type = event.transaction_type
            .or_else(|| prefilled.map(|draft| draft.transaction_type))
            .ok_or(SessionError::MissingType)?;

        let description = event.description.clone()
            .or_else(|| prefilled.map(|draft| draft.description.clone()))
            .unwrap_or_default();

        let amount = event.amount.clone()
            .or_else(|| prefilled.map(|draft| draft.amount.clone()))
            .unwrap_or_default();

        let recurring = event.recurring
            .or_else(|| prefilled.map(|draft| draft.recurring))
            .unwrap_or(false);

        Ok(Draft::new(description, amount, transaction_type).recurring(recurring))
    }

    fn require_id(event: &Event) -> Result<TransactionId, SessionError> {
        event.id.as_deref()
            .map(TransactionId::from)
            .ok_or(SessionError::MissingId(event.action))
    }

    fn confirmation(event: &Event) -> Confirmation {
        Confirmation::from(event.confirm.unwrap_or(false))
    }
}
