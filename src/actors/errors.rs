use crate::controller::MutationError;
use crate::engine::Action;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Event [{0:?}] requires a transaction id")]
    MissingId(Action),
    #[error("Event [Submit] requires a transaction type when creating a transaction")]
    MissingType,
    #[error(transparent)]
    Mutation(#[from] MutationError)
}
