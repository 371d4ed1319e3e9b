mod errors;
mod mode;
mod mutation_controller;

pub use errors::{MutationError, ValidationError};
pub use mode::{Confirmation, Draft, Mode};
pub use mutation_controller::{validate_input, MutationController};
