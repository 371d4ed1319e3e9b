mod amount;
mod errors;
#[cfg(test)]
mod tests;
mod transaction_id;

pub use amount::Amount;
pub use errors::AmountError;
pub use transaction_id::TransactionId;
