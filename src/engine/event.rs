use serde::Deserialize;

use crate::models::TransactionType;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Submit,
    Edit,
    Cancel,
    Delete,
    Reset,
    Search
}

/// A single row from the input event CSV.
///
/// Each row is one discrete user interaction. Columns an action does not use may be left empty.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    /// What the user did.
    pub action: Action,
    /// Target transaction of `edit` and `delete`.
    #[serde(default)]
    pub id: Option<String>,
    /// Form description of a `submit`.
    #[serde(default)]
    pub description: Option<String>,
    /// Form amount text of a `submit`.
    #[serde(default)]
    pub amount: Option<String>,
    /// Form type selection of a `submit`.
    #[serde(rename = "type", default)]
    pub transaction_type: Option<TransactionType>,
    /// Form recurring checkbox of a `submit`.
    #[serde(default)]
    pub recurring: Option<bool>,
    /// The answer to the confirmation prompt of `delete` and `reset`.
    #[serde(default)]
    pub confirm: Option<bool>,
    /// The search box contents of a `search`.
    #[serde(default)]
    pub term: Option<String>
}

impl Event {
    pub fn new(action: Action) -> Self {
        Self {
            action,
            id: None,
            description: None,
            amount: None,
            transaction_type: None,
            recurring: None,
            confirm: None,
            term: None
        }
    }
}
