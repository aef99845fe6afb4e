//! Types the upstream budgeting service exposes to this plugin.

pub mod classify;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Budget id the service resolves to whatever the user touched last.
pub const LAST_USED_BUDGET_ID: &str = "last-used";

/// A budget as the upstream service reports it; referenced, never owned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub id: String,
    pub name: String,
}

impl Budget {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Web URL for this budget in the YNAB app.
    pub fn url(&self) -> String {
        budget_url(&self.id)
    }
}

pub fn budget_url(id: &str) -> String {
    format!("https://app.ynab.com/{}/budget", id)
}

/// Failure raised by the upstream client. The message is either the
/// `api error:<code>-<name>-<detail>` mini-format or an arbitrary string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The budget-listing capability this plugin consumes. Implemented by the
/// real YNAB client outside this crate and by scripted stubs in tests.
pub trait BudgetService {
    fn list_budgets(&self) -> Result<BTreeMap<String, Budget>, ApiError>;

    fn get_budget(&self, id: &str) -> Result<Budget, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_url_embeds_the_id() {
        let budget = Budget::new("B1", "Groceries");
        assert_eq!(budget.url(), "https://app.ynab.com/B1/budget");
    }
}
