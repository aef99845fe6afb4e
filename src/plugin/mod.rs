//! Query orchestration: the entry points the launcher host dispatches to.

pub mod results;

use serde_json::{json, Value};

use crate::{
    api::{Budget, BudgetService},
    errors::{Error, Result},
    remedy::{remediation_for, Action, NEW_BUDGET_URL},
    resolve::resolve_active_budget,
    state::StateStore,
};
use crate::api::classify::{classify, Classification};
use results::{remediation_item, ResultItem};

const COMMAND_WORD: &str = "budget";

/// Host-managed settings. The access token is the sole gate on
/// functionality; everything else lives in the state file.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub access_token: Option<String>,
}

impl Settings {
    pub fn new(access_token: Option<String>) -> Self {
        Self { access_token }
    }

    fn has_access_token(&self) -> bool {
        self.access_token
            .as_deref()
            .map(str::trim)
            .is_some_and(|token| !token.is_empty())
    }
}

/// Answers a free-text query with selectable results.
///
/// Classifiable upstream failures render as a single remediation entry.
/// Anything else (unclassifiable failures, state-file I/O) propagates so the
/// host can report it instead of masking a genuine bug as an API error.
pub fn query<S: BudgetService>(
    service: &S,
    settings: &Settings,
    store: &StateStore,
    raw_query: &str,
) -> Result<Vec<ResultItem>> {
    if !settings.has_access_token() {
        return Ok(vec![missing_token_item()]);
    }

    match run_query(service, store, raw_query) {
        Ok(items) => Ok(items),
        Err(Error::Api(error)) => match classify(&error.message) {
            Classification::Classified(classified) => {
                tracing::debug!(message = %error.message, "rendering classified API failure");
                Ok(vec![remediation_item(&remediation_for(&classified))])
            }
            Classification::Unrecognized => Err(Error::Api(error)),
        },
        Err(other) => Err(other),
    }
}

fn run_query<S: BudgetService>(
    service: &S,
    store: &StateStore,
    raw_query: &str,
) -> Result<Vec<ResultItem>> {
    let Some(active) = resolve_active_budget(service, store)? else {
        return Ok(vec![no_budgets_item()]);
    };

    let trimmed = raw_query.trim();
    let lower = trimmed.to_lowercase();

    if lower.is_empty() || (COMMAND_WORD.starts_with(lower.as_str()) && lower != COMMAND_WORD) {
        return Ok(hint_items(&active));
    }

    if lower.starts_with(COMMAND_WORD) {
        let filter = trimmed
            .splitn(2, char::is_whitespace)
            .nth(1)
            .unwrap_or("")
            .trim()
            .to_lowercase();
        return budget_items(service, &filter);
    }

    Ok(Vec::new())
}

/// Persists a budget as the active one. Invoked by the host when the user
/// picks an entry from the `budget` listing.
pub fn select_budget(store: &StateStore, budget_id: &str) -> Result<()> {
    store.save(budget_id)
}

/// Context menu for a previously returned result: an open-in-browser entry
/// when the context data carries a URL, nothing otherwise.
pub fn context_menu(context_data: &Value) -> Vec<ResultItem> {
    let Some(url) = context_data.get("url").and_then(Value::as_str) else {
        return Vec::new();
    };
    let name = context_data
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("this budget");
    vec![
        ResultItem::new(format!("Open {} in YNAB", name), url.to_string())
            .with_action(Action::OpenUrl(url.to_string())),
    ]
}

fn hint_items(active: &Budget) -> Vec<ResultItem> {
    vec![
        ResultItem::new(
            "budget <name>",
            "List budgets matching <name> and pick the active one",
        ),
        ResultItem::new(
            format!("Active Budget: {}", active.name),
            "Open this budget in YNAB",
        )
        .with_action(Action::OpenUrl(active.url()))
        .with_context(budget_context(active)),
    ]
}

fn budget_items<S: BudgetService>(service: &S, filter: &str) -> Result<Vec<ResultItem>> {
    let budgets = service.list_budgets()?;
    let mut matches: Vec<&Budget> = budgets
        .values()
        .filter(|budget| budget.name.to_lowercase().contains(filter))
        .collect();
    matches.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));

    tracing::debug!(filter, count = matches.len(), "listing budgets");
    Ok(matches
        .into_iter()
        .map(|budget| {
            ResultItem::new(budget.name.clone(), "Set as the active budget")
                .with_action(Action::SelectBudget(budget.id.clone()))
                .with_context(budget_context(budget))
        })
        .collect())
}

fn budget_context(budget: &Budget) -> Value {
    json!({ "url": budget.url(), "name": budget.name })
}

fn missing_token_item() -> ResultItem {
    ResultItem::new(
        "YNAB access token is not configured",
        "Open the plugin settings and paste your personal access token",
    )
    .with_action(Action::OpenSettings)
}

fn no_budgets_item() -> ResultItem {
    ResultItem::new(
        "No budgets found",
        "Create a budget in YNAB to get started",
    )
    .with_action(Action::OpenUrl(NEW_BUDGET_URL.to_string()))
}
