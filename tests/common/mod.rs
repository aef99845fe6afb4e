use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, VecDeque};

use flow_ynab::api::{ApiError, Budget, BudgetService, LAST_USED_BUDGET_ID};
use flow_ynab::state::StateStore;
use tempfile::TempDir;

/// In-memory service stub: a fixed budget listing plus scripted per-id
/// lookup responses, recording every lookup it receives.
pub struct ScriptedService {
    budgets: BTreeMap<String, Budget>,
    list_error: Option<ApiError>,
    lookups: RefCell<HashMap<String, VecDeque<Result<Budget, ApiError>>>>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedService {
    pub fn new() -> Self {
        Self {
            budgets: BTreeMap::new(),
            list_error: None,
            lookups: RefCell::new(HashMap::new()),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Stub with the given budgets; unscripted lookups resolve against the
    /// listing, with the sentinel mapping to the first budget.
    pub fn with_budgets(entries: &[(&str, &str)]) -> Self {
        let mut service = Self::new();
        for (id, name) in entries {
            service
                .budgets
                .insert(id.to_string(), Budget::new(*id, *name));
        }
        service
    }

    pub fn script_lookup(&mut self, id: &str, response: Result<Budget, ApiError>) {
        self.lookups
            .borrow_mut()
            .entry(id.to_string())
            .or_default()
            .push_back(response);
    }

    pub fn script_list_error(&mut self, error: ApiError) {
        self.list_error = Some(error);
    }

    pub fn lookup_calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl BudgetService for ScriptedService {
    fn list_budgets(&self) -> Result<BTreeMap<String, Budget>, ApiError> {
        match &self.list_error {
            Some(error) => Err(error.clone()),
            None => Ok(self.budgets.clone()),
        }
    }

    fn get_budget(&self, id: &str) -> Result<Budget, ApiError> {
        self.calls.borrow_mut().push(id.to_string());
        if let Some(scripted) = self
            .lookups
            .borrow_mut()
            .get_mut(id)
            .and_then(VecDeque::pop_front)
        {
            return scripted;
        }
        if id == LAST_USED_BUDGET_ID {
            if let Some(first) = self.budgets.values().next() {
                return Ok(first.clone());
            }
        }
        self.budgets.get(id).cloned().ok_or_else(budget_not_found)
    }
}

/// The upstream "budget not found" error in its wire string form.
pub fn budget_not_found() -> ApiError {
    ApiError::new("api error:404.2-not_found-The requested budget was not found")
}

/// Store rooted in its own temp dir; the guard keeps the dir alive.
pub fn temp_store() -> (StateStore, TempDir) {
    let temp = TempDir::new().expect("create temp dir");
    let store = StateStore::new(temp.path().join("state.json"));
    (store, temp)
}
