//! Persisted record of which budget the user last selected.

use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::{
    api::LAST_USED_BUDGET_ID,
    errors::Result,
    utils::{self, write_atomic},
};

/// The single persisted record. Unknown keys in older files are tolerated on
/// read (missing key falls back to the sentinel) and discarded on write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveBudgetState {
    #[serde(default = "default_active_budget")]
    pub active_budget: String,
}

impl Default for ActiveBudgetState {
    fn default() -> Self {
        Self {
            active_budget: default_active_budget(),
        }
    }
}

fn default_active_budget() -> String {
    LAST_USED_BUDGET_ID.to_string()
}

/// Reads and writes the active-budget state file.
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the host-provided default location.
    pub fn new_default() -> Self {
        Self::new(utils::state_file())
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Loads the state, creating the file with the sentinel on first use.
    /// A file that exists but does not parse propagates the failure.
    pub fn load(&self) -> Result<ActiveBudgetState> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            let state = ActiveBudgetState::default();
            tracing::debug!(path = %self.path.display(), "creating state file with sentinel");
            self.write(&state)?;
            Ok(state)
        }
    }

    /// Overwrites the file with the given budget id. Full replacement, not a
    /// merge; the schema has exactly one field.
    pub fn save(&self, budget_id: &str) -> Result<()> {
        let state = ActiveBudgetState {
            active_budget: budget_id.to_string(),
        };
        tracing::debug!(budget_id, "persisting active budget");
        self.write(&state)
    }

    fn write(&self, state: &ActiveBudgetState) -> Result<()> {
        let json = serde_json::to_string_pretty(state)?;
        write_atomic(&self.path, &json)?;
        Ok(())
    }
}
