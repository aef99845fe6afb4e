//! Resolves the remembered budget id to a concrete budget.

use crate::{
    api::{
        classify::{classify, Classification, ClassifiedError, ErrorOutcome},
        ApiError, Budget, BudgetService, LAST_USED_BUDGET_ID,
    },
    errors::Result,
    state::StateStore,
};

const CODE_RESOURCE_NOT_FOUND: f64 = 404.2;

/// Loads the remembered id from `store` and resolves it. `Ok(None)` means the
/// account has no budgets at all.
pub fn resolve_active_budget<S: BudgetService>(
    service: &S,
    store: &StateStore,
) -> Result<Option<Budget>> {
    let state = store.load()?;
    resolve_remembered(service, store, &state.active_budget)
}

/// Fallback chain, at most two upstream lookups:
/// 1. Fetch `remembered_id` directly.
/// 2. On a `404.2` (budget gone) and a non-sentinel id, retry with the
///    `last-used` sentinel; persist the recovered budget's real id so the
///    stale reference heals itself.
/// 3. A `404.2` on the sentinel itself means no budgets exist: `Ok(None)`.
///
/// Any other failure propagates; it is not a missing budget.
pub fn resolve_remembered<S: BudgetService>(
    service: &S,
    store: &StateStore,
    remembered_id: &str,
) -> Result<Option<Budget>> {
    let error = match service.get_budget(remembered_id) {
        Ok(budget) => return Ok(Some(budget)),
        Err(error) => error,
    };

    if !is_budget_not_found(&error) {
        return Err(error.into());
    }

    if remembered_id == LAST_USED_BUDGET_ID {
        tracing::debug!("no last-used budget; account has no budgets");
        return Ok(None);
    }

    tracing::debug!(remembered_id, "remembered budget is gone, retrying with sentinel");
    match service.get_budget(LAST_USED_BUDGET_ID) {
        Ok(budget) => {
            store.save(&budget.id)?;
            tracing::info!(budget_id = %budget.id, "healed stale active-budget reference");
            Ok(Some(budget))
        }
        Err(retry_error) if is_budget_not_found(&retry_error) => Ok(None),
        Err(retry_error) => Err(retry_error.into()),
    }
}

fn is_budget_not_found(error: &ApiError) -> bool {
    matches!(
        classify(&error.message),
        Classification::Classified(ClassifiedError {
            outcome: ErrorOutcome::Parsed { code, .. },
            ..
        }) if code == CODE_RESOURCE_NOT_FOUND
    )
}
