use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{PlanError, Result};
use crate::models::PlanState;
use crate::planner::PantryItem;

/// Load plan state from a JSON file.
///
/// Meal cards are validated on the way in. Approved ids that are
/// duplicated or no longer belong to any day are dropped.
pub fn load_state<P: AsRef<Path>>(path: P) -> Result<PlanState> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(PlanError::StateNotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    let mut state: PlanState = serde_json::from_str(&content)?;

    let known: HashSet<&str> = state.week_meals.all_meals().map(|m| m.id.as_str()).collect();
    let mut seen: HashSet<String> = HashSet::new();
    let before = state.approved_ids.len();
    let kept: Vec<String> = state
        .approved_ids
        .iter()
        .filter(|id| known.contains(id.as_str()) && seen.insert((*id).clone()))
        .cloned()
        .collect();

    if kept.len() != before {
        warn!(
            dropped = before - kept.len(),
            "ignoring approved ids that are duplicated or not in the week"
        );
    }
    state.approved_ids = kept;

    info!(
        path = %path.display(),
        meals = state.week_meals.meal_count(),
        approved = state.approved_ids.len(),
        "loaded plan state"
    );
    Ok(state)
}

/// Save plan state to a JSON file.
pub fn save_state<P: AsRef<Path>>(path: P, state: &PlanState) -> Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path.as_ref(), json)?;
    info!(path = %path.as_ref().display(), "saved plan state");
    Ok(())
}

/// Load a pantry list: a JSON array of `{name, amount?, unit?}`.
pub fn load_pantry<P: AsRef<Path>>(path: P) -> Result<Vec<PantryItem>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let pantry: Vec<PantryItem> = serde_json::from_str(&content)?;

    for item in &pantry {
        if item.name.trim().is_empty() {
            return Err(PlanError::InvalidInput(
                "pantry item with an empty name".to_string(),
            ));
        }
        if let Some(amount) = item.amount {
            if !amount.is_finite() || amount < 0.0 {
                return Err(PlanError::InvalidInput(format!(
                    "pantry amount for '{}' must be zero or more, got {}",
                    item.name, amount
                )));
            }
        }
    }

    info!(path = %path.display(), items = pantry.len(), "loaded pantry");
    Ok(pantry)
}
