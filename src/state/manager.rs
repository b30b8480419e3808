use tracing::info;

use crate::catalog::MealSource;
use crate::error::Result;
use crate::models::{DayKey, MealCard, PlanState, ReplaceCursors, SetupPreferences, WeekMeals};
use crate::planner::{
    approve_top_card, consolidate_ingredients, get_pending_cards, replace_top_card, week_progress,
    ReplaceRequest, ShoppingList, WeekProgress,
};

/// Holds the caller-side plan state and applies engine results to it.
///
/// Every action takes `&mut self`, so actions on one session are applied
/// one after another against the latest state.
pub struct PlanSession {
    state: PlanState,
    pool: WeekMeals,
}

impl PlanSession {
    pub fn new(state: PlanState, pool: WeekMeals) -> Self {
        Self { state, pool }
    }

    /// Start a fresh plan from a meal source.
    pub fn from_source(source: &dyn MealSource) -> Result<Self> {
        let week = source.week_plan()?;
        let pool = source.replacement_pool()?;
        info!(
            source = source.name(),
            meals = week.meal_count(),
            pool = pool.meal_count(),
            "starting new plan"
        );
        Ok(Self::new(PlanState::new(week), pool))
    }

    pub fn state(&self) -> &PlanState {
        &self.state
    }

    /// Cards still awaiting a decision for `day`.
    pub fn pending(&self, day: DayKey) -> Vec<&MealCard> {
        get_pending_cards(&self.state.week_meals, day, &self.state.approved_ids)
    }

    /// Approve the top card of `day`, returning the approved card.
    pub fn approve(&mut self, day: DayKey) -> Option<MealCard> {
        let top = self.pending(day).first().map(|card| (*card).clone())?;
        self.state.approved_ids =
            approve_top_card(&self.state.week_meals, day, &self.state.approved_ids);
        info!(%day, meal = %top.id, "approved");
        Some(top)
    }

    /// Swap the top card of `day`, returning the replacement if one was made.
    pub fn replace(&mut self, day: DayKey) -> Option<MealCard> {
        let outcome = replace_top_card(ReplaceRequest {
            week_meals: &self.state.week_meals,
            day,
            approved_ids: &self.state.approved_ids,
            replace_cursor_by_day: &self.state.replace_cursor_by_day,
            replacement_pool: &self.pool,
        });

        self.state.week_meals = outcome.week_meals;
        self.state.approved_ids = outcome.approved_ids;
        self.state.replace_cursor_by_day = outcome.replace_cursor_by_day;

        if let Some(replacement) = &outcome.replacement {
            info!(%day, meal = %replacement.id, "replaced top card");
        }
        outcome.replacement
    }

    pub fn shopping_list(&self) -> ShoppingList {
        consolidate_ingredients(&self.state.week_meals)
    }

    pub fn progress(&self) -> WeekProgress {
        week_progress(&self.state.week_meals, &self.state.approved_ids)
    }

    /// All cards in the week in day order.
    pub fn all_meals(&self) -> Vec<&MealCard> {
        self.state.week_meals.all_meals().collect()
    }

    pub fn set_preferences(&mut self, preferences: SetupPreferences) {
        self.state.preferences = Some(preferences);
    }

    /// Forget every approval.
    pub fn reset_approvals(&mut self) {
        self.state.approved_ids.clear();
    }

    /// Restart round-robin rotation for every day.
    pub fn reset_cursors(&mut self) {
        self.state.replace_cursor_by_day = ReplaceCursors::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BundledCatalog;
    use crate::models::SkillLevel;

    fn session() -> PlanSession {
        let mut week = WeekMeals::default();
        week.set(
            DayKey::Mon,
            vec![
                MealCard::new("a", "A", 20, SkillLevel::Beginner),
                MealCard::new("b", "B", 25, SkillLevel::Beginner),
            ],
        );
        let mut pool = WeekMeals::default();
        pool.set(DayKey::Mon, vec![MealCard::new("r1", "R1", 22, SkillLevel::Beginner)]);
        PlanSession::new(PlanState::new(week), pool)
    }

    #[test]
    fn test_approve_returns_card_then_none() {
        let mut session = session();
        assert_eq!(session.approve(DayKey::Mon).map(|c| c.id), Some("a".to_string()));
        assert_eq!(session.approve(DayKey::Mon).map(|c| c.id), Some("b".to_string()));
        assert!(session.approve(DayKey::Mon).is_none());
        assert_eq!(session.state().approved_ids, vec!["a", "b"]);
    }

    #[test]
    fn test_replace_updates_state() {
        let mut session = session();
        let replacement = session.replace(DayKey::Mon).unwrap();

        assert_eq!(replacement.id, "r1");
        assert_eq!(session.pending(DayKey::Mon)[0].id, "r1");
        assert_eq!(session.state().replace_cursor_by_day[DayKey::Mon], 1);
    }

    #[test]
    fn test_resets() {
        let mut session = session();
        session.approve(DayKey::Mon);
        session.replace(DayKey::Mon);
        session.reset_approvals();
        session.reset_cursors();

        assert!(session.state().approved_ids.is_empty());
        assert_eq!(session.state().replace_cursor_by_day[DayKey::Mon], 0);
    }

    #[test]
    fn test_from_bundled_source() {
        let session = PlanSession::from_source(&BundledCatalog).unwrap();
        assert_eq!(session.progress().total, 21);
        assert!(!session.shopping_list().is_empty());
    }
}
