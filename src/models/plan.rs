use serde::{Deserialize, Serialize};

use crate::models::day::DayMap;
use crate::models::meal::MealCard;
use crate::models::setup::SetupPreferences;

/// Proposal queue for every day. Index 0 of a day is the top of its stack.
pub type WeekMeals = DayMap<Vec<MealCard>>;

/// How many replacements have been issued per day.
pub type ReplaceCursors = DayMap<u32>;

impl WeekMeals {
    /// Total number of meal cards across the week.
    pub fn meal_count(&self) -> usize {
        self.values().map(Vec::len).sum()
    }

    /// All cards in day order, then in-day order.
    pub fn all_meals(&self) -> impl Iterator<Item = &MealCard> {
        self.values().flatten()
    }

    /// Find a card anywhere in the week by id.
    pub fn find_meal(&self, id: &str) -> Option<&MealCard> {
        self.all_meals().find(|m| m.id == id)
    }
}

/// Everything the caller keeps between sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanState {
    pub week_meals: WeekMeals,

    /// Approved card ids in approval order.
    #[serde(default)]
    pub approved_ids: Vec<String>,

    #[serde(default)]
    pub replace_cursor_by_day: ReplaceCursors,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<SetupPreferences>,
}

impl PlanState {
    pub fn new(week_meals: WeekMeals) -> Self {
        Self {
            week_meals,
            ..Default::default()
        }
    }
}
