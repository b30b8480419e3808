pub mod day;
pub mod meal;
pub mod plan;
pub mod setup;

pub use day::{DayKey, DayMap};
pub use meal::{Category, IngredientItem, MealCard, RawMealCard, SkillLevel};
pub use plan::{PlanState, ReplaceCursors, WeekMeals};
pub use setup::{MealType, Region, SetupInput, SetupPreferences};
