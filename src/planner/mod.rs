pub mod consolidate;
pub mod constants;
pub mod flow;
pub mod pantry;
pub mod progress;
pub mod scoring;
pub mod sections;

pub use consolidate::{consolidate_ingredients, ShoppingList};
pub use constants::*;
pub use flow::{
    approve_top_card, get_pending_cards, replace_top_card, ReplaceOutcome, ReplaceRequest,
};
pub use pantry::{deduct_pantry, PantryAdjusted, PantryItem};
pub use progress::{week_progress, DayProgress, WeekProgress};
pub use scoring::{rank_candidates, replacement_score, ScoredCandidate};
pub use sections::{group_by_section, section_for, SupermarketSection};
