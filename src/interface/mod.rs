pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_shopping_csv;
pub use prompts::{fuzzy_matches, prompt_find_meal, prompt_yes_no, review_day, ReviewSummary};
pub use render::{
    display_meal, display_pantry_adjusted, display_pending, display_progress, display_sections,
    display_shopping_list, format_amount,
};
