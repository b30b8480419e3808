use dialoguer::{Confirm, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::interface::render::display_meal;
use crate::models::{DayKey, MealCard};
use crate::planner::constants::{FUZZY_MATCH_LIMIT, FUZZY_MATCH_THRESHOLD};
use crate::state::PlanSession;

/// Counts of what happened during an interactive review.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewSummary {
    pub approved: usize,
    pub replaced: usize,
}

impl ReviewSummary {
    pub fn changed(&self) -> bool {
        self.approved + self.replaced > 0
    }
}

/// Walk through the pending cards of a day, approving or replacing the top
/// card until the day is done or the user stops.
pub fn review_day(session: &mut PlanSession, day: DayKey) -> Result<ReviewSummary> {
    let mut summary = ReviewSummary::default();
    let options = ["Approve", "Replace", "Stop"];

    loop {
        let top = match session.pending(day).first() {
            Some(card) => (*card).clone(),
            None => {
                println!("{}: all meals approved.", day);
                break;
            }
        };

        println!();
        display_meal(&top);
        println!();

        let selection = Select::new()
            .with_prompt(format!("{}: what about '{}'?", day, top.title))
            .items(&options)
            .default(0)
            .interact()?;

        match selection {
            0 => {
                session.approve(day);
                summary.approved += 1;
            }
            1 => match session.replace(day) {
                Some(replacement) => {
                    println!("Swapped for: {}", replacement.title);
                    summary.replaced += 1;
                }
                None => println!("No replacement available for {}.", day),
            },
            _ => break,
        }
    }

    Ok(summary)
}

/// Meals whose title resembles `query`, best first.
pub fn fuzzy_matches<'a>(meals: &[&'a MealCard], query: &str) -> Vec<(&'a MealCard, f64)> {
    let query = query.trim().to_lowercase();
    let mut candidates: Vec<(&MealCard, f64)> = meals
        .iter()
        .map(|m| (*m, jaro_winkler(&m.title.to_lowercase(), &query)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.truncate(FUZZY_MATCH_LIMIT);
    candidates
}

/// Find a meal by id or title, asking the user to pick among near matches.
pub fn prompt_find_meal<'a>(meals: &[&'a MealCard], query: &str) -> Result<Option<&'a MealCard>> {
    let needle = query.trim().to_lowercase();

    // Exact id or title first (case-insensitive)
    let exact = meals
        .iter()
        .find(|m| m.id.to_lowercase() == needle || m.title.to_lowercase() == needle);
    if let Some(meal) = exact {
        return Ok(Some(*meal));
    }

    let candidates = fuzzy_matches(meals, query);

    match candidates.as_slice() {
        [] => {
            println!("No matching meal found for '{}'", query.trim());
            Ok(None)
        }
        [(meal, _)] => {
            let confirm = prompt_yes_no(&format!("Did you mean '{}'?", meal.title), true)?;
            Ok(confirm.then_some(*meal))
        }
        _ => {
            let mut options: Vec<String> = candidates.iter().map(|(m, _)| m.title.clone()).collect();
            options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&options)
                .default(0)
                .interact()?;

            Ok(candidates.get(selection).map(|(m, _)| *m))
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SkillLevel;

    #[test]
    fn test_fuzzy_matches_ranks_closest_title() {
        let soup = MealCard::new("s", "Vegetable soup", 26, SkillLevel::Beginner);
        let paella = MealCard::new("p", "Vegetable paella", 55, SkillLevel::Advanced);
        let burger = MealCard::new("b", "Chicken burger", 35, SkillLevel::Intermediate);
        let meals = vec![&soup, &paella, &burger];

        let matches = fuzzy_matches(&meals, "vegetable soop");
        assert!(!matches.is_empty());
        assert_eq!(matches[0].0.id, "s");
        assert!(matches.iter().all(|(m, _)| m.id != "b"));
    }

    #[test]
    fn test_summary_changed() {
        assert!(!ReviewSummary::default().changed());
        assert!(ReviewSummary { approved: 1, replaced: 0 }.changed());
    }
}
