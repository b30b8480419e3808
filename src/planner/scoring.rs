use std::collections::HashSet;

use crate::models::{Category, MealCard};
use crate::planner::constants::*;

/// A pool candidate with its compatibility score against the rejected card.
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate<'a> {
    pub candidate: &'a MealCard,
    pub score: u32,
}

/// Points for how close two prep times are.
fn prep_time_points(top_minutes: u32, candidate_minutes: u32) -> u32 {
    let delta = top_minutes.abs_diff(candidate_minutes);
    if delta <= PREP_CLOSE_MINUTES {
        PREP_CLOSE_POINTS
    } else if delta <= PREP_NEAR_MINUTES {
        PREP_NEAR_POINTS
    } else {
        0
    }
}

/// Compatibility of `candidate` as a swap for `top`, from 0 to
/// [`MAX_REPLACEMENT_SCORE`].
///
/// Skill level weighs most, then prep time, then how many of the
/// candidate's ingredients share a category with the top card.
pub fn replacement_score(top: &MealCard, candidate: &MealCard) -> u32 {
    let mut score = 0;

    if candidate.level == top.level {
        score += LEVEL_MATCH_POINTS;
    }

    score += prep_time_points(top.prep_time_min, candidate.prep_time_min);

    let top_categories: HashSet<Category> = top.ingredients.iter().map(|i| i.category).collect();
    let overlap = candidate
        .ingredients
        .iter()
        .filter(|i| top_categories.contains(&i.category))
        .count();
    score += (overlap as u32).min(CATEGORY_OVERLAP_CAP);

    score
}

/// Score every pool entry whose id is not in `used_ids`, best first.
///
/// The sort is stable, so equal scores keep pool order.
pub fn rank_candidates<'a>(
    top: &MealCard,
    pool: &'a [MealCard],
    used_ids: &HashSet<&str>,
) -> Vec<ScoredCandidate<'a>> {
    let mut ranked: Vec<ScoredCandidate<'a>> = pool
        .iter()
        .filter(|candidate| !used_ids.contains(candidate.id.as_str()))
        .map(|candidate| ScoredCandidate {
            candidate,
            score: replacement_score(top, candidate),
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IngredientItem, SkillLevel};

    fn card(id: &str, level: SkillLevel, prep: u32, categories: &[Category]) -> MealCard {
        categories.iter().fold(MealCard::new(id, id, prep, level), |card, c| {
            card.with_ingredient(IngredientItem::new("x", 1.0, "g", *c))
        })
    }

    #[test]
    fn test_prep_time_points() {
        assert_eq!(prep_time_points(20, 30), PREP_CLOSE_POINTS);
        assert_eq!(prep_time_points(30, 20), PREP_CLOSE_POINTS);
        assert_eq!(prep_time_points(20, 31), PREP_NEAR_POINTS);
        assert_eq!(prep_time_points(20, 40), PREP_NEAR_POINTS);
        assert_eq!(prep_time_points(20, 41), 0);
    }

    #[test]
    fn test_score_example_pair() {
        let top = card("top", SkillLevel::Beginner, 20, &[Category::Protein]);
        let a = card("a", SkillLevel::Beginner, 22, &[Category::Protein]);
        let b = card("b", SkillLevel::Intermediate, 24, &[Category::Pantry]);

        assert_eq!(replacement_score(&top, &a), 8);
        assert_eq!(replacement_score(&top, &b), 3);
    }

    #[test]
    fn test_overlap_is_capped() {
        let top = card("top", SkillLevel::Advanced, 50, &[Category::Produce]);
        let many = card("many", SkillLevel::Advanced, 50, &[Category::Produce; 5]);
        assert_eq!(replacement_score(&top, &many), MAX_REPLACEMENT_SCORE);
    }

    #[test]
    fn test_rank_skips_used_and_keeps_pool_order_on_ties() {
        let top = card("top", SkillLevel::Beginner, 20, &[]);
        let pool = vec![
            card("first", SkillLevel::Beginner, 25, &[]),
            card("used", SkillLevel::Beginner, 20, &[]),
            card("second", SkillLevel::Beginner, 15, &[]),
        ];
        let used: HashSet<&str> = ["used"].into_iter().collect();

        let ranked = rank_candidates(&top, &pool, &used);
        let ids: Vec<&str> = ranked.iter().map(|c| c.candidate.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);
        assert_eq!(ranked[0].score, ranked[1].score);
    }
}
