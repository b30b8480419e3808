use std::collections::HashSet;

use tracing::debug;

use crate::models::{DayKey, MealCard, ReplaceCursors, WeekMeals};
use crate::planner::scoring::rank_candidates;

/// Cards for `day` that are not yet approved, in queue order.
pub fn get_pending_cards<'a>(
    week_meals: &'a WeekMeals,
    day: DayKey,
    approved_ids: &[String],
) -> Vec<&'a MealCard> {
    week_meals[day]
        .iter()
        .filter(|card| !approved_ids.contains(&card.id))
        .collect()
}

/// Approve the top pending card of `day`.
///
/// Returns the new approved list: the old one with the top card's id
/// appended, or an unchanged copy when nothing is pending.
pub fn approve_top_card(week_meals: &WeekMeals, day: DayKey, approved_ids: &[String]) -> Vec<String> {
    let pending = get_pending_cards(week_meals, day, approved_ids);
    let mut approved = approved_ids.to_vec();

    match pending.first() {
        Some(top) if !approved_ids.contains(&top.id) => {
            debug!(%day, meal = %top.id, "approved top card");
            approved.push(top.id.clone());
        }
        _ => debug!(%day, "nothing pending to approve"),
    }

    approved
}

/// Inputs to [`replace_top_card`]. Everything is borrowed; nothing is mutated.
#[derive(Debug, Clone, Copy)]
pub struct ReplaceRequest<'a> {
    pub week_meals: &'a WeekMeals,
    pub day: DayKey,
    pub approved_ids: &'a [String],
    pub replace_cursor_by_day: &'a ReplaceCursors,
    pub replacement_pool: &'a WeekMeals,
}

/// Fresh state produced by [`replace_top_card`].
///
/// `replacement` is `None` when there was no pending card or no pool
/// candidate; the other fields are then copies of the inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplaceOutcome {
    pub week_meals: WeekMeals,
    pub approved_ids: Vec<String>,
    pub replace_cursor_by_day: ReplaceCursors,
    pub replacement: Option<MealCard>,
}

impl ReplaceOutcome {
    fn unchanged(request: &ReplaceRequest<'_>) -> Self {
        Self {
            week_meals: request.week_meals.clone(),
            approved_ids: request.approved_ids.to_vec(),
            replace_cursor_by_day: request.replace_cursor_by_day.clone(),
            replacement: None,
        }
    }
}

/// Swap the top pending card of a day for the most compatible pool entry.
///
/// Candidates already in the day's list are skipped. If every pool entry is
/// already used, the entry at `cursor % pool_len` is taken instead, even
/// though it duplicates a card in the day. The day's cursor advances on
/// every swap and stops at `u32::MAX`.
pub fn replace_top_card(request: ReplaceRequest<'_>) -> ReplaceOutcome {
    let ReplaceRequest {
        week_meals,
        day,
        approved_ids,
        replace_cursor_by_day,
        replacement_pool,
    } = request;

    let pending = get_pending_cards(week_meals, day, approved_ids);
    let Some(top) = pending.first().copied() else {
        debug!(%day, "nothing pending to replace");
        return ReplaceOutcome::unchanged(&request);
    };

    let day_pool = &replacement_pool[day];
    if day_pool.is_empty() {
        debug!(%day, "replacement pool is empty");
        return ReplaceOutcome::unchanged(&request);
    }

    let day_cards = &week_meals[day];
    let used_ids: HashSet<&str> = day_cards.iter().map(|m| m.id.as_str()).collect();
    let cursor = replace_cursor_by_day[day];

    let replacement = match rank_candidates(top, day_pool, &used_ids).first() {
        Some(best) => {
            debug!(%day, top = %top.id, replacement = %best.candidate.id, score = best.score, "scored replacement");
            best.candidate.clone()
        }
        None => {
            let fallback = &day_pool[cursor as usize % day_pool.len()];
            debug!(%day, top = %top.id, replacement = %fallback.id, cursor, "round-robin replacement");
            fallback.clone()
        }
    };

    let mut day_list = day_cards.clone();
    if let Some(slot) = day_cards.iter().position(|card| std::ptr::eq(card, top)) {
        day_list[slot] = replacement.clone();
    }
    let mut next_week = week_meals.clone();
    next_week.set(day, day_list);

    let next_approved = approved_ids
        .iter()
        .filter(|id| **id != top.id)
        .cloned()
        .collect();

    let mut next_cursors = replace_cursor_by_day.clone();
    let next = next_cursors.get_mut(day);
    *next = next.saturating_add(1);

    ReplaceOutcome {
        week_meals: next_week,
        approved_ids: next_approved,
        replace_cursor_by_day: next_cursors,
        replacement: Some(replacement),
    }
}
