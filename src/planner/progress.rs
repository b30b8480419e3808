use crate::models::{DayMap, WeekMeals};

/// Approved versus total cards for one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayProgress {
    pub approved: usize,
    pub total: usize,
}

impl DayProgress {
    pub fn pending(&self) -> usize {
        self.total - self.approved
    }

    pub fn is_done(&self) -> bool {
        self.approved == self.total
    }
}

/// Approval progress across the week.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekProgress {
    pub approved: usize,
    pub total: usize,
    pub per_day: DayMap<DayProgress>,
}

impl WeekProgress {
    /// Share of approved cards, rounded to a whole percent.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.approved as f64 / self.total as f64) * 100.0).round() as u32
    }
}

/// Count approved cards per day. Ids in `approved_ids` that no longer sit
/// in the week are ignored.
pub fn week_progress(week_meals: &WeekMeals, approved_ids: &[String]) -> WeekProgress {
    let per_day: DayMap<DayProgress> = week_meals
        .iter()
        .map(|(day, cards)| {
            let approved = cards
                .iter()
                .filter(|card| approved_ids.contains(&card.id))
                .count();
            (
                day,
                DayProgress {
                    approved,
                    total: cards.len(),
                },
            )
        })
        .collect();

    let (approved, total) = per_day
        .values()
        .fold((0, 0), |(a, t), day| (a + day.approved, t + day.total));

    WeekProgress {
        approved,
        total,
        per_day,
    }
}
