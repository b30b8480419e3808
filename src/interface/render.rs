use crate::models::{DayKey, MealCard};
use crate::planner::{group_by_section, PantryAdjusted, ShoppingList, WeekProgress};

/// Amounts print without decimals when whole, otherwise with up to two.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        let text = format!("{:.2}", amount);
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Display one meal card in full.
pub fn display_meal(card: &MealCard) {
    println!("{} [{}]", card.title, card.id);
    println!("  {} min | {}", card.prep_time_min, card.level);
    for item in &card.ingredients {
        println!(
            "  - {} {} {} ({})",
            format_amount(item.amount),
            item.unit,
            item.name,
            item.category
        );
    }
    if !card.short_prep.is_empty() {
        println!("  {}", card.short_prep);
    }
}

/// Display the pending queue of a day, top card first.
pub fn display_pending(day: DayKey, pending: &[&MealCard]) {
    if pending.is_empty() {
        println!("{}: all meals approved.", day);
        return;
    }

    println!();
    println!("=== {} ({} pending) ===", day, pending.len());
    println!();

    let max_title_len = pending.iter().map(|c| c.title.len()).max().unwrap_or(10);

    for (i, card) in pending.iter().enumerate() {
        let marker = if i == 0 { "*" } else { " " };
        println!(
            "{} {:>2}. {:<width$} - {:>3} min | {}",
            marker,
            i + 1,
            card.title,
            card.prep_time_min,
            card.level,
            width = max_title_len
        );
    }

    println!();
}

/// Display the consolidated shopping list by category.
pub fn display_shopping_list(list: &ShoppingList) {
    if list.is_empty() {
        println!("Shopping list is empty.");
        return;
    }

    println!();
    println!("=== Shopping List ({} items) ===", list.len());

    for (category, items) in list.iter() {
        if items.is_empty() {
            continue;
        }
        println!();
        println!("{}:", category);
        for item in items {
            println!("  {:>6} {:<5} {}", format_amount(item.amount), item.unit, item.name);
        }
    }

    println!();
}

/// Display the shopping list regrouped by supermarket aisle.
pub fn display_sections(list: &ShoppingList) {
    if list.is_empty() {
        println!("Shopping list is empty.");
        return;
    }

    let items = list.iter().flat_map(|(_, items)| items);
    for (section, members) in group_by_section(items) {
        println!();
        println!("{}:", section);
        for item in members {
            println!("  {:>6} {:<5} {}", format_amount(item.amount), item.unit, item.name);
        }
    }

    println!();
}

/// Display the shopping list after pantry deduction. Covered entries are
/// listed last.
pub fn display_pantry_adjusted(adjusted: &[PantryAdjusted]) {
    if adjusted.is_empty() {
        println!("Shopping list is empty.");
        return;
    }

    let (covered, to_buy): (Vec<&PantryAdjusted>, Vec<&PantryAdjusted>) =
        adjusted.iter().partition(|a| a.is_covered());

    println!();
    println!("=== To Buy ({} items) ===", to_buy.len());
    for entry in &to_buy {
        let note = if entry.in_pantry {
            format!(" (have {})", format_amount(entry.pantry_amount))
        } else {
            String::new()
        };
        println!(
            "  {:>6} {:<5} {} [{}]{}",
            format_amount(entry.remaining),
            entry.item.unit,
            entry.item.name,
            entry.category,
            note
        );
    }

    if !covered.is_empty() {
        println!();
        println!("Already in pantry:");
        for entry in &covered {
            println!("  {}", entry.item.name);
        }
    }

    println!();
}

/// Display weekly approval progress.
pub fn display_progress(progress: &WeekProgress) {
    println!();
    println!(
        "Weekly progress: {}% ({} of {} meals approved)",
        progress.percent(),
        progress.approved,
        progress.total
    );
    for (day, day_progress) in progress.per_day.iter() {
        let status = if day_progress.is_done() { "done" } else { "" };
        println!(
            "  {}  {}/{} {}",
            day, day_progress.approved, day_progress.total, status
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(350.0), "350");
        assert_eq!(format_amount(1.5), "1.5");
        assert_eq!(format_amount(0.25), "0.25");
        assert_eq!(format_amount(2.333), "2.33");
    }
}
