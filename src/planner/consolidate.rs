use std::cmp::Ordering;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::Serialize;

use crate::models::{Category, IngredientItem, WeekMeals};

/// Merged ingredients for the week, one bucket per category.
///
/// Every bucket is always present, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShoppingList {
    pub produce: Vec<IngredientItem>,
    pub protein: Vec<IngredientItem>,
    pub pantry: Vec<IngredientItem>,
    pub dairy: Vec<IngredientItem>,
}

impl ShoppingList {
    pub fn bucket(&self, category: Category) -> &[IngredientItem] {
        match category {
            Category::Produce => &self.produce,
            Category::Protein => &self.protein,
            Category::Pantry => &self.pantry,
            Category::Dairy => &self.dairy,
        }
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<IngredientItem> {
        match category {
            Category::Produce => &mut self.produce,
            Category::Protein => &mut self.protein,
            Category::Pantry => &mut self.pantry,
            Category::Dairy => &mut self.dairy,
        }
    }

    /// Buckets in Produce, Protein, Pantry, Dairy order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[IngredientItem])> {
        Category::ALL.into_iter().map(move |c| (c, self.bucket(c)))
    }

    /// Total number of merged entries across all buckets.
    pub fn len(&self) -> usize {
        self.iter().map(|(_, items)| items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Alphabetical by name, case-insensitive first so "apple" sits next to "Apple".
fn by_name(a: &IngredientItem, b: &IngredientItem) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.unit.cmp(&b.unit))
}

/// Merge every ingredient of every meal in the week into a shopping list.
///
/// Items sharing category, name and unit (ignoring case) are summed; the
/// first occurrence in Mon..Sun, in-day order keeps its spelling. Different
/// units are never converted or merged.
pub fn consolidate_ingredients(week_meals: &WeekMeals) -> ShoppingList {
    let mut index: HashMap<(Category, String, String), usize> = HashMap::new();
    let mut merged: Vec<IngredientItem> = Vec::new();

    for ingredient in week_meals.all_meals().flat_map(|meal| &meal.ingredients) {
        match index.entry(ingredient.merge_key()) {
            Entry::Occupied(slot) => merged[*slot.get()].amount += ingredient.amount,
            Entry::Vacant(slot) => {
                slot.insert(merged.len());
                merged.push(ingredient.clone());
            }
        }
    }

    let mut list = ShoppingList::default();
    for item in merged {
        list.bucket_mut(item.category).push(item);
    }
    for category in Category::ALL {
        list.bucket_mut(category).sort_by(by_name);
    }

    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayKey, MealCard, SkillLevel};

    fn meal(id: &str, ingredients: Vec<IngredientItem>) -> MealCard {
        ingredients
            .into_iter()
            .fold(MealCard::new(id, id, 20, SkillLevel::Beginner), MealCard::with_ingredient)
    }

    #[test]
    fn test_empty_week_has_empty_buckets() {
        let list = consolidate_ingredients(&WeekMeals::default());
        assert!(list.is_empty());
        for (_, items) in list.iter() {
            assert!(items.is_empty());
        }
    }

    #[test]
    fn test_first_spelling_wins() {
        let mut week = WeekMeals::default();
        week.set(
            DayKey::Mon,
            vec![meal("a", vec![IngredientItem::new("Chicken Breast", 300.0, "g", Category::Protein)])],
        );
        week.set(
            DayKey::Thu,
            vec![meal("b", vec![IngredientItem::new("chicken breast", 200.0, "G", Category::Protein)])],
        );

        let list = consolidate_ingredients(&week);
        assert_eq!(list.protein.len(), 1);
        assert_eq!(list.protein[0].name, "Chicken Breast");
        assert_eq!(list.protein[0].unit, "g");
        assert_eq!(list.protein[0].amount, 500.0);
    }

    #[test]
    fn test_same_name_different_category_not_merged() {
        let mut week = WeekMeals::default();
        week.set(
            DayKey::Sat,
            vec![meal(
                "a",
                vec![
                    IngredientItem::new("Corn", 2.0, "unit", Category::Produce),
                    IngredientItem::new("Corn", 2.0, "unit", Category::Pantry),
                ],
            )],
        );

        let list = consolidate_ingredients(&week);
        assert_eq!(list.produce.len(), 1);
        assert_eq!(list.pantry.len(), 1);
    }

    #[test]
    fn test_buckets_sorted_by_name() {
        let mut week = WeekMeals::default();
        week.set(
            DayKey::Sun,
            vec![meal(
                "a",
                vec![
                    IngredientItem::new("Potato", 1.0, "g", Category::Produce),
                    IngredientItem::new("carrot", 1.0, "unit", Category::Produce),
                    IngredientItem::new("Avocado", 1.0, "unit", Category::Produce),
                ],
            )],
        );

        let list = consolidate_ingredients(&week);
        let names: Vec<&str> = list.produce.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Avocado", "carrot", "Potato"]);
    }

    #[test]
    fn test_serializes_with_category_keys() {
        let json = serde_json::to_value(ShoppingList::default()).unwrap();
        for key in ["Produce", "Protein", "Pantry", "Dairy"] {
            assert!(json[key].is_array(), "missing bucket {}", key);
        }
    }
}
