use serde::{Deserialize, Serialize};

use crate::models::{Category, IngredientItem};
use crate::planner::ShoppingList;

/// Something already at home.
///
/// `unit: None` matches any unit of the same ingredient. `amount: None`
/// means "have some" and covers the whole shopping entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryItem {
    #[serde(alias = "ingredient_name")]
    pub name: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
}

impl PantryItem {
    pub fn new(name: &str, amount: Option<f64>, unit: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            amount,
            unit: unit.map(str::to_string),
        }
    }

    fn matches(&self, item: &IngredientItem) -> bool {
        self.name.to_lowercase() == item.name.to_lowercase()
            && self
                .unit
                .as_ref()
                .is_none_or(|unit| unit.to_lowercase() == item.unit.to_lowercase())
    }
}

/// A shopping entry after checking the pantry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PantryAdjusted {
    pub category: Category,
    pub item: IngredientItem,
    /// Amount still to buy, never below zero.
    pub remaining: f64,
    pub in_pantry: bool,
    pub pantry_amount: f64,
}

impl PantryAdjusted {
    /// Nothing left to buy.
    pub fn is_covered(&self) -> bool {
        self.remaining <= 0.0
    }
}

/// Subtract what the pantry holds from a consolidated shopping list.
///
/// Entries come back in shopping-list order. Each entry is checked against
/// the first pantry item with the same name (ignoring case) and, when the
/// pantry item has a unit, the same unit.
pub fn deduct_pantry(list: &ShoppingList, pantry: &[PantryItem]) -> Vec<PantryAdjusted> {
    list.iter()
        .flat_map(|(category, items)| items.iter().map(move |item| (category, item)))
        .map(|(category, item)| {
            let found = pantry.iter().find(|p| p.matches(item));
            let (remaining, in_pantry, pantry_amount) = match found {
                Some(PantryItem { amount: Some(have), .. }) => {
                    ((item.amount - have).max(0.0), true, *have)
                }
                Some(_) => (0.0, true, 0.0),
                None => (item.amount, false, 0.0),
            };

            PantryAdjusted {
                category,
                item: item.clone(),
                remaining,
                in_pantry,
                pantry_amount,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list() -> ShoppingList {
        ShoppingList {
            produce: vec![IngredientItem::new("Onion", 3.0, "unit", Category::Produce)],
            pantry: vec![
                IngredientItem::new("Rice", 500.0, "g", Category::Pantry),
                IngredientItem::new("Salt", 5.0, "g", Category::Pantry),
            ],
            dairy: vec![IngredientItem::new("Milk", 1.0, "L", Category::Dairy)],
            ..Default::default()
        }
    }

    fn find<'a>(adjusted: &'a [PantryAdjusted], name: &str) -> &'a PantryAdjusted {
        adjusted.iter().find(|a| a.item.name == name).unwrap()
    }

    #[test]
    fn test_unit_match_subtracts() {
        let pantry = vec![PantryItem::new("rice", Some(200.0), Some("g"))];
        let adjusted = deduct_pantry(&list(), &pantry);

        let rice = find(&adjusted, "Rice");
        assert_eq!(rice.remaining, 300.0);
        assert!(rice.in_pantry);
        assert_eq!(rice.pantry_amount, 200.0);
        assert_eq!(rice.item.amount, 500.0);
    }

    #[test]
    fn test_unit_mismatch_is_not_a_match() {
        let pantry = vec![PantryItem::new("Rice", Some(1.0), Some("kg"))];
        let rice = deduct_pantry(&list(), &pantry).remove(1);

        assert_eq!(rice.item.name, "Rice");
        assert!(!rice.in_pantry);
        assert_eq!(rice.remaining, 500.0);
    }

    #[test]
    fn test_pantry_without_unit_matches_any_unit() {
        let pantry = vec![PantryItem::new("ONION", Some(1.0), None)];
        let adjusted = deduct_pantry(&list(), &pantry);

        let onion = find(&adjusted, "Onion");
        assert!(onion.in_pantry);
        assert_eq!(onion.remaining, 2.0);
    }

    #[test]
    fn test_remaining_clamps_at_zero() {
        let pantry = vec![PantryItem::new("Milk", Some(2.0), Some("L"))];
        let adjusted = deduct_pantry(&list(), &pantry);

        let milk = find(&adjusted, "Milk");
        assert_eq!(milk.remaining, 0.0);
        assert_eq!(milk.pantry_amount, 2.0);
        assert!(milk.is_covered());
    }

    #[test]
    fn test_pantry_without_amount_covers_entry() {
        let pantry = vec![PantryItem::new("Salt", None, None)];
        let adjusted = deduct_pantry(&list(), &pantry);

        let salt = find(&adjusted, "Salt");
        assert!(salt.in_pantry);
        assert!(salt.is_covered());
        assert_eq!(salt.pantry_amount, 0.0);
    }

    #[test]
    fn test_no_match_keeps_amount_and_order() {
        let adjusted = deduct_pantry(&list(), &[]);
        let names: Vec<&str> = adjusted.iter().map(|a| a.item.name.as_str()).collect();

        assert_eq!(names, vec!["Onion", "Rice", "Salt", "Milk"]);
        assert!(adjusted.iter().all(|a| !a.in_pantry && a.remaining == a.item.amount));
        assert_eq!(adjusted[0].category, Category::Produce);
    }

    #[test]
    fn test_pantry_item_accepts_ingredient_name_key() {
        let json = r#"[{"ingredient_name": "Rice", "amount": 100, "unit": null}, {"name": "Salt"}]"#;
        let pantry: Vec<PantryItem> = serde_json::from_str(json).unwrap();

        assert_eq!(pantry[0], PantryItem::new("Rice", Some(100.0), None));
        assert_eq!(pantry[1], PantryItem::new("Salt", None, None));
    }
}
