use std::path::Path;

use crate::error::Result;
use crate::planner::ShoppingList;

/// Write the shopping list as CSV: category, name, amount, unit.
///
/// Amounts are written at full precision.
pub fn write_shopping_csv(list: &ShoppingList, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["category", "name", "amount", "unit"])?;

    for (category, items) in list.iter() {
        for item in items {
            let amount = item.amount.to_string();
            wtr.write_record([
                category.label(),
                item.name.as_str(),
                amount.as_str(),
                item.unit.as_str(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, IngredientItem};

    #[test]
    fn test_write_shopping_csv() {
        let list = ShoppingList {
            pantry: vec![IngredientItem::new("Rice", 350.0, "g", Category::Pantry)],
            dairy: vec![IngredientItem::new("Milk", 1.5, "L", Category::Dairy)],
            ..Default::default()
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shopping.csv");
        write_shopping_csv(&list, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "category,name,amount,unit");
        assert_eq!(lines[1], "Pantry,Rice,350,g");
        assert_eq!(lines[2], "Dairy,Milk,1.5,L");
    }

    #[test]
    fn test_csv_keeps_small_amounts() {
        let list = ShoppingList {
            pantry: vec![
                IngredientItem::new("Saffron", 0.004, "kg", Category::Pantry),
                IngredientItem::new("Yeast", 0.125, "kg", Category::Pantry),
            ],
            ..Default::default()
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shopping.csv");
        write_shopping_csv(&list, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[1], "Pantry,Saffron,0.004,kg");
        assert_eq!(lines[2], "Pantry,Yeast,0.125,kg");
    }
}
