use std::fmt;

use crate::models::IngredientItem;

/// Supermarket aisle an ingredient is usually found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SupermarketSection {
    FruitsAndVegetables,
    MeatAndSeafood,
    DairyAndEggs,
    GrainsAndBread,
    CannedAndDryGoods,
    CondimentsAndSauces,
    Frozen,
    Other,
}

impl SupermarketSection {
    pub fn label(self) -> &'static str {
        match self {
            SupermarketSection::FruitsAndVegetables => "Fruits & Vegetables",
            SupermarketSection::MeatAndSeafood => "Meat & Seafood",
            SupermarketSection::DairyAndEggs => "Dairy & Eggs",
            SupermarketSection::GrainsAndBread => "Grains & Bread",
            SupermarketSection::CannedAndDryGoods => "Canned & Dry Goods",
            SupermarketSection::CondimentsAndSauces => "Condiments & Sauces",
            SupermarketSection::Frozen => "Frozen",
            SupermarketSection::Other => "Other",
        }
    }
}

impl fmt::Display for SupermarketSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Keyword tables, checked in order; the first table with a keyword
/// contained in the lowercase name wins.
const KEYWORD_SECTIONS: &[(&[&str], SupermarketSection)] = &[
    (
        &[
            "potato", "tomato", "onion", "carrot", "avocado", "corn", "lemon", "garlic",
            "lettuce", "spinach", "bell pepper", "peas", "broccoli", "mixed vegetables",
            "plantain", "yuca", "celery", "pumpkin", "rosemary", "basil", "vegetable",
        ],
        SupermarketSection::FruitsAndVegetables,
    ),
    (
        &[
            "chicken", "beef", "turkey", "tilapia", "tuna", "seafood", "meat", "steak", "ground",
        ],
        SupermarketSection::MeatAndSeafood,
    ),
    (
        &["cheese", "milk", "cream", "yogurt", "butter", "egg"],
        SupermarketSection::DairyAndEggs,
    ),
    (
        &[
            "rice", "pasta", "quinoa", "tortilla", "wrap", "bun", "bread", "arepa", "corn flour",
            "flour",
        ],
        SupermarketSection::GrainsAndBread,
    ),
    (
        &["lentils", "beans", "chickpeas", "canned"],
        SupermarketSection::CannedAndDryGoods,
    ),
    (
        &[
            "soy sauce", "tomato sauce", "coconut milk", "sauce", "oil", "vinegar", "salt",
            "pepper", "spice",
        ],
        SupermarketSection::CondimentsAndSauces,
    ),
    (&["frozen", "ice cream"], SupermarketSection::Frozen),
];

/// Section for an ingredient name, `Other` when no keyword matches.
pub fn section_for(ingredient_name: &str) -> SupermarketSection {
    let lower = ingredient_name.to_lowercase();
    KEYWORD_SECTIONS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(_, section)| *section)
        .unwrap_or(SupermarketSection::Other)
}

/// Group items by aisle. Only non-empty groups are returned, in aisle
/// order; items keep their relative order inside a group.
pub fn group_by_section<'a>(
    items: impl IntoIterator<Item = &'a IngredientItem>,
) -> Vec<(SupermarketSection, Vec<&'a IngredientItem>)> {
    let mut groups: Vec<(SupermarketSection, Vec<&'a IngredientItem>)> = Vec::new();

    for item in items {
        let section = section_for(&item.name);
        match groups.iter().position(|(s, _)| *s == section) {
            Some(i) => groups[i].1.push(item),
            None => groups.push((section, vec![item])),
        }
    }

    groups.sort_by_key(|(section, _)| *section);
    groups
}
