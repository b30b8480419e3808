use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Shopping category an ingredient is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Produce,
    Protein,
    Pantry,
    Dairy,
}

impl Category {
    /// All categories in shopping-list order.
    pub const ALL: [Category; 4] = [
        Category::Produce,
        Category::Protein,
        Category::Pantry,
        Category::Dairy,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Produce => "Produce",
            Category::Protein => "Protein",
            Category::Pantry => "Pantry",
            Category::Dairy => "Dairy",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cooking skill a meal demands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
        };
        f.write_str(label)
    }
}

/// One ingredient line of a meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientItem {
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub category: Category,
}

impl IngredientItem {
    pub fn new(name: &str, amount: f64, unit: &str, category: Category) -> Self {
        Self {
            name: name.to_string(),
            amount,
            unit: unit.to_string(),
            category,
        }
    }

    /// Identity used when merging shopping entries: category plus
    /// lowercase name and unit.
    pub fn merge_key(&self) -> (Category, String, String) {
        (
            self.category,
            self.name.to_lowercase(),
            self.unit.to_lowercase(),
        )
    }
}

/// A proposed meal. Cards are never mutated once built; a replacement is a
/// different card.
///
/// Deserialization goes through [`RawMealCard`] so a malformed card is
/// rejected instead of being half-filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawMealCard")]
pub struct MealCard {
    pub id: String,
    pub title: String,
    pub prep_time_min: u32,
    pub level: SkillLevel,
    pub ingredients: Vec<IngredientItem>,
    pub short_prep: String,
}

impl MealCard {
    pub fn new(id: &str, title: &str, prep_time_min: u32, level: SkillLevel) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            prep_time_min,
            level,
            ingredients: Vec::new(),
            short_prep: String::new(),
        }
    }

    pub fn with_ingredient(mut self, ingredient: IngredientItem) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    pub fn with_short_prep(mut self, short_prep: &str) -> Self {
        self.short_prep = short_prep.to_string();
        self
    }

    /// Check the invariants every card must hold.
    pub fn validate(&self) -> Result<(), PlanError> {
        let fail = |reason: String| PlanError::InvalidMealCard {
            id: self.id.clone(),
            reason,
        };

        if self.id.trim().is_empty() {
            return Err(fail("id is empty".to_string()));
        }
        if self.title.trim().is_empty() {
            return Err(fail("title is empty".to_string()));
        }
        if self.prep_time_min == 0 {
            return Err(fail("prep time must be positive".to_string()));
        }
        for item in &self.ingredients {
            if item.name.trim().is_empty() {
                return Err(fail("ingredient with empty name".to_string()));
            }
            if !item.amount.is_finite() || item.amount <= 0.0 {
                return Err(fail(format!(
                    "ingredient '{}' has invalid amount {}",
                    item.name, item.amount
                )));
            }
        }
        Ok(())
    }
}

/// Unchecked wire form of a [`MealCard`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMealCard {
    pub id: String,
    pub title: String,
    pub prep_time_min: u32,
    pub level: SkillLevel,
    #[serde(default)]
    pub ingredients: Vec<IngredientItem>,
    #[serde(default)]
    pub short_prep: String,
}

impl TryFrom<RawMealCard> for MealCard {
    type Error = PlanError;

    fn try_from(raw: RawMealCard) -> Result<Self, Self::Error> {
        let card = MealCard {
            id: raw.id,
            title: raw.title,
            prep_time_min: raw.prep_time_min,
            level: raw.level,
            ingredients: raw.ingredients,
            short_prep: raw.short_prep,
        };
        card.validate()?;
        Ok(card)
    }
}
