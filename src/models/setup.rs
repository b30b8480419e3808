use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::models::meal::SkillLevel;

/// Prep-time limits offered during setup, in minutes.
pub const ALLOWED_MAX_PREP_MINUTES: [u32; 4] = [15, 30, 45, 60];

/// Household size bounds accepted during setup.
pub const MIN_PEOPLE: i64 = 1;
pub const MAX_PEOPLE: i64 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Colombia,
    International,
}

/// Unvalidated answers from the setup step.
#[derive(Debug, Clone, Default)]
pub struct SetupInput {
    pub people: i64,
    pub max_prep_minutes: i64,
    pub include_breakfast: bool,
    pub include_lunch: bool,
    pub include_dinner: bool,
    pub cooking_level: String,
    pub region: String,
}

/// Normalized household preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupPreferences {
    pub people: u8,
    pub max_prep_minutes: u32,
    pub meal_types: Vec<MealType>,
    pub cooking_level: SkillLevel,
    pub region: Region,
}

impl SetupInput {
    /// Validate every field, reporting all problems at once.
    pub fn validate(&self) -> Result<SetupPreferences> {
        let mut errors = Vec::new();

        let people = if (MIN_PEOPLE..=MAX_PEOPLE).contains(&self.people) {
            Some(self.people as u8)
        } else {
            errors.push(format!(
                "people must be an integer between {} and {}",
                MIN_PEOPLE, MAX_PEOPLE
            ));
            None
        };

        let max_prep_minutes = u32::try_from(self.max_prep_minutes)
            .ok()
            .filter(|m| ALLOWED_MAX_PREP_MINUTES.contains(m));
        if max_prep_minutes.is_none() {
            errors.push("maxPrepMinutes must be one of: 15, 30, 45, 60".to_string());
        }

        let meal_types: Vec<MealType> = [
            (self.include_breakfast, MealType::Breakfast),
            (self.include_lunch, MealType::Lunch),
            (self.include_dinner, MealType::Dinner),
        ]
        .into_iter()
        .filter_map(|(included, meal_type)| included.then_some(meal_type))
        .collect();
        if meal_types.is_empty() {
            errors.push("at least one meal type must be selected".to_string());
        }

        let cooking_level = match self.cooking_level.as_str() {
            "beginner" => Some(SkillLevel::Beginner),
            "intermediate" => Some(SkillLevel::Intermediate),
            "advanced" => Some(SkillLevel::Advanced),
            _ => {
                errors.push("cookingLevel must be beginner, intermediate, or advanced".to_string());
                None
            }
        };

        let region = match self.region.as_str() {
            "colombia" => Some(Region::Colombia),
            "international" => Some(Region::International),
            _ => {
                errors.push("region must be colombia or international".to_string());
                None
            }
        };

        match (people, max_prep_minutes, cooking_level, region) {
            (Some(people), Some(max_prep_minutes), Some(cooking_level), Some(region))
                if errors.is_empty() =>
            {
                Ok(SetupPreferences {
                    people,
                    max_prep_minutes,
                    meal_types,
                    cooking_level,
                    region,
                })
            }
            _ => Err(PlanError::InvalidSetup(errors)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> SetupInput {
        SetupInput {
            people: 2,
            max_prep_minutes: 30,
            include_breakfast: false,
            include_lunch: true,
            include_dinner: true,
            cooking_level: "beginner".to_string(),
            region: "colombia".to_string(),
        }
    }

    #[test]
    fn test_valid_input_normalizes() {
        let prefs = valid_input().validate().unwrap();
        assert_eq!(prefs.people, 2);
        assert_eq!(prefs.max_prep_minutes, 30);
        assert_eq!(prefs.meal_types, vec![MealType::Lunch, MealType::Dinner]);
        assert_eq!(prefs.cooking_level, SkillLevel::Beginner);
        assert_eq!(prefs.region, Region::Colombia);
    }

    #[test]
    fn test_collects_every_error() {
        let input = SetupInput {
            people: 9,
            max_prep_minutes: 20,
            cooking_level: "chef".to_string(),
            region: "mars".to_string(),
            ..Default::default()
        };

        match input.validate() {
            Err(PlanError::InvalidSetup(errors)) => assert_eq!(errors.len(), 5),
            other => panic!("expected setup errors, got {:?}", other),
        }
    }

    #[test]
    fn test_people_bounds() {
        let mut input = valid_input();
        input.people = 6;
        assert!(input.validate().is_ok());
        input.people = 0;
        assert!(input.validate().is_err());
    }
}
