use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::DayKey;

/// MealMap — plan the week by approving or swapping proposed meals.
#[derive(Parser, Debug)]
#[command(name = "meal_map")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the plan state JSON file.
    #[arg(short, long, default_value = "meal_plan.json")]
    pub file: PathBuf,

    /// Meal catalog JSON to use instead of the bundled one.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start a new weekly plan from the catalog.
    Init {
        /// Overwrite an existing plan file.
        #[arg(long)]
        force: bool,
    },

    /// List the meals still awaiting a decision for a day.
    Pending {
        /// Day of the week (Mon, Tue, ... or full name).
        day: DayKey,
    },

    /// Approve the top pending meal of a day.
    Approve { day: DayKey },

    /// Replace the top pending meal of a day with the best alternative.
    Replace { day: DayKey },

    /// Interactively approve or replace meals for a day.
    Review { day: DayKey },

    /// Show the consolidated shopping list for the week.
    Shopping {
        /// Group items by supermarket aisle instead of category.
        #[arg(long, conflicts_with = "pantry")]
        by_section: bool,

        /// Also write the list to a CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Pantry JSON; subtract what is already at home.
        #[arg(long)]
        pantry: Option<PathBuf>,
    },

    /// Show how many meals have been approved.
    Progress,

    /// Show the details of a meal by id or title.
    Show {
        /// Meal id or (approximate) title.
        query: String,
    },

    /// Record household preferences.
    Setup {
        /// Number of people to cook for (1-6).
        #[arg(long, default_value_t = 2)]
        people: i64,

        /// Maximum prep time in minutes (15, 30, 45 or 60).
        #[arg(long, default_value_t = 30)]
        max_prep: i64,

        #[arg(long)]
        breakfast: bool,

        #[arg(long)]
        lunch: bool,

        #[arg(long)]
        dinner: bool,

        /// beginner, intermediate or advanced.
        #[arg(long, default_value = "beginner")]
        level: String,

        /// colombia or international.
        #[arg(long, default_value = "colombia")]
        region: String,
    },

    /// Reset parts of the plan state.
    Reset {
        /// Clear all approvals.
        #[arg(long)]
        approvals: bool,

        /// Restart replacement rotation for every day.
        #[arg(long)]
        cursors: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_day_argument() {
        let cli = Cli::try_parse_from(["meal_map", "approve", "tuesday"]).unwrap();
        match cli.command {
            Some(Command::Approve { day }) => assert_eq!(day, DayKey::Tue),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_day() {
        assert!(Cli::try_parse_from(["meal_map", "pending", "someday"]).is_err());
    }

    #[test]
    fn test_shopping_flags() {
        let cli = Cli::try_parse_from(["meal_map", "-f", "plan.json", "shopping", "--by-section"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("plan.json"));
        assert!(matches!(
            cli.command,
            Some(Command::Shopping { by_section: true, csv: None, pantry: None })
        ));
    }

    #[test]
    fn test_pantry_flag_conflicts_with_sections() {
        let cli = Cli::try_parse_from(["meal_map", "shopping", "--pantry", "pantry.json"]).unwrap();
        match cli.command {
            Some(Command::Shopping { pantry, .. }) => {
                assert_eq!(pantry, Some(PathBuf::from("pantry.json")))
            }
            other => panic!("unexpected command {:?}", other),
        }

        assert!(Cli::try_parse_from([
            "meal_map",
            "shopping",
            "--by-section",
            "--pantry",
            "pantry.json"
        ])
        .is_err());
    }
}
