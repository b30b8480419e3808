use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use meal_map_rs::catalog::{select_source, MealSource};
use meal_map_rs::cli::{Cli, Command};
use meal_map_rs::error::Result;
use meal_map_rs::interface::{
    display_meal, display_pantry_adjusted, display_pending, display_progress, display_sections,
    display_shopping_list, prompt_find_meal, prompt_yes_no, review_day, write_shopping_csv,
};
use meal_map_rs::models::{DayKey, SetupInput};
use meal_map_rs::planner::deduct_pantry;
use meal_map_rs::state::{load_pantry, load_state, save_state, PlanSession};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    let source = select_source(cli.catalog);
    let path = cli.file.as_path();

    match command {
        Command::Init { force } => cmd_init(path, source.as_ref(), force),
        Command::Pending { day } => cmd_pending(path, source.as_ref(), day),
        Command::Approve { day } => cmd_approve(path, source.as_ref(), day),
        Command::Replace { day } => cmd_replace(path, source.as_ref(), day),
        Command::Review { day } => cmd_review(path, source.as_ref(), day),
        Command::Shopping {
            by_section,
            csv,
            pantry,
        } => cmd_shopping(
            path,
            source.as_ref(),
            by_section,
            csv.as_deref(),
            pantry.as_deref(),
        ),
        Command::Progress => cmd_progress(path, source.as_ref()),
        Command::Show { query } => cmd_show(path, source.as_ref(), &query),
        Command::Setup {
            people,
            max_prep,
            breakfast,
            lunch,
            dinner,
            level,
            region,
        } => {
            let input = SetupInput {
                people,
                max_prep_minutes: max_prep,
                include_breakfast: breakfast,
                include_lunch: lunch,
                include_dinner: dinner,
                cooking_level: level,
                region,
            };
            cmd_setup(path, source.as_ref(), &input)
        }
        Command::Reset { approvals, cursors } => {
            cmd_reset(path, source.as_ref(), approvals, cursors)
        }
    }
}

/// Load the saved plan, pairing it with the source's replacement pool.
fn open_session(path: &Path, source: &dyn MealSource) -> Result<PlanSession> {
    let state = load_state(path)?;
    let pool = source.replacement_pool()?;
    Ok(PlanSession::new(state, pool))
}

/// Start a new plan and save it.
fn cmd_init(path: &Path, source: &dyn MealSource, force: bool) -> Result<()> {
    if path.exists() && !force {
        let overwrite = prompt_yes_no(
            &format!("{} already exists. Start a new plan?", path.display()),
            false,
        )?;
        if !overwrite {
            println!("Keeping existing plan.");
            return Ok(());
        }
    }

    let session = PlanSession::from_source(source)?;
    save_state(path, session.state())?;

    println!(
        "New plan with {} meals from the {} catalog saved to {}.",
        session.progress().total,
        source.name(),
        path.display()
    );
    Ok(())
}

fn cmd_pending(path: &Path, source: &dyn MealSource, day: DayKey) -> Result<()> {
    let session = open_session(path, source)?;
    display_pending(day, &session.pending(day));
    Ok(())
}

fn cmd_approve(path: &Path, source: &dyn MealSource, day: DayKey) -> Result<()> {
    let mut session = open_session(path, source)?;

    match session.approve(day) {
        Some(card) => {
            println!("Approved: {}", card.title);
            save_state(path, session.state())?;
        }
        None => println!("{}: nothing left to approve.", day),
    }

    display_pending(day, &session.pending(day));
    Ok(())
}

fn cmd_replace(path: &Path, source: &dyn MealSource, day: DayKey) -> Result<()> {
    let mut session = open_session(path, source)?;

    if session.pending(day).is_empty() {
        println!("{}: nothing left to replace.", day);
        return Ok(());
    }

    match session.replace(day) {
        Some(card) => {
            println!("Replaced with:");
            display_meal(&card);
            save_state(path, session.state())?;
        }
        None => println!("No replacement available for {}.", day),
    }

    Ok(())
}

fn cmd_review(path: &Path, source: &dyn MealSource, day: DayKey) -> Result<()> {
    let mut session = open_session(path, source)?;
    let summary = review_day(&mut session, day)?;

    if summary.changed() {
        save_state(path, session.state())?;
        println!(
            "Approved {}, replaced {}. Plan saved.",
            summary.approved, summary.replaced
        );
    }

    Ok(())
}

fn cmd_shopping(
    path: &Path,
    source: &dyn MealSource,
    by_section: bool,
    csv: Option<&Path>,
    pantry: Option<&Path>,
) -> Result<()> {
    let session = open_session(path, source)?;
    let list = session.shopping_list();

    if let Some(pantry_path) = pantry {
        let pantry = load_pantry(pantry_path)?;
        display_pantry_adjusted(&deduct_pantry(&list, &pantry));
    } else if by_section {
        display_sections(&list);
    } else {
        display_shopping_list(&list);
    }

    if let Some(csv_path) = csv {
        write_shopping_csv(&list, csv_path)?;
        println!("Shopping list written to {}.", csv_path.display());
    }

    Ok(())
}

fn cmd_progress(path: &Path, source: &dyn MealSource) -> Result<()> {
    let session = open_session(path, source)?;
    display_progress(&session.progress());
    Ok(())
}

fn cmd_show(path: &Path, source: &dyn MealSource, query: &str) -> Result<()> {
    let session = open_session(path, source)?;
    let meals = session.all_meals();

    if let Some(meal) = prompt_find_meal(&meals, query)? {
        println!();
        display_meal(meal);
        println!();
    }

    Ok(())
}

fn cmd_setup(path: &Path, source: &dyn MealSource, input: &SetupInput) -> Result<()> {
    let preferences = input.validate()?;
    let mut session = open_session(path, source)?;

    session.set_preferences(preferences);
    save_state(path, session.state())?;
    println!("Preferences saved.");
    Ok(())
}

fn cmd_reset(path: &Path, source: &dyn MealSource, approvals: bool, cursors: bool) -> Result<()> {
    if !approvals && !cursors {
        println!("Please specify at least one reset option:");
        println!("  --approvals  Clear all approvals");
        println!("  --cursors    Restart replacement rotation");
        return Ok(());
    }

    let mut session = open_session(path, source)?;

    if approvals {
        session.reset_approvals();
        println!("Cleared all approvals.");
    }

    if cursors {
        session.reset_cursors();
        println!("Reset replacement rotation.");
    }

    save_state(path, session.state())?;
    println!("Plan saved.");
    Ok(())
}
