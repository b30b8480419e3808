use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::info;

use crate::error::Result;
use crate::models::WeekMeals;

/// Starter week and replacement pool shipped with the binary.
const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

/// Where the starting week and the replacement pool come from.
///
/// One source is picked at startup and handed to whatever needs it.
pub trait MealSource {
    /// Short name for logs and output.
    fn name(&self) -> &str;

    /// The proposals a fresh plan starts with.
    fn week_plan(&self) -> Result<WeekMeals>;

    /// Candidates offered when a proposal is rejected.
    fn replacement_pool(&self) -> Result<WeekMeals>;
}

/// On-disk layout of a catalog: `{ "week": {...}, "pool": {...} }`.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    week: WeekMeals,
    #[serde(default)]
    pool: WeekMeals,
}

fn parse_catalog(content: &str) -> Result<CatalogFile> {
    Ok(serde_json::from_str(content)?)
}

/// The built-in catalog.
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledCatalog;

impl MealSource for BundledCatalog {
    fn name(&self) -> &str {
        "bundled"
    }

    fn week_plan(&self) -> Result<WeekMeals> {
        Ok(parse_catalog(BUNDLED_CATALOG)?.week)
    }

    fn replacement_pool(&self) -> Result<WeekMeals> {
        Ok(parse_catalog(BUNDLED_CATALOG)?.pool)
    }
}

/// A catalog read from a JSON file chosen by the user.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
    name: String,
}

impl FileCatalog {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    fn load(&self) -> Result<CatalogFile> {
        let content = fs::read_to_string(&self.path)?;
        let catalog = parse_catalog(&content)?;
        info!(
            path = %self.path.display(),
            meals = catalog.week.meal_count(),
            pool = catalog.pool.meal_count(),
            "loaded catalog"
        );
        Ok(catalog)
    }
}

impl MealSource for FileCatalog {
    fn name(&self) -> &str {
        &self.name
    }

    fn week_plan(&self) -> Result<WeekMeals> {
        Ok(self.load()?.week)
    }

    fn replacement_pool(&self) -> Result<WeekMeals> {
        Ok(self.load()?.pool)
    }
}

/// Pick the catalog for this run: a file when a path is given, otherwise
/// the bundled one.
pub fn select_source(path: Option<PathBuf>) -> Box<dyn MealSource> {
    match path {
        Some(path) => Box::new(FileCatalog::new(path)),
        None => Box::new(BundledCatalog),
    }
}
