use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Plan state file not found: {0}")]
    StateNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid meal card '{id}': {reason}")]
    InvalidMealCard { id: String, reason: String },

    #[error("Invalid setup: {}", .0.join("; "))]
    InvalidSetup(Vec<String>),
}

pub type Result<T> = std::result::Result<T, PlanError>;
