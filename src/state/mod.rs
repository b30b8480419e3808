mod manager;
mod persistence;

pub use manager::PlanSession;
pub use persistence::{load_pantry, load_state, save_state};
