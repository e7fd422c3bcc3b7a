pub mod model;
pub mod snapshot;

// Re-export key types for easier use by dependent crates
pub use model::ModelDescription;
pub use snapshot::{load_rounds, RoundSnapshot};
