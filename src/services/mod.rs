pub mod derive;
mod health;
pub mod ingest;

pub use derive::derive;
pub use health::{HealthStats, SharedHealthStats};
pub use ingest::parse_csv;
