pub mod commands;
pub mod config;
pub mod error;
pub mod search;
pub mod store;
pub mod subtitle;

pub use config::Config;
pub use error::AppError;
pub use search::{MatchResult, SearchEngine};
pub use store::Store;
