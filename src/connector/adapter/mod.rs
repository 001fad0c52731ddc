mod console_prompter;
mod duckdb_achievement_repository;
mod in_memory_achievement_repository;

pub use console_prompter::*;
pub use duckdb_achievement_repository::*;
pub use in_memory_achievement_repository::*;
