mod achievement_repository;
mod prompter;

pub use achievement_repository::*;
pub use prompter::*;
