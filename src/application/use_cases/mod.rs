mod export_achievement;
mod list_achievements;
mod submit_achievement;
mod verify_achievement;

pub use export_achievement::*;
pub use list_achievements::*;
pub use submit_achievement::*;
pub use verify_achievement::*;
