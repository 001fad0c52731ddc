mod achievement;
mod achievement_id;
mod attachment;
mod category;

pub use achievement::*;
pub use achievement_id::*;
pub use attachment::*;
pub use category::*;
