pub mod export_controller;
pub mod list_controller;
pub mod show_controller;
pub mod upload_controller;

pub use export_controller::ExportController;
pub use list_controller::ListController;
pub use show_controller::{format_achievement, ShowController};
pub use upload_controller::UploadController;
