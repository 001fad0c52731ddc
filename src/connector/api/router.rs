use anyhow::Result;

use crate::cli::Commands;
use crate::{ExportNaming, SubmissionDraft};

use super::container::Container;
use super::controller::{ExportController, ListController, ShowController, UploadController};

pub struct Router<'a> {
    upload_controller: UploadController<'a>,
    show_controller: ShowController<'a>,
    export_controller: ExportController<'a>,
    list_controller: ListController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            upload_controller: UploadController::new(container),
            show_controller: ShowController::new(container),
            export_controller: ExportController::new(container),
            list_controller: ListController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Upload {
                full_name,
                registration_number,
                mobile_number,
                category,
                professor_name,
                professor_email,
                image,
                certificate,
                verify,
            } => {
                let draft = SubmissionDraft {
                    full_name,
                    registration_number,
                    mobile_number,
                    category,
                    professor_name,
                    professor_email,
                    image_path: image,
                    certificate_path: certificate,
                };
                self.upload_controller.upload(draft, verify).await
            }
            Commands::Show { id, format } => self.show_controller.show(id, format).await,
            Commands::Export {
                id,
                output_dir,
                unique_names,
            } => {
                let naming = if unique_names {
                    ExportNaming::ByRegistrationAndId
                } else {
                    ExportNaming::ByRegistration
                };
                self.export_controller.export(id, output_dir, naming).await
            }
            Commands::List {
                category,
                professor_email,
                format,
            } => {
                self.list_controller
                    .list(category, professor_email, format)
                    .await
            }
        }
    }
}
