use std::path::PathBuf;

use anyhow::Result;

use crate::{ExportNaming, ExportedFiles};

use super::super::Container;

pub struct ExportController<'a> {
    container: &'a Container,
}

impl<'a> ExportController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn export(
        &self,
        id: String,
        output_dir: PathBuf,
        naming: ExportNaming,
    ) -> Result<String> {
        let files = self
            .container
            .export_use_case(naming)
            .execute_str(&id, &output_dir)
            .await?;
        Ok(self.format_export_success(&files))
    }

    fn format_export_success(&self, files: &ExportedFiles) -> String {
        format!(
            "Files exported successfully!\nImage saved to: {}\nCertificate saved to: {}",
            files.image_path.display(),
            files.certificate_path.display()
        )
    }
}
