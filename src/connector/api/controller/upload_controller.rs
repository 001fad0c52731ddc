use anyhow::Result;

use crate::SubmissionDraft;

use super::super::Container;
use super::format_achievement;

pub struct UploadController<'a> {
    container: &'a Container,
}

impl<'a> UploadController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn upload(&self, draft: SubmissionDraft, verify: bool) -> Result<String> {
        let achievement = self
            .container
            .submit_use_case()
            .execute_draft(draft, self.container.prompter())
            .await?;

        let mut output = format!(
            "Success! Achievement inserted with ID: {}",
            achievement.id()
        );

        if verify {
            let stored = self
                .container
                .verify_use_case()
                .execute(achievement.id())
                .await?;
            output.push_str("\n\nVerification successful!\n");
            output.push_str(&format_achievement(&stored));
        }

        if self.container.memory_storage() {
            output.push_str("\n(in-memory storage: the record is discarded on exit)");
        }

        Ok(output)
    }
}
