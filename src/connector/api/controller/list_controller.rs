use anyhow::Result;

use crate::cli::OutputFormat;
use crate::{AchievementCategory, AchievementFilter, AchievementSummary};

use super::super::Container;

pub struct ListController<'a> {
    container: &'a Container,
}

impl<'a> ListController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn list(
        &self,
        category: Option<String>,
        professor_email: Option<String>,
        format: OutputFormat,
    ) -> Result<String> {
        let mut filter = AchievementFilter::new();
        if let Some(label) = category {
            filter = filter.with_category(AchievementCategory::from_label(label.trim()));
        }
        if let Some(email) = professor_email {
            filter = filter.with_professor_email(email.trim());
        }

        let summaries = self.container.list_use_case().execute(&filter).await?;

        Ok(match format {
            OutputFormat::Json => serde_json::to_string_pretty(&summaries)?,
            OutputFormat::Text => self.format_list(&summaries),
        })
    }

    fn format_list(&self, summaries: &[AchievementSummary]) -> String {
        if summaries.is_empty() {
            return "No achievements found.".to_string();
        }

        let mut output = format!("{} achievements:\n\n", summaries.len());
        for s in summaries {
            output.push_str(&format!("  {} ({})\n", s.full_name, s.id));
            output.push_str(&format!(
                "    Registration: {}, Category: {}\n",
                s.registration_number, s.category
            ));
            output.push_str(&format!(
                "    Professor: {}, Submitted: {}, Approval: {}\n",
                s.professor_email,
                s.submission_date.format("%Y-%m-%d %H:%M:%S UTC"),
                s.approval.as_str()
            ));
            output.push('\n');
        }

        output
    }
}
