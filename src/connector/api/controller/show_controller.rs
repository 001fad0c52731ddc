use anyhow::Result;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::Achievement;

use super::super::Container;

/// Everything `show` prints; payload sizes stand in for the payloads.
#[derive(Debug, Serialize)]
struct AchievementDetails<'a> {
    id: String,
    full_name: &'a str,
    registration_number: &'a str,
    mobile_number: &'a str,
    achievement_category: &'a str,
    professor_name: &'a str,
    professor_email: &'a str,
    user_image_content_type: &'a str,
    user_image_bytes: usize,
    certificate_content_type: &'a str,
    certificate_bytes: usize,
    submission_date: String,
    approval: &'static str,
}

impl<'a> From<&'a Achievement> for AchievementDetails<'a> {
    fn from(a: &'a Achievement) -> Self {
        Self {
            id: a.id().to_string(),
            full_name: a.full_name(),
            registration_number: a.registration_number(),
            mobile_number: a.mobile_number(),
            achievement_category: a.category().as_str(),
            professor_name: a.professor_name(),
            professor_email: a.professor_email(),
            user_image_content_type: a.user_image().content_type(),
            user_image_bytes: a.user_image().len(),
            certificate_content_type: a.certificate_proof().content_type(),
            certificate_bytes: a.certificate_proof().len(),
            submission_date: a.submission_date().to_rfc3339(),
            approval: a.approval().as_str(),
        }
    }
}

pub struct ShowController<'a> {
    container: &'a Container,
}

impl<'a> ShowController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn show(&self, id: String, format: OutputFormat) -> Result<String> {
        let achievement = self.container.verify_use_case().execute_str(&id).await?;

        Ok(match format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(&AchievementDetails::from(&achievement))?
            }
            OutputFormat::Text => format_achievement(&achievement),
        })
    }
}

pub fn format_achievement(a: &Achievement) -> String {
    let mut out = format!("Achievement {}\n", a.id());
    out.push_str(&format!("  Name:                {}\n", a.full_name()));
    out.push_str(&format!("  Registration Number: {}\n", a.registration_number()));
    out.push_str(&format!("  Mobile Number:       {}\n", a.mobile_number()));
    out.push_str(&format!("  Achievement Category: {}\n", a.category()));
    out.push_str(&format!(
        "  Professor:           {} <{}>\n",
        a.professor_name(),
        a.professor_email()
    ));
    out.push_str(&format!(
        "  User Image Type:     {} ({} bytes)\n",
        a.user_image().content_type(),
        a.user_image().len()
    ));
    out.push_str(&format!(
        "  Certificate Type:    {} ({} bytes)\n",
        a.certificate_proof().content_type(),
        a.certificate_proof().len()
    ));
    out.push_str(&format!(
        "  Submitted:           {}\n",
        a.submission_date().format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push_str(&format!("  Approval:            {}", a.approval().as_str()));
    out
}
