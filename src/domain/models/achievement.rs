use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AchievementCategory, AchievementId, Attachment};

/// Tri-state approval flag. Records start `Pending`; nothing in this crate moves
/// them out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalState {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ApprovalState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalState::Pending => "pending",
            ApprovalState::Approved => "approved",
            ApprovalState::Rejected => "rejected",
        }
    }

    pub fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            None => ApprovalState::Pending,
            Some(true) => ApprovalState::Approved,
            Some(false) => ApprovalState::Rejected,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            ApprovalState::Pending => None,
            ApprovalState::Approved => Some(true),
            ApprovalState::Rejected => Some(false),
        }
    }
}

/// Operator-supplied content of a submission, before the store assigns an id.
#[derive(Debug, Clone)]
pub struct NewAchievement {
    pub full_name: String,
    pub registration_number: String,
    pub mobile_number: String,
    pub category: AchievementCategory,
    pub professor_name: String,
    pub professor_email: String,
    pub user_image: Attachment,
    pub certificate_proof: Attachment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    id: AchievementId,
    full_name: String,
    registration_number: String,
    mobile_number: String,
    category: AchievementCategory,
    professor_name: String,
    professor_email: String,
    user_image: Attachment,
    certificate_proof: Attachment,
    submission_date: DateTime<Utc>,
    approval: ApprovalState,
}

impl Achievement {
    /// Assigns a fresh identifier and stamps the submission date.
    pub fn create(new: NewAchievement) -> Self {
        Self {
            id: AchievementId::generate(),
            full_name: new.full_name,
            registration_number: new.registration_number,
            mobile_number: new.mobile_number,
            category: new.category,
            professor_name: new.professor_name,
            professor_email: new.professor_email,
            user_image: new.user_image,
            certificate_proof: new.certificate_proof,
            submission_date: Utc::now(),
            approval: ApprovalState::Pending,
        }
    }

    /// Reconstitutes from persisted data (used by adapters).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: AchievementId,
        full_name: String,
        registration_number: String,
        mobile_number: String,
        category: AchievementCategory,
        professor_name: String,
        professor_email: String,
        user_image: Attachment,
        certificate_proof: Attachment,
        submission_date: DateTime<Utc>,
        approval: ApprovalState,
    ) -> Self {
        Self {
            id,
            full_name,
            registration_number,
            mobile_number,
            category,
            professor_name,
            professor_email,
            user_image,
            certificate_proof,
            submission_date,
            approval,
        }
    }

    pub fn id(&self) -> &AchievementId {
        &self.id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn registration_number(&self) -> &str {
        &self.registration_number
    }

    pub fn mobile_number(&self) -> &str {
        &self.mobile_number
    }

    pub fn category(&self) -> &AchievementCategory {
        &self.category
    }

    pub fn professor_name(&self) -> &str {
        &self.professor_name
    }

    pub fn professor_email(&self) -> &str {
        &self.professor_email
    }

    pub fn user_image(&self) -> &Attachment {
        &self.user_image
    }

    pub fn certificate_proof(&self) -> &Attachment {
        &self.certificate_proof
    }

    pub fn submission_date(&self) -> DateTime<Utc> {
        self.submission_date
    }

    pub fn approval(&self) -> ApprovalState {
        self.approval
    }

    pub fn summary(&self) -> AchievementSummary {
        AchievementSummary {
            id: self.id,
            full_name: self.full_name.clone(),
            registration_number: self.registration_number.clone(),
            category: self.category.clone(),
            professor_email: self.professor_email.clone(),
            submission_date: self.submission_date,
            approval: self.approval,
        }
    }
}

/// Everything but the binary payloads; what `list` loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementSummary {
    pub id: AchievementId,
    pub full_name: String,
    pub registration_number: String,
    pub category: AchievementCategory,
    pub professor_email: String,
    pub submission_date: DateTime<Utc>,
    pub approval: ApprovalState,
}

/// Exact-match filters for listing. Empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AchievementFilter {
    pub category: Option<AchievementCategory>,
    pub professor_email: Option<String>,
}

impl AchievementFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: AchievementCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_professor_email(mut self, email: impl Into<String>) -> Self {
        self.professor_email = Some(email.into());
        self
    }

    pub fn matches(&self, summary: &AchievementSummary) -> bool {
        let category_ok = self
            .category
            .as_ref()
            .map_or(true, |c| c == &summary.category);
        let email_ok = self
            .professor_email
            .as_deref()
            .map_or(true, |e| e == summary.professor_email);
        category_ok && email_ok
    }
}
