use std::fmt;

use serde::{Deserialize, Serialize};

/// Achievement category as entered by the submitter.
///
/// The six known labels are offered at the prompt; anything else is kept
/// verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum AchievementCategory {
    AcademicExcellence,
    ResearchAchievements,
    ProfessionalAchievements,
    LeadershipAndService,
    SportsAndAthletics,
    InnovationAndTechnology,
    Other(String),
}

impl AchievementCategory {
    pub const KNOWN: [AchievementCategory; 6] = [
        AchievementCategory::AcademicExcellence,
        AchievementCategory::ResearchAchievements,
        AchievementCategory::ProfessionalAchievements,
        AchievementCategory::LeadershipAndService,
        AchievementCategory::SportsAndAthletics,
        AchievementCategory::InnovationAndTechnology,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            AchievementCategory::AcademicExcellence => "Academic Excellence",
            AchievementCategory::ResearchAchievements => "Research Achievements",
            AchievementCategory::ProfessionalAchievements => "Professional Achievements",
            AchievementCategory::LeadershipAndService => "Leadership & Service",
            AchievementCategory::SportsAndAthletics => "Sports & Athletics",
            AchievementCategory::InnovationAndTechnology => "Innovation & Technology",
            AchievementCategory::Other(label) => label,
        }
    }

    pub fn from_label(label: &str) -> Self {
        Self::KNOWN
            .iter()
            .find(|known| known.as_str() == label)
            .cloned()
            .unwrap_or_else(|| AchievementCategory::Other(label.to_string()))
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, AchievementCategory::Other(_))
    }

    /// Comma-separated list of the known labels, for prompts.
    pub fn known_labels() -> String {
        Self::KNOWN
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for AchievementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for AchievementCategory {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<AchievementCategory> for String {
    fn from(value: AchievementCategory) -> Self {
        value.as_str().to_string()
    }
}
