use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::DomainError;

/// Store-assigned identifier of an achievement record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AchievementId(Uuid);

impl AchievementId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Coerces a textual identifier into the native form.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        Uuid::parse_str(trimmed).map(Self).map_err(|e| {
            DomainError::invalid_identifier(format!("'{}' is not a valid identifier ({})", trimmed, e))
        })
    }
}

impl fmt::Display for AchievementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for AchievementId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for AchievementId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}
