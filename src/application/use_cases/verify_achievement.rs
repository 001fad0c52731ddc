use std::sync::Arc;

use crate::application::AchievementRepository;
use crate::domain::{Achievement, AchievementId, DomainError};

/// Re-reads a stored record so the operator can confirm what was saved.
pub struct VerifyAchievementUseCase {
    achievement_repo: Arc<dyn AchievementRepository>,
}

impl VerifyAchievementUseCase {
    pub fn new(achievement_repo: Arc<dyn AchievementRepository>) -> Self {
        Self { achievement_repo }
    }

    pub async fn execute(&self, id: &AchievementId) -> Result<Achievement, DomainError> {
        self.achievement_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Achievement not found: {}", id)))
    }

    pub async fn execute_str(&self, raw_id: &str) -> Result<Achievement, DomainError> {
        let id = AchievementId::parse(raw_id)?;
        self.execute(&id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::InMemoryAchievementRepository;

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let repo = Arc::new(InMemoryAchievementRepository::new());
        let use_case = VerifyAchievementUseCase::new(repo);

        let err = use_case
            .execute(&AchievementId::generate())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_malformed_id_is_invalid_identifier() {
        let repo = Arc::new(InMemoryAchievementRepository::new());
        let use_case = VerifyAchievementUseCase::new(repo);

        let err = use_case.execute_str("xyz").await.unwrap_err();
        assert!(err.is_invalid_identifier());
    }
}
