use std::sync::Arc;

use crate::application::AchievementRepository;
use crate::domain::{AchievementFilter, AchievementSummary, DomainError};

pub struct ListAchievementsUseCase {
    achievement_repo: Arc<dyn AchievementRepository>,
}

impl ListAchievementsUseCase {
    pub fn new(achievement_repo: Arc<dyn AchievementRepository>) -> Self {
        Self { achievement_repo }
    }

    pub async fn execute(
        &self,
        filter: &AchievementFilter,
    ) -> Result<Vec<AchievementSummary>, DomainError> {
        self.achievement_repo.list(filter).await
    }
}
