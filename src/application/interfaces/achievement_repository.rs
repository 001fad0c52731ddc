use async_trait::async_trait;

use crate::domain::{Achievement, AchievementFilter, AchievementId, AchievementSummary, DomainError};

/// Persistence for achievement records: one collection, insert and fetch only.
#[async_trait]
pub trait AchievementRepository: Send + Sync {
    /// Inserts a new record. Fails if the identifier is already taken.
    async fn insert(&self, achievement: &Achievement) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &AchievementId) -> Result<Option<Achievement>, DomainError>;

    /// Lists records without loading their binary payloads, oldest first.
    async fn list(&self, filter: &AchievementFilter) -> Result<Vec<AchievementSummary>, DomainError>;
}
