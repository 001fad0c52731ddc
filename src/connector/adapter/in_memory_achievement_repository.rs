use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::AchievementRepository;
use crate::domain::{Achievement, AchievementFilter, AchievementId, AchievementSummary, DomainError};

/// Process-local collection, used for dry runs and tests.
pub struct InMemoryAchievementRepository {
    records: Arc<Mutex<HashMap<AchievementId, Achievement>>>,
}

impl InMemoryAchievementRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryAchievementRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AchievementRepository for InMemoryAchievementRepository {
    async fn insert(&self, achievement: &Achievement) -> Result<(), DomainError> {
        let mut records = self.records.lock().await;
        if records.contains_key(achievement.id()) {
            return Err(DomainError::storage(format!(
                "Duplicate achievement id: {}",
                achievement.id()
            )));
        }
        records.insert(*achievement.id(), achievement.clone());
        debug!("Saved achievement {} to memory", achievement.id());
        Ok(())
    }

    async fn find_by_id(&self, id: &AchievementId) -> Result<Option<Achievement>, DomainError> {
        let records = self.records.lock().await;
        Ok(records.get(id).cloned())
    }

    async fn list(
        &self,
        filter: &AchievementFilter,
    ) -> Result<Vec<AchievementSummary>, DomainError> {
        let records = self.records.lock().await;
        let mut summaries: Vec<AchievementSummary> = records
            .values()
            .map(Achievement::summary)
            .filter(|summary| filter.matches(summary))
            .collect();
        summaries.sort_by(|a, b| {
            a.submission_date
                .cmp(&b.submission_date)
                .then_with(|| a.id.to_string().cmp(&b.id.to_string()))
        });
        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AchievementCategory, Attachment, NewAchievement};

    fn record(category: AchievementCategory) -> Achievement {
        Achievement::create(NewAchievement {
            full_name: "A B".to_string(),
            registration_number: "R1".to_string(),
            mobile_number: "1".to_string(),
            category,
            professor_name: "P".to_string(),
            professor_email: "p@uni.edu".to_string(),
            user_image: Attachment::new(vec![1], "image/png"),
            certificate_proof: Attachment::new(vec![2], "application/pdf"),
        })
    }

    #[tokio::test]
    async fn test_duplicate_insert_is_rejected() {
        let repo = InMemoryAchievementRepository::new();
        let a = record(AchievementCategory::AcademicExcellence);

        repo.insert(&a).await.unwrap();
        assert!(repo.insert(&a).await.unwrap_err().is_storage_error());
    }

    #[tokio::test]
    async fn test_list_applies_filter() {
        let repo = InMemoryAchievementRepository::new();
        repo.insert(&record(AchievementCategory::AcademicExcellence))
            .await
            .unwrap();
        repo.insert(&record(AchievementCategory::SportsAndAthletics))
            .await
            .unwrap();

        let all = repo.list(&AchievementFilter::new()).await.unwrap();
        assert_eq!(all.len(), 2);

        let sports = repo
            .list(&AchievementFilter::new().with_category(AchievementCategory::SportsAndAthletics))
            .await
            .unwrap();
        assert_eq!(sports.len(), 1);
        assert_eq!(sports[0].category, AchievementCategory::SportsAndAthletics);
    }
}
