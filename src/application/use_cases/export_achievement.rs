use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::AchievementRepository;
use crate::domain::{Achievement, AchievementId, Attachment, AttachmentKind, DomainError};

/// How exported files are named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportNaming {
    /// `<registration>_image.<ext>`. Records sharing a registration number
    /// overwrite each other's files.
    #[default]
    ByRegistration,
    /// `<registration>_<id>_image.<ext>`, unique per record.
    ByRegistrationAndId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFiles {
    pub image_path: PathBuf,
    pub certificate_path: PathBuf,
}

/// Writes a record's two attachments back to disk.
pub struct ExportAchievementUseCase {
    achievement_repo: Arc<dyn AchievementRepository>,
    naming: ExportNaming,
}

impl ExportAchievementUseCase {
    pub fn new(achievement_repo: Arc<dyn AchievementRepository>) -> Self {
        Self {
            achievement_repo,
            naming: ExportNaming::default(),
        }
    }

    pub fn with_naming(mut self, naming: ExportNaming) -> Self {
        self.naming = naming;
        self
    }

    /// Same as [`execute`](Self::execute) for an identifier still in text form.
    pub async fn execute_str(
        &self,
        raw_id: &str,
        output_dir: &Path,
    ) -> Result<ExportedFiles, DomainError> {
        let id = AchievementId::parse(raw_id)?;
        self.execute(&id, output_dir).await
    }

    pub async fn execute(
        &self,
        id: &AchievementId,
        output_dir: &Path,
    ) -> Result<ExportedFiles, DomainError> {
        let achievement = self
            .achievement_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Achievement not found: {}", id)))?;

        tokio::fs::create_dir_all(output_dir)
            .await
            .map_err(|e| DomainError::io(output_dir, e))?;

        let image_path = self.target_path(&achievement, AttachmentKind::Image, output_dir);
        let certificate_path =
            self.target_path(&achievement, AttachmentKind::Certificate, output_dir);

        write_attachment(&image_path, achievement.user_image()).await?;
        write_attachment(&certificate_path, achievement.certificate_proof()).await?;

        info!(
            "Exported achievement {} to {} and {}",
            id,
            image_path.display(),
            certificate_path.display()
        );

        Ok(ExportedFiles {
            image_path,
            certificate_path,
        })
    }

    fn target_path(
        &self,
        achievement: &Achievement,
        kind: AttachmentKind,
        output_dir: &Path,
    ) -> PathBuf {
        let attachment = match kind {
            AttachmentKind::Image => achievement.user_image(),
            AttachmentKind::Certificate => achievement.certificate_proof(),
        };
        let id = match self.naming {
            ExportNaming::ByRegistration => None,
            ExportNaming::ByRegistrationAndId => Some(achievement.id()),
        };
        output_dir.join(kind.export_file_name(
            achievement.registration_number(),
            id,
            attachment.content_type(),
        ))
    }
}

async fn write_attachment(path: &Path, attachment: &Attachment) -> Result<(), DomainError> {
    match tokio::fs::try_exists(path).await {
        Ok(true) => warn!("Overwriting existing file {}", path.display()),
        Ok(false) => {}
        Err(e) => debug!("Could not check whether {} exists: {}", path.display(), e),
    }
    tokio::fs::write(path, attachment.data())
        .await
        .map_err(|e| DomainError::io(path, e))?;
    debug!("Wrote {} bytes to {}", attachment.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::InMemoryAchievementRepository;
    use crate::domain::{AchievementCategory, NewAchievement, APPLICATION_PDF, IMAGE_JPEG, IMAGE_PNG};

    fn achievement(registration: &str, image: &[u8], cert_type: &str) -> Achievement {
        Achievement::create(NewAchievement {
            full_name: "A B".to_string(),
            registration_number: registration.to_string(),
            mobile_number: "9876543210".to_string(),
            category: AchievementCategory::AcademicExcellence,
            professor_name: "Prof X".to_string(),
            professor_email: "x@uni.edu".to_string(),
            user_image: Attachment::new(image.to_vec(), IMAGE_JPEG),
            certificate_proof: Attachment::new(b"cert".to_vec(), cert_type),
        })
    }

    #[tokio::test]
    async fn test_export_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("out");
        let repo = Arc::new(InMemoryAchievementRepository::new());
        let record = achievement("R100", b"img", APPLICATION_PDF);
        repo.insert(&record).await.unwrap();

        let files = ExportAchievementUseCase::new(repo)
            .execute(record.id(), &out)
            .await
            .unwrap();

        assert_eq!(files.image_path, out.join("R100_image.jpg"));
        assert_eq!(files.certificate_path, out.join("R100_certificate.pdf"));
        assert_eq!(std::fs::read(&files.image_path).unwrap(), b"img");
        assert_eq!(std::fs::read(&files.certificate_path).unwrap(), b"cert");
    }

    #[tokio::test]
    async fn test_certificate_extension_follows_stored_type() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Arc::new(InMemoryAchievementRepository::new());
        let record = achievement("R7", b"img", IMAGE_PNG);
        repo.insert(&record).await.unwrap();

        let files = ExportAchievementUseCase::new(repo)
            .execute(record.id(), dir.path())
            .await
            .unwrap();

        assert_eq!(files.certificate_path, dir.path().join("R7_certificate.jpg"));
    }

    #[tokio::test]
    async fn test_export_unknown_id_is_not_found_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let repo = Arc::new(InMemoryAchievementRepository::new());

        let err = ExportAchievementUseCase::new(repo)
            .execute(&AchievementId::generate(), &out)
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(!out.exists());
    }

    #[tokio::test]
    async fn test_export_str_rejects_malformed_id() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Arc::new(InMemoryAchievementRepository::new());

        let err = ExportAchievementUseCase::new(repo)
            .execute_str("12345", dir.path())
            .await
            .unwrap_err();

        assert!(err.is_invalid_identifier());
    }

    #[tokio::test]
    async fn test_export_keeps_files_inside_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let outside = dir.path().join("outside");
        let repo = Arc::new(InMemoryAchievementRepository::new());

        let registrations = [
            "CS/2021/001".to_string(),
            outside.to_string_lossy().to_string(),
            "../escape".to_string(),
            String::new(),
        ];
        for registration in registrations.iter() {
            let record = achievement(registration, b"img", APPLICATION_PDF);
            repo.insert(&record).await.unwrap();

            let files = ExportAchievementUseCase::new(repo.clone())
                .execute(record.id(), &out)
                .await
                .unwrap();

            assert_eq!(files.image_path.parent(), Some(out.as_path()));
            assert_eq!(files.certificate_path.parent(), Some(out.as_path()));
            assert_eq!(std::fs::read(&files.image_path).unwrap(), b"img");
        }

        assert!(out.join("CS_2021_001_image.jpg").exists());
        assert!(out.join("CS_2021_001_certificate.pdf").exists());
        assert!(!dir.path().join("outside_image.jpg").exists());
        assert!(!dir.path().join("escape_image.jpg").exists());
    }

    #[tokio::test]
    async fn test_unique_naming_keeps_shared_registration_apart() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Arc::new(InMemoryAchievementRepository::new());
        let first = achievement("R100", b"first", APPLICATION_PDF);
        let second = achievement("R100", b"second", APPLICATION_PDF);
        repo.insert(&first).await.unwrap();
        repo.insert(&second).await.unwrap();

        let use_case =
            ExportAchievementUseCase::new(repo).with_naming(ExportNaming::ByRegistrationAndId);
        let a = use_case.execute(first.id(), dir.path()).await.unwrap();
        let b = use_case.execute(second.id(), dir.path()).await.unwrap();

        assert_ne!(a.image_path, b.image_path);
        assert_eq!(std::fs::read(&a.image_path).unwrap(), b"first");
        assert_eq!(std::fs::read(&b.image_path).unwrap(), b"second");
    }
}
