use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::{AchievementRepository, Prompter};
use crate::domain::{
    Achievement, AchievementCategory, Attachment, AttachmentKind, DomainError, NewAchievement,
};

/// Default upper bound on a single attachment, matching the web form's limit.
pub const DEFAULT_MAX_ATTACHMENT_BYTES: u64 = 10 * 1024 * 1024;

/// Fully specified submission: six text fields and two source files.
#[derive(Debug, Clone)]
pub struct SubmissionRequest {
    pub full_name: String,
    pub registration_number: String,
    pub mobile_number: String,
    pub category: String,
    pub professor_name: String,
    pub professor_email: String,
    pub image_path: PathBuf,
    pub certificate_path: PathBuf,
}

/// Partially filled submission. Missing fields are asked for on the console.
#[derive(Debug, Clone, Default)]
pub struct SubmissionDraft {
    pub full_name: Option<String>,
    pub registration_number: Option<String>,
    pub mobile_number: Option<String>,
    pub category: Option<String>,
    pub professor_name: Option<String>,
    pub professor_email: Option<String>,
    pub image_path: Option<PathBuf>,
    pub certificate_path: Option<PathBuf>,
}

impl SubmissionDraft {
    /// Prompts for whichever of the two source paths is missing and returns both.
    pub fn resolve_paths(
        &mut self,
        prompter: &dyn Prompter,
    ) -> Result<(PathBuf, PathBuf), DomainError> {
        let image_path = match self.image_path.take() {
            Some(path) => path,
            None => PathBuf::from(clean_path(&prompter.prompt(
                "Enter path to user image (e.g., /home/you/image.jpg): ",
            )?)),
        };
        let certificate_path = match self.certificate_path.take() {
            Some(path) => path,
            None => PathBuf::from(clean_path(&prompter.prompt(
                "Enter path to certificate (e.g., /home/you/cert.pdf): ",
            )?)),
        };

        self.image_path = Some(image_path.clone());
        self.certificate_path = Some(certificate_path.clone());
        Ok((image_path, certificate_path))
    }

    /// Prompts for every missing field: the two paths first, then the text fields.
    pub fn resolve(mut self, prompter: &dyn Prompter) -> Result<SubmissionRequest, DomainError> {
        let (image_path, certificate_path) = self.resolve_paths(prompter)?;

        let full_name = ask(self.full_name, prompter, "Enter full name: ")?;
        let registration_number =
            ask(self.registration_number, prompter, "Enter registration number: ")?;
        let mobile_number = ask(self.mobile_number, prompter, "Enter mobile number: ")?;
        let category = ask(
            self.category,
            prompter,
            &format!(
                "Enter achievement category\n({}): ",
                AchievementCategory::known_labels()
            ),
        )?;
        let professor_name = ask(self.professor_name, prompter, "Enter professor name: ")?;
        let professor_email = ask(self.professor_email, prompter, "Enter professor email: ")?;

        Ok(SubmissionRequest {
            full_name,
            registration_number,
            mobile_number,
            category,
            professor_name,
            professor_email,
            image_path,
            certificate_path,
        })
    }
}

fn ask(value: Option<String>, prompter: &dyn Prompter, message: &str) -> Result<String, DomainError> {
    match value {
        Some(v) => Ok(v),
        None => Ok(prompter.prompt(message)?.trim().to_string()),
    }
}

/// Trims whitespace and the double quotes file managers add when copying paths.
fn clean_path(raw: &str) -> String {
    raw.trim().trim_matches('"').to_string()
}

pub struct SubmitAchievementUseCase {
    achievement_repo: Arc<dyn AchievementRepository>,
    max_attachment_bytes: u64,
}

impl SubmitAchievementUseCase {
    pub fn new(achievement_repo: Arc<dyn AchievementRepository>) -> Self {
        Self {
            achievement_repo,
            max_attachment_bytes: DEFAULT_MAX_ATTACHMENT_BYTES,
        }
    }

    pub fn with_max_attachment_bytes(mut self, max: u64) -> Self {
        self.max_attachment_bytes = max;
        self
    }

    pub async fn execute(&self, request: SubmissionRequest) -> Result<Achievement, DomainError> {
        let user_image = self
            .read_attachment(AttachmentKind::Image, &request.image_path)
            .await?;
        let certificate_proof = self
            .read_attachment(AttachmentKind::Certificate, &request.certificate_path)
            .await?;

        self.insert(request, user_image, certificate_proof).await
    }

    /// Interactive submission: both files are read as soon as their paths are
    /// known, so a bad path fails before the text fields are asked for.
    pub async fn execute_draft(
        &self,
        mut draft: SubmissionDraft,
        prompter: &dyn Prompter,
    ) -> Result<Achievement, DomainError> {
        let (image_path, certificate_path) = draft.resolve_paths(prompter)?;
        let user_image = self
            .read_attachment(AttachmentKind::Image, &image_path)
            .await?;
        let certificate_proof = self
            .read_attachment(AttachmentKind::Certificate, &certificate_path)
            .await?;

        let request = draft.resolve(prompter)?;
        self.insert(request, user_image, certificate_proof).await
    }

    async fn insert(
        &self,
        request: SubmissionRequest,
        user_image: Attachment,
        certificate_proof: Attachment,
    ) -> Result<Achievement, DomainError> {
        let achievement = Achievement::create(NewAchievement {
            full_name: request.full_name,
            registration_number: request.registration_number,
            mobile_number: request.mobile_number,
            category: AchievementCategory::from_label(&request.category),
            professor_name: request.professor_name,
            professor_email: request.professor_email,
            user_image,
            certificate_proof,
        });

        self.achievement_repo.insert(&achievement).await?;

        info!(
            "Inserted achievement {} for {}",
            achievement.id(),
            achievement.registration_number()
        );
        Ok(achievement)
    }

    async fn read_attachment(
        &self,
        kind: AttachmentKind,
        path: &Path,
    ) -> Result<Attachment, DomainError> {
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| DomainError::io(path, e))?;
        if !metadata.is_file() {
            return Err(DomainError::invalid_input(format!(
                "{} is not a regular file",
                path.display()
            )));
        }
        if metadata.len() > self.max_attachment_bytes {
            return Err(DomainError::invalid_input(format!(
                "{} is {} bytes, larger than the {} byte limit",
                path.display(),
                metadata.len(),
                self.max_attachment_bytes
            )));
        }

        let data = tokio::fs::read(path)
            .await
            .map_err(|e| DomainError::io(path, e))?;
        let attachment = Attachment::from_source(kind, path, data);

        if !kind.is_recognised_extension(path) {
            warn!(
                "Unrecognised {} extension on {}, storing as {}",
                kind.as_str(),
                path.display(),
                attachment.content_type()
            );
        }
        debug!(
            "Read {} bytes of {} from {}",
            attachment.len(),
            attachment.content_type(),
            path.display()
        );

        Ok(attachment)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;
    use crate::connector::InMemoryAchievementRepository;
    use crate::domain::{ApprovalState, APPLICATION_PDF, IMAGE_JPEG, IMAGE_PNG};

    struct ScriptedPrompter {
        answers: Mutex<VecDeque<String>>,
        asked: Mutex<Vec<String>>,
    }

    impl ScriptedPrompter {
        fn new(answers: &[&str]) -> Self {
            Self {
                answers: Mutex::new(answers.iter().map(|s| s.to_string()).collect()),
                asked: Mutex::new(Vec::new()),
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn prompt(&self, message: &str) -> Result<String, DomainError> {
            self.asked.lock().unwrap().push(message.to_string());
            self.answers
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| DomainError::invalid_input("no more scripted answers"))
        }
    }

    fn request(dir: &Path, image: &str, cert: &str) -> SubmissionRequest {
        SubmissionRequest {
            full_name: "A B".to_string(),
            registration_number: "R100".to_string(),
            mobile_number: "9876543210".to_string(),
            category: "Research Achievements".to_string(),
            professor_name: "Prof X".to_string(),
            professor_email: "x@uni.edu".to_string(),
            image_path: dir.join(image),
            certificate_path: dir.join(cert),
        }
    }

    #[test]
    fn test_resolve_prompts_in_order() {
        let prompter = ScriptedPrompter::new(&[
            "\"/tmp/img.jpg\"",
            " /tmp/cert.pdf ",
            "A B",
            "R100",
            "9876543210",
            "Sports & Athletics",
            "Prof X",
            "x@uni.edu",
        ]);

        let request = SubmissionDraft::default().resolve(&prompter).unwrap();

        assert_eq!(request.image_path, PathBuf::from("/tmp/img.jpg"));
        assert_eq!(request.certificate_path, PathBuf::from("/tmp/cert.pdf"));
        assert_eq!(request.full_name, "A B");
        assert_eq!(request.category, "Sports & Athletics");
        assert_eq!(request.professor_email, "x@uni.edu");

        let asked = prompter.asked.lock().unwrap();
        assert_eq!(asked.len(), 8);
        assert!(asked[0].contains("user image"));
        assert!(asked[5].contains("Innovation & Technology"));
    }

    #[test]
    fn test_resolve_skips_supplied_fields() {
        let prompter = ScriptedPrompter::new(&["9876543210"]);
        let draft = SubmissionDraft {
            full_name: Some("A B".to_string()),
            registration_number: Some("R100".to_string()),
            mobile_number: None,
            category: Some("Academic Excellence".to_string()),
            professor_name: Some("Prof X".to_string()),
            professor_email: Some("x@uni.edu".to_string()),
            image_path: Some(PathBuf::from("img.png")),
            certificate_path: Some(PathBuf::from("cert.pdf")),
        };

        let request = draft.resolve(&prompter).unwrap();

        assert_eq!(request.mobile_number, "9876543210");
        assert_eq!(prompter.asked.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_stores_payloads_and_content_types() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("img.JPEG"), b"jpeg-bytes").unwrap();
        std::fs::write(dir.path().join("cert.pdf"), b"%PDF-1.7").unwrap();

        let repo = Arc::new(InMemoryAchievementRepository::new());
        let use_case = SubmitAchievementUseCase::new(repo.clone());

        let achievement = use_case
            .execute(request(dir.path(), "img.JPEG", "cert.pdf"))
            .await
            .unwrap();

        let stored = repo.find_by_id(achievement.id()).await.unwrap().unwrap();
        assert_eq!(stored.user_image().data(), b"jpeg-bytes");
        assert_eq!(stored.user_image().content_type(), IMAGE_JPEG);
        assert_eq!(stored.certificate_proof().data(), b"%PDF-1.7");
        assert_eq!(stored.certificate_proof().content_type(), APPLICATION_PDF);
        assert_eq!(stored.approval(), ApprovalState::Pending);
        assert_eq!(
            stored.category(),
            &AchievementCategory::ResearchAchievements
        );
    }

    #[tokio::test]
    async fn test_submit_unrecognised_extensions_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("img.bmp"), b"BM").unwrap();
        std::fs::write(dir.path().join("cert.png"), b"png").unwrap();

        let repo = Arc::new(InMemoryAchievementRepository::new());
        let achievement = SubmitAchievementUseCase::new(repo)
            .execute(request(dir.path(), "img.bmp", "cert.png"))
            .await
            .unwrap();

        assert_eq!(achievement.user_image().content_type(), IMAGE_PNG);
        assert_eq!(achievement.certificate_proof().content_type(), IMAGE_JPEG);
    }

    #[tokio::test]
    async fn test_submit_missing_file_is_io_failure_and_inserts_nothing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("img.jpg"), b"x").unwrap();

        let repo = Arc::new(InMemoryAchievementRepository::new());
        let err = SubmitAchievementUseCase::new(repo.clone())
            .execute(request(dir.path(), "img.jpg", "missing.pdf"))
            .await
            .unwrap_err();

        assert!(err.is_io_failure());
        assert!(repo
            .list(&Default::default())
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_draft_bad_image_path_fails_before_text_prompts() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cert.pdf"), b"pdf").unwrap();
        let missing = dir.path().join("typo.jpg");
        let cert = dir.path().join("cert.pdf");
        let prompter = ScriptedPrompter::new(&[
            missing.to_str().unwrap(),
            cert.to_str().unwrap(),
            "A B",
            "R100",
        ]);

        let repo = Arc::new(InMemoryAchievementRepository::new());
        let err = SubmitAchievementUseCase::new(repo.clone())
            .execute_draft(SubmissionDraft::default(), &prompter)
            .await
            .unwrap_err();

        assert!(err.is_io_failure());
        assert_eq!(prompter.asked.lock().unwrap().len(), 2);
        assert!(repo.list(&Default::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_draft_reads_files_then_prompts_text_fields() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("img.jpg"), b"jpg").unwrap();
        std::fs::write(dir.path().join("cert.pdf"), b"pdf").unwrap();
        let image = format!("\"{}\"", dir.path().join("img.jpg").display());
        let cert = dir.path().join("cert.pdf");
        let prompter = ScriptedPrompter::new(&[
            image.as_str(),
            cert.to_str().unwrap(),
            "A B",
            "R100",
            "9876543210",
            "Academic Excellence",
            "Prof X",
            "x@uni.edu",
        ]);

        let repo = Arc::new(InMemoryAchievementRepository::new());
        let achievement = SubmitAchievementUseCase::new(repo.clone())
            .execute_draft(SubmissionDraft::default(), &prompter)
            .await
            .unwrap();

        assert_eq!(prompter.asked.lock().unwrap().len(), 8);
        let stored = repo.find_by_id(achievement.id()).await.unwrap().unwrap();
        assert_eq!(stored.user_image().data(), b"jpg");
        assert_eq!(stored.certificate_proof().content_type(), APPLICATION_PDF);
        assert_eq!(stored.registration_number(), "R100");
    }

    #[tokio::test]
    async fn test_submit_rejects_oversized_attachment() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("img.jpg"), vec![0u8; 64]).unwrap();
        std::fs::write(dir.path().join("cert.pdf"), b"pdf").unwrap();

        let repo = Arc::new(InMemoryAchievementRepository::new());
        let err = SubmitAchievementUseCase::new(repo)
            .with_max_attachment_bytes(16)
            .execute(request(dir.path(), "img.jpg", "cert.pdf"))
            .await
            .unwrap_err();

        assert!(err.is_invalid_input());
    }
}
