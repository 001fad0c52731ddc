pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    AchievementRepository, ExportAchievementUseCase, ExportNaming, ExportedFiles,
    ListAchievementsUseCase, Prompter, SubmissionDraft, SubmissionRequest,
    SubmitAchievementUseCase, VerifyAchievementUseCase, DEFAULT_MAX_ATTACHMENT_BYTES,
};

pub use cli::{Commands, OutputFormat};

pub use connector::{
    api::{Container, ContainerConfig, Router},
    ConsolePrompter, DuckdbAchievementRepository, InMemoryAchievementRepository,
};

pub use domain::{
    Achievement, AchievementCategory, AchievementFilter, AchievementId, AchievementSummary,
    ApprovalState, Attachment, AttachmentKind, DomainError, NewAchievement,
};
