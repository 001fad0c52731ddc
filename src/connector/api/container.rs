use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::application::{AchievementRepository, Prompter};
use crate::{
    ConsolePrompter, DuckdbAchievementRepository, ExportAchievementUseCase, ExportNaming,
    InMemoryAchievementRepository, ListAchievementsUseCase, SubmitAchievementUseCase,
    VerifyAchievementUseCase,
};

pub const DATABASE_FILE: &str = "walloffame.duckdb";

/// Store location and limits, resolved from flags and environment at startup.
#[derive(Debug, Clone)]
pub struct ContainerConfig {
    pub data_dir: String,
    /// DuckDB schema holding the collection.
    pub database: String,
    /// Table holding the achievement records.
    pub collection: String,
    pub max_attachment_bytes: u64,
    pub memory_storage: bool,
    /// Open the database in read-only mode.
    ///
    /// When `true` and the database file already exists, DuckDB is opened with
    /// `AccessMode::ReadOnly`, which does not acquire the exclusive write lock.
    /// Set this for commands that never write: `show`, `list`, `export`.
    pub read_only: bool,
}

pub struct Container {
    achievement_repo: Arc<dyn AchievementRepository>,
    prompter: Arc<dyn Prompter>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let achievement_repo: Arc<dyn AchievementRepository> = if config.memory_storage {
            debug!("Using in-memory achievement storage");
            Arc::new(InMemoryAchievementRepository::new())
        } else {
            let db_path = PathBuf::from(&config.data_dir).join(DATABASE_FILE);
            if config.read_only && db_path.exists() {
                debug!("Opening DuckDB (read-only) at {:?}", db_path);
                Arc::new(DuckdbAchievementRepository::new_read_only(
                    &db_path,
                    &config.database,
                    &config.collection,
                )?)
            } else {
                debug!("Opening DuckDB at {:?}", db_path);
                Arc::new(DuckdbAchievementRepository::new(
                    &db_path,
                    &config.database,
                    &config.collection,
                )?)
            }
        };

        Ok(Self::with_parts(
            achievement_repo,
            Arc::new(ConsolePrompter::new()),
            config,
        ))
    }

    /// Assembles a container from already-built adapters.
    pub fn with_parts(
        achievement_repo: Arc<dyn AchievementRepository>,
        prompter: Arc<dyn Prompter>,
        config: ContainerConfig,
    ) -> Self {
        Self {
            achievement_repo,
            prompter,
            config,
        }
    }

    pub fn submit_use_case(&self) -> SubmitAchievementUseCase {
        SubmitAchievementUseCase::new(self.achievement_repo.clone())
            .with_max_attachment_bytes(self.config.max_attachment_bytes)
    }

    pub fn verify_use_case(&self) -> VerifyAchievementUseCase {
        VerifyAchievementUseCase::new(self.achievement_repo.clone())
    }

    pub fn export_use_case(&self, naming: ExportNaming) -> ExportAchievementUseCase {
        ExportAchievementUseCase::new(self.achievement_repo.clone()).with_naming(naming)
    }

    pub fn list_use_case(&self) -> ListAchievementsUseCase {
        ListAchievementsUseCase::new(self.achievement_repo.clone())
    }

    pub fn prompter(&self) -> &dyn Prompter {
        self.prompter.as_ref()
    }

    pub fn memory_storage(&self) -> bool {
        self.config.memory_storage
    }
}
