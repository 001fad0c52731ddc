use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use duckdb::{params, AccessMode, Config, Connection, Row};
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::application::AchievementRepository;
use crate::domain::{
    Achievement, AchievementCategory, AchievementFilter, AchievementId, AchievementSummary,
    ApprovalState, Attachment, DomainError,
};

const FULL_COLUMNS: &str = "id, full_name, registration_number, mobile_number, \
     achievement_category, professor_name, professor_email, \
     user_image_data, user_image_content_type, \
     certificate_data, certificate_content_type, submission_date, approved";

const SUMMARY_COLUMNS: &str = "id, full_name, registration_number, achievement_category, \
     professor_email, submission_date, approved";

/// Achievement collection stored as a DuckDB table `"<database>"."<collection>"`.
pub struct DuckdbAchievementRepository {
    conn: Arc<Mutex<Connection>>,
    table: String,
}

impl DuckdbAchievementRepository {
    pub fn new(db_path: &Path, database: &str, collection: &str) -> Result<Self, DomainError> {
        let conn = Connection::open(db_path).map_err(|e| {
            DomainError::connection(format!(
                "Failed to open DuckDB database {}: {}",
                db_path.display(),
                e
            ))
        })?;
        Self::initialize(conn, database, collection)
    }

    /// Opens an existing database without taking the write lock, so several
    /// readers can run at once. The collection must already exist.
    pub fn new_read_only(
        db_path: &Path,
        database: &str,
        collection: &str,
    ) -> Result<Self, DomainError> {
        let config = Config::default()
            .access_mode(AccessMode::ReadOnly)
            .map_err(|e| DomainError::connection(format!("Invalid DuckDB config: {}", e)))?;
        let conn = Connection::open_with_flags(db_path, config).map_err(|e| {
            DomainError::connection(format!(
                "Failed to open DuckDB database {} read-only: {}",
                db_path.display(),
                e
            ))
        })?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            table: qualified_table(database, collection)?,
        })
    }

    #[allow(dead_code)]
    pub fn in_memory(database: &str, collection: &str) -> Result<Self, DomainError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            DomainError::connection(format!("Failed to open DuckDB in-memory DB: {}", e))
        })?;
        Self::initialize(conn, database, collection)
    }

    fn initialize(conn: Connection, database: &str, collection: &str) -> Result<Self, DomainError> {
        let table = qualified_table(database, collection)?;

        conn.execute_batch(&format!(
            r#"
            CREATE SCHEMA IF NOT EXISTS "{database}";

            CREATE TABLE IF NOT EXISTS {table} (
                id TEXT PRIMARY KEY,
                full_name TEXT NOT NULL,
                registration_number TEXT NOT NULL,
                mobile_number TEXT NOT NULL,
                achievement_category TEXT NOT NULL,
                professor_name TEXT NOT NULL,
                professor_email TEXT NOT NULL,
                user_image_data BLOB NOT NULL,
                user_image_content_type TEXT NOT NULL,
                certificate_data BLOB NOT NULL,
                certificate_content_type TEXT NOT NULL,
                submission_date BIGINT NOT NULL,
                approved BOOLEAN
            );
            "#,
        ))
        .map_err(|e| DomainError::storage(format!("Failed to initialize schema: {}", e)))?;

        debug!("DuckDB achievement collection {} initialized", table);
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            table,
        })
    }

    fn row_to_achievement(row: &Row<'_>) -> duckdb::Result<Achievement> {
        let id: String = row.get(0)?;
        let submitted_ms: i64 = row.get(11)?;
        Ok(Achievement::reconstitute(
            parse_stored_id(&id, 0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            AchievementCategory::from_label(&row.get::<_, String>(4)?),
            row.get(5)?,
            row.get(6)?,
            Attachment::new(row.get::<_, Vec<u8>>(7)?, row.get::<_, String>(8)?),
            Attachment::new(row.get::<_, Vec<u8>>(9)?, row.get::<_, String>(10)?),
            millis_to_datetime(submitted_ms),
            ApprovalState::from_flag(row.get::<_, Option<bool>>(12)?),
        ))
    }

    fn row_to_summary(row: &Row<'_>) -> duckdb::Result<AchievementSummary> {
        let id: String = row.get(0)?;
        let submitted_ms: i64 = row.get(5)?;
        Ok(AchievementSummary {
            id: parse_stored_id(&id, 0)?,
            full_name: row.get(1)?,
            registration_number: row.get(2)?,
            category: AchievementCategory::from_label(&row.get::<_, String>(3)?),
            professor_email: row.get(4)?,
            submission_date: millis_to_datetime(submitted_ms),
            approval: ApprovalState::from_flag(row.get::<_, Option<bool>>(6)?),
        })
    }
}

/// Quotes `database` and `collection` into a table reference, rejecting names
/// that would need escaping.
fn qualified_table(database: &str, collection: &str) -> Result<String, DomainError> {
    for name in [database, collection] {
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(DomainError::invalid_input(format!(
                "Invalid database or collection name '{}': use letters, digits and '_'",
                name
            )));
        }
    }
    Ok(format!("\"{}\".\"{}\"", database, collection))
}

fn parse_stored_id(raw: &str, column: usize) -> duckdb::Result<AchievementId> {
    Uuid::parse_str(raw)
        .map(AchievementId::from)
        .map_err(|e| duckdb::Error::FromSqlConversionFailure(column, duckdb::types::Type::Text, Box::new(e)))
}

fn millis_to_datetime(ms: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(ms).unwrap_or_default()
}

#[async_trait]
impl AchievementRepository for DuckdbAchievementRepository {
    async fn insert(&self, achievement: &Achievement) -> Result<(), DomainError> {
        let conn = self.conn.lock().await;
        let sql = format!(
            "INSERT INTO {} ({}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            self.table, FULL_COLUMNS
        );

        conn.execute(
            &sql,
            params![
                achievement.id().to_string(),
                achievement.full_name(),
                achievement.registration_number(),
                achievement.mobile_number(),
                achievement.category().as_str(),
                achievement.professor_name(),
                achievement.professor_email(),
                achievement.user_image().data(),
                achievement.user_image().content_type(),
                achievement.certificate_proof().data(),
                achievement.certificate_proof().content_type(),
                achievement.submission_date().timestamp_millis(),
                achievement.approval().as_flag(),
            ],
        )
        .map_err(|e| DomainError::storage(format!("Failed to insert achievement: {}", e)))?;

        debug!("Inserted achievement {} into {}", achievement.id(), self.table);
        Ok(())
    }

    async fn find_by_id(&self, id: &AchievementId) -> Result<Option<Achievement>, DomainError> {
        let conn = self.conn.lock().await;
        let sql = format!("SELECT {} FROM {} WHERE id = ?", FULL_COLUMNS, self.table);
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::storage(format!("Failed to prepare statement: {}", e)))?;

        match stmt.query_row(params![id.to_string()], Self::row_to_achievement) {
            Ok(achievement) => Ok(Some(achievement)),
            Err(duckdb::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(DomainError::storage(format!(
                "Failed to query achievement: {}",
                e
            ))),
        }
    }

    async fn list(
        &self,
        filter: &AchievementFilter,
    ) -> Result<Vec<AchievementSummary>, DomainError> {
        let conn = self.conn.lock().await;

        let mut clauses = Vec::new();
        let mut values: Vec<String> = Vec::new();
        if let Some(category) = &filter.category {
            clauses.push("achievement_category = ?");
            values.push(category.as_str().to_string());
        }
        if let Some(email) = &filter.professor_email {
            clauses.push("professor_email = ?");
            values.push(email.clone());
        }
        let where_clause = if clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", clauses.join(" AND "))
        };

        let sql = format!(
            "SELECT {} FROM {}{} ORDER BY submission_date, id",
            SUMMARY_COLUMNS, self.table, where_clause
        );
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::storage(format!("Failed to prepare statement: {}", e)))?;

        let rows = stmt
            .query_map(duckdb::params_from_iter(values.iter()), Self::row_to_summary)
            .map_err(|e| DomainError::storage(format!("Failed to query achievements: {}", e)))?;

        let mut summaries = Vec::new();
        for row in rows {
            summaries
                .push(row.map_err(|e| DomainError::storage(format!("Failed to read row: {}", e)))?);
        }
        Ok(summaries)
    }
}
