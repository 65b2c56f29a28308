//! Activity log repository implementation.
//!
//! The activity log is append-only: this repository exposes `append` and
//! read paths only. No update or delete statement exists for it anywhere
//! in the application.

use sqlx::PgPool;
use uuid::Uuid;

use assetdesk_core::error::{AppError, ErrorKind};
use assetdesk_core::result::AppResult;
use assetdesk_core::types::pagination::{Page, PageRequest};
use assetdesk_entity::audit::{AuditAction, AuditLogEntry, CreateAuditLogEntry};

/// Optional, conjunctive filters for activity log queries.
#[derive(Debug, Clone, Default)]
pub struct ActivityFilter {
    /// Restrict to one acting user.
    pub user_id: Option<Uuid>,
    /// Restrict to one action kind.
    pub action: Option<AuditAction>,
    /// Restrict to one target type.
    pub target_type: Option<String>,
    /// Restrict to one target row.
    pub target_id: Option<Uuid>,
}

/// Repository for activity log entries.
#[derive(Debug, Clone)]
pub struct ActivityLogRepository {
    pool: PgPool,
}

impl ActivityLogRepository {
    /// Create a new activity log repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append one immutable entry.
    ///
    /// The `external_ticket_id` must be non-empty; callers validate this
    /// before reaching the repository and the schema enforces it again.
    pub async fn append(&self, data: &CreateAuditLogEntry) -> AppResult<AuditLogEntry> {
        sqlx::query_as::<_, AuditLogEntry>(
            "INSERT INTO activity_log (user_id, action, target_type, target_id, details, external_ticket_id) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.action)
        .bind(&data.target_type)
        .bind(data.target_id)
        .bind(&data.details)
        .bind(&data.external_ticket_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to append activity entry", e))
    }

    /// Find an entry by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<AuditLogEntry>> {
        sqlx::query_as::<_, AuditLogEntry>("SELECT * FROM activity_log WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find activity entry", e)
            })
    }

    /// Query the activity log with optional filters, newest first.
    ///
    /// All filters are conjunctive. Out-of-range pages return an empty
    /// `data` vector with the correctly computed totals.
    pub async fn query(
        &self,
        filter: &ActivityFilter,
        page: &PageRequest,
    ) -> AppResult<Page<AuditLogEntry>> {
        let mut conditions = Vec::new();
        let mut param_idx = 1u32;

        if filter.user_id.is_some() {
            conditions.push(format!("user_id = ${param_idx}"));
            param_idx += 1;
        }
        if filter.action.is_some() {
            conditions.push(format!("action = ${param_idx}"));
            param_idx += 1;
        }
        if filter.target_type.is_some() {
            conditions.push(format!("target_type = ${param_idx}"));
            param_idx += 1;
        }
        if filter.target_id.is_some() {
            conditions.push(format!("target_id = ${param_idx}"));
            param_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let count_sql = format!("SELECT COUNT(*) FROM activity_log {where_clause}");
        let select_sql = format!(
            "SELECT * FROM activity_log {where_clause} ORDER BY created_at DESC LIMIT ${param_idx} OFFSET ${}",
            param_idx + 1
        );

        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        let mut select_query = sqlx::query_as::<_, AuditLogEntry>(&select_sql);

        if let Some(uid) = filter.user_id {
            count_query = count_query.bind(uid);
            select_query = select_query.bind(uid);
        }
        if let Some(action) = filter.action {
            count_query = count_query.bind(action);
            select_query = select_query.bind(action);
        }
        if let Some(ref tt) = filter.target_type {
            count_query = count_query.bind(tt.clone());
            select_query = select_query.bind(tt.clone());
        }
        if let Some(tid) = filter.target_id {
            count_query = count_query.bind(tid);
            select_query = select_query.bind(tid);
        }

        let total = count_query.fetch_one(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count activity entries", e)
        })?;

        let entries = select_query
            .bind(page.limit as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to query activity log", e)
            })?;

        Ok(Page::new(entries, page, total as u64))
    }
}
