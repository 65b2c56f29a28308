//! Audit recording service.
//!
//! Every tracked mutation funnels through [`AuditRecorder::record`], which
//! enforces the external ticket requirement before the entry reaches the
//! append-only log.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use assetdesk_core::error::AppError;
use assetdesk_core::result::AppResult;
use assetdesk_database::repositories::audit::ActivityLogRepository;
use assetdesk_entity::audit::{AuditAction, AuditLogEntry, CreateAuditLogEntry};

/// Maximum number of characters kept from a content snapshot in audit
/// details.
const SNAPSHOT_LIMIT: usize = 50;

/// Records audit entries for tracked mutations.
#[derive(Debug, Clone)]
pub struct AuditRecorder {
    repo: Arc<ActivityLogRepository>,
}

impl AuditRecorder {
    /// Create a new audit recorder.
    pub fn new(repo: Arc<ActivityLogRepository>) -> Self {
        Self { repo }
    }

    /// Append one audit entry.
    ///
    /// Fails with a validation error when the external ticket ID is blank;
    /// the ticket is never synthesized on behalf of the caller.
    pub async fn record(
        &self,
        user_id: Uuid,
        action: AuditAction,
        target_type: &str,
        target_id: Option<Uuid>,
        details: Option<Value>,
        external_ticket_id: &str,
    ) -> AppResult<AuditLogEntry> {
        validate_ticket(external_ticket_id)?;

        debug!(
            action = %action,
            target_type = %target_type,
            ticket = %external_ticket_id,
            "Recording audit entry"
        );

        self.repo
            .append(&CreateAuditLogEntry {
                user_id,
                action,
                target_type: target_type.to_string(),
                target_id,
                details,
                external_ticket_id: external_ticket_id.trim().to_string(),
            })
            .await
    }
}

/// Reject blank external ticket IDs.
pub fn validate_ticket(external_ticket_id: &str) -> AppResult<()> {
    if external_ticket_id.trim().is_empty() {
        return Err(AppError::validation(
            "An external ticket ID is required for this operation",
        ));
    }
    Ok(())
}

/// Shorten a content snapshot for audit details.
///
/// Keeps at most [`SNAPSHOT_LIMIT`] characters and appends an ellipsis
/// marker when anything was cut. Operates on characters, not bytes, so
/// multi-byte content never splits mid-codepoint.
pub fn truncate_snapshot(content: &str) -> String {
    let mut chars = content.chars();
    let kept: String = chars.by_ref().take(SNAPSHOT_LIMIT).collect();
    if chars.next().is_some() {
        format!("{kept}...")
    } else {
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ticket_accepts_nonempty() {
        assert!(validate_ticket("TICKET-1234").is_ok());
    }

    #[test]
    fn test_validate_ticket_rejects_empty() {
        assert!(validate_ticket("").is_err());
    }

    #[test]
    fn test_validate_ticket_rejects_whitespace() {
        assert!(validate_ticket("   ").is_err());
    }

    #[test]
    fn test_truncate_short_content_unchanged() {
        assert_eq!(truncate_snapshot("broken hinge"), "broken hinge");
    }

    #[test]
    fn test_truncate_exact_limit_unchanged() {
        let content = "x".repeat(50);
        assert_eq!(truncate_snapshot(&content), content);
    }

    #[test]
    fn test_truncate_long_content() {
        let content = "x".repeat(60);
        let snapshot = truncate_snapshot(&content);
        assert_eq!(snapshot.chars().count(), 53);
        assert!(snapshot.ends_with("..."));
    }

    #[test]
    fn test_truncate_multibyte_content() {
        let content = "ü".repeat(60);
        let snapshot = truncate_snapshot(&content);
        assert!(snapshot.ends_with("..."));
        assert_eq!(snapshot.chars().count(), 53);
    }
}
