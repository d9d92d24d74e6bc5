//! Audit collaborator.
//!
//! Every policy decision the service obtains is handed to the audit sink
//! as a value — the core produces the decision, the service notifies the
//! sink, and the sink decides what traceability means (append to a log,
//! ship to a SIEM, drop). The core itself never logs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use tasklite_types::{Action, Role, SubjectId, TodoId};

// ============================================================================
// AuditRecord
// ============================================================================

/// One policy decision, in a form suitable for logging or transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// Who asked.
    pub subject: SubjectId,
    /// The role the subject acted under.
    pub role: Role,
    /// What they asked to do.
    pub action: Action,
    /// The record in question. `None` for Create, where none exists yet.
    pub todo_id: Option<TodoId>,
    /// The outcome.
    pub allowed: bool,
    /// The rendered denial reason; `None` on allow.
    pub reason: Option<String>,
    /// When the decision was made.
    pub at: DateTime<Utc>,
}

// ============================================================================
// AuditSink
// ============================================================================

/// Receives every policy decision the service makes.
pub trait AuditSink {
    fn record(&self, record: AuditRecord);
}

/// Discards all records. The default when traceability is not wired up.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAudit;

impl AuditSink for NoopAudit {
    fn record(&self, _record: AuditRecord) {}
}

/// Collects records in memory. Useful for tests and small embeddings.
#[derive(Debug, Default)]
pub struct MemoryAudit {
    records: Mutex<Vec<AuditRecord>>,
}

impl MemoryAudit {
    pub fn new() -> Self {
        Self::default()
    }

    /// A snapshot of everything recorded so far, in order.
    pub fn snapshot(&self) -> Vec<AuditRecord> {
        self.records.lock().map_or_else(
            |poisoned| poisoned.into_inner().clone(),
            |records| records.clone(),
        )
    }
}

impl AuditSink for MemoryAudit {
    fn record(&self, record: AuditRecord) {
        if let Ok(mut records) = self.records.lock() {
            records.push(record);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(allowed: bool) -> AuditRecord {
        AuditRecord {
            subject: SubjectId::new("u1"),
            role: Role::User,
            action: Action::Delete,
            todo_id: Some(TodoId::new("t1")),
            allowed,
            reason: (!allowed).then(|| "Users can only delete todos in draft status".to_string()),
            at: Utc.with_ymd_and_hms(2026, 3, 4, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn memory_audit_keeps_records_in_order() {
        let audit = MemoryAudit::new();
        audit.record(sample(true));
        audit.record(sample(false));

        let records = audit.snapshot();
        assert_eq!(records.len(), 2);
        assert!(records[0].allowed);
        assert!(!records[1].allowed);
        assert!(records[1].reason.as_deref().unwrap().contains("draft"));
    }

    #[test]
    fn record_serializes_for_transport() {
        let json = serde_json::to_string(&sample(false)).unwrap();
        assert!(json.contains("\"allowed\":false"));
        assert!(json.contains("DELETE"));
    }
}
