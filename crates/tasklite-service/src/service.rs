//! The orchestration service.
//!
//! Sequences every operation as fetch → decide → validate → commit, with
//! the store held under one lock for the whole sequence so the snapshot
//! the policy saw is the snapshot the write applies to.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use tasklite_abac::{Decision, decide};
use tasklite_lifecycle::is_valid_transition;
use tasklite_store::TodoStore;
use tasklite_types::{Action, Role, Subject, Todo, TodoId, TodoStatus};

use crate::audit::{AuditRecord, AuditSink};
use crate::error::ServiceError;
use crate::traits::Clock;

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;

// ============================================================================
// Inputs
// ============================================================================

/// Input for creating a todo. Status is not an input: new records always
/// start in draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Partial update for a todo. Absent fields are left untouched; the owner
/// and the timestamps are never caller-writable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TodoStatus>,
}

impl TodoPatch {
    /// True when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none()
    }
}

// ============================================================================
// TodoService
// ============================================================================

/// Orchestrates todo operations: resolves the caller, fetches the record,
/// asks the policy core, validates lifecycle transitions, and commits.
///
/// Generic over store, clock, and audit sink to enable both production
/// and test wiring.
pub struct TodoService<S, C, A>
where
    S: TodoStore,
    C: Clock,
    A: AuditSink,
{
    store: Mutex<S>,
    clock: C,
    audit: A,
    next_id: AtomicU64,
    /// Whether to emit tracing events for decisions.
    log_enabled: bool,
}

impl<S, C, A> TodoService<S, C, A>
where
    S: TodoStore,
    C: Clock,
    A: AuditSink,
{
    /// Creates a new service over the given collaborators.
    pub fn new(store: S, clock: C, audit: A) -> Self {
        Self {
            store: Mutex::new(store),
            clock,
            audit,
            next_id: AtomicU64::new(0),
            log_enabled: true,
        }
    }

    /// Disables tracing output (for tests). Audit records still flow.
    pub fn without_logging(mut self) -> Self {
        self.log_enabled = false;
        self
    }

    /// The audit sink, for embedders that want to inspect or drain it.
    pub fn audit(&self) -> &A {
        &self.audit
    }

    // ------------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------------

    /// Creates a todo owned by the caller. New records start in draft.
    pub fn create(&self, session: Option<&Subject>, input: NewTodo) -> Result<Todo> {
        let subject = session.ok_or(ServiceError::Unauthenticated)?;

        self.check(subject, Action::Create, None)?;

        let title = input.title.trim();
        if title.is_empty() {
            return Err(ServiceError::Validation(
                "title is required and must be non-empty".to_string(),
            ));
        }

        let now = self.clock.now();
        let todo = Todo::new(
            self.mint_id(),
            subject.id.clone(),
            title,
            input.description.trim(),
            now,
        );

        let mut store = self.lock_store()?;
        store.insert(todo.clone())?;

        if self.log_enabled {
            info!(subject = %subject.id, todo = %todo.id, "todo created");
        }

        Ok(todo)
    }

    /// Returns a single todo, if it exists and the caller may view it.
    pub fn get(&self, session: Option<&Subject>, id: &TodoId) -> Result<Todo> {
        let subject = session.ok_or(ServiceError::Unauthenticated)?;

        let store = self.lock_store()?;
        // Existence first: a record must exist to be decided on.
        let todo = store.fetch(id)?;
        self.check(subject, Action::View, Some(&todo))?;

        Ok(todo)
    }

    /// Lists todos visible to the caller: users see their own, managers
    /// and admins see everything.
    pub fn list(&self, session: Option<&Subject>) -> Result<Vec<Todo>> {
        let subject = session.ok_or(ServiceError::Unauthenticated)?;

        let store = self.lock_store()?;
        let todos = match subject.role {
            Role::User => store.list_owned_by(&subject.id),
            Role::Manager | Role::Admin => store.list(),
        };

        Ok(todos)
    }

    /// Applies a partial update to a todo.
    ///
    /// A status change must additionally be a legal lifecycle transition
    /// from the record's current status. Owner and `created_at` never
    /// change; `updated_at` is refreshed on commit.
    pub fn update(&self, session: Option<&Subject>, id: &TodoId, patch: TodoPatch) -> Result<Todo> {
        let subject = session.ok_or(ServiceError::Unauthenticated)?;

        let mut store = self.lock_store()?;
        let mut todo = store.fetch(id)?;
        self.check(subject, Action::Update, Some(&todo))?;

        if patch.is_empty() {
            return Err(ServiceError::Validation("no fields to update".to_string()));
        }

        if let Some(requested) = patch.status {
            if !is_valid_transition(todo.status, requested) {
                return Err(ServiceError::InvalidTransition {
                    from: todo.status,
                    to: requested,
                });
            }
            todo.status = requested;
        }
        if let Some(title) = patch.title {
            todo.title = title;
        }
        if let Some(description) = patch.description {
            todo.description = description;
        }
        todo.updated_at = self.clock.now();

        store.update(todo.clone())?;

        if self.log_enabled {
            info!(subject = %subject.id, todo = %todo.id, status = %todo.status, "todo updated");
        }

        Ok(todo)
    }

    /// Deletes a todo and returns the removed record.
    pub fn delete(&self, session: Option<&Subject>, id: &TodoId) -> Result<Todo> {
        let subject = session.ok_or(ServiceError::Unauthenticated)?;

        let mut store = self.lock_store()?;
        let todo = store.fetch(id)?;
        self.check(subject, Action::Delete, Some(&todo))?;

        let removed = store.remove(id)?;

        if self.log_enabled {
            info!(subject = %subject.id, todo = %removed.id, "todo deleted");
        }

        Ok(removed)
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    /// Asks the PDP, notifies the audit sink, and maps a deny to
    /// [`ServiceError::Forbidden`].
    fn check(&self, subject: &Subject, action: Action, todo: Option<&Todo>) -> Result<()> {
        let decision = decide(subject.role, action, todo, &subject.id);
        self.notify(subject, action, todo.map(|t| &t.id), &decision);

        match decision.into_reason() {
            None => Ok(()),
            Some(reason) => Err(ServiceError::Forbidden(reason)),
        }
    }

    /// Hands the decision to the audit sink and mirrors it to tracing.
    fn notify(&self, subject: &Subject, action: Action, todo_id: Option<&TodoId>, decision: &Decision) {
        if self.log_enabled {
            if decision.is_allowed() {
                info!(
                    subject = %subject.id,
                    role = %subject.role,
                    action = %action,
                    todo = ?todo_id.map(TodoId::as_str),
                    "access granted"
                );
            } else {
                warn!(
                    subject = %subject.id,
                    role = %subject.role,
                    action = %action,
                    todo = ?todo_id.map(TodoId::as_str),
                    reason = decision.reason_text().as_deref().unwrap_or(""),
                    "access denied"
                );
            }
        }

        self.audit.record(AuditRecord {
            subject: subject.id.clone(),
            role: subject.role,
            action,
            todo_id: todo_id.cloned(),
            allowed: decision.is_allowed(),
            reason: decision.reason_text(),
            at: self.clock.now(),
        });
    }

    fn mint_id(&self) -> TodoId {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        TodoId::new(format!("todo-{n}"))
    }

    fn lock_store(&self) -> Result<std::sync::MutexGuard<'_, S>> {
        self.store
            .lock()
            .map_err(|_| ServiceError::Internal("todo store lock poisoned".to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================
