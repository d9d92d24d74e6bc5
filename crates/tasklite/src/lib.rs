//! # Tasklite
//!
//! Attribute-based access control over task records, with a validated
//! status lifecycle.
//!
//! Three fixed roles (`USER`, `MANAGER`, `ADMIN`), four actions
//! (`CREATE`, `VIEW`, `UPDATE`, `DELETE`), one resource type (the todo
//! record), and one forbidden lifecycle edge (`completed -> draft`).
//! The decision logic is pure and lives in two leaf crates; everything
//! around it is replaceable glue.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                        Tasklite                            │
//! │                 ┌──────────────────────┐                   │
//! │   session ───→ │     TodoService       │ ───→ audit sink   │
//! │                 │ fetch→decide→commit  │                   │
//! │                 └────┬──────────┬──────┘                   │
//! │                      │          │                          │
//! │                      ▼          ▼                          │
//! │              ┌───────────┐ ┌───────────┐   ┌───────────┐   │
//! │              │   abac    │ │ lifecycle │   │   store   │   │
//! │              │ (PDP)     │ │ (FSM)     │   │ (records) │   │
//! │              └───────────┘ └───────────┘   └───────────┘   │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```
//! use tasklite::{in_memory, NewTodo, Role, Subject, TodoPatch, TodoStatus};
//!
//! let service = in_memory();
//! let alice = Subject::new("alice", Role::User);
//!
//! // Create starts in draft
//! let todo = service.create(Some(&alice), NewTodo {
//!     title: "Write report".to_string(),
//!     description: String::new(),
//! })?;
//! assert_eq!(todo.status, TodoStatus::Draft);
//!
//! // Move it along the lifecycle
//! let todo = service.update(Some(&alice), &todo.id, TodoPatch {
//!     status: Some(TodoStatus::InProgress),
//!     ..TodoPatch::default()
//! })?;
//! assert_eq!(todo.status, TodoStatus::InProgress);
//! # Ok::<(), tasklite::ServiceError>(())
//! ```
//!
//! # Crates
//!
//! - `tasklite-types` — the closed vocabulary and record types
//! - `tasklite-abac` — the policy decision point ([`decide`])
//! - `tasklite-lifecycle` — transition validation ([`is_valid_transition`])
//! - `tasklite-store` — the store boundary ([`TodoStore`], [`InMemoryStore`])
//! - `tasklite-service` — orchestration ([`TodoService`]) and collaborators

// Policy core
pub use tasklite_abac::{Decision, DenyReason, decide, decide_raw};
pub use tasklite_lifecycle::is_valid_transition;

// Types
pub use tasklite_types::{
    Action, Role, Subject, SubjectId, Todo, TodoId, TodoStatus,
};

// Store boundary
pub use tasklite_store::{InMemoryStore, StoreError, TodoStore};

// Orchestration
pub use tasklite_service::{
    AuditRecord, AuditSink, Clock, FixedClock, FixedSession, MemoryAudit, NewTodo, NoSession,
    NoopAudit, ServiceError, SessionProvider, SystemClock, TodoPatch, TodoService,
};

/// The default single-process wiring: in-memory store, system clock,
/// no audit.
pub type InMemoryTodoService = TodoService<InMemoryStore, SystemClock, NoopAudit>;

/// Builds a service over an in-memory store with the system clock and no
/// audit sink. The zero-configuration way to embed Tasklite.
pub fn in_memory() -> InMemoryTodoService {
    TodoService::new(InMemoryStore::new(), SystemClock, NoopAudit)
}
