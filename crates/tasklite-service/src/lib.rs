//! # tasklite-service: Orchestration around the policy core
//!
//! The thin caller the spec'd core is composed by. For every operation it
//! runs the same sequence:
//!
//! ```text
//! session ──→ fetch ──→ decide (PDP) ──→ validate transition ──→ commit
//!   401        404         403                 400
//! ```
//!
//! The service owns the sequencing and the I/O boundary; all actual
//! decisions live in `tasklite-abac` and `tasklite-lifecycle`, which stay
//! pure. Collaborators are injected:
//!
//! - [`SessionProvider`] — who is calling (identity + role), trusted verbatim
//! - [`Clock`] — timestamps for create/update stamps
//! - [`AuditSink`] — receives one [`AuditRecord`] per policy decision
//! - `TodoStore` (from `tasklite-store`) — fetch/commit todo records
//!
//! The fetch, the decision, and the commit all happen under one store
//! lock, so the attributes the policy saw are the attributes the write
//! applies to — no check-then-act window.

pub mod audit;
pub mod error;
pub mod service;
pub mod traits;

pub use audit::{AuditRecord, AuditSink, MemoryAudit, NoopAudit};
pub use error::ServiceError;
pub use service::{NewTodo, TodoPatch, TodoService};
pub use traits::{Clock, FixedClock, FixedSession, NoSession, SessionProvider, SystemClock};
