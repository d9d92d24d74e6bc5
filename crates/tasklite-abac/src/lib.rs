//! # tasklite-abac: Attribute-Based Access Control
//!
//! The policy decision point (PDP) for Tasklite. Decides whether a subject
//! may perform an action on a todo record, based on the subject's role and
//! the record's attributes (owner, status).
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Access Request                              │
//! │  (Role + Action + Todo attributes + Subject) │
//! └─────────────────┬───────────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────────┐
//! │  decide / decide_raw                         │
//! │  ├─ Resolve role × action cell               │
//! │  ├─ Check ownership / status attributes      │
//! │  └─ Return Allow or Deny + reason            │
//! └─────────────────┬───────────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────────┐
//! │  Decision                                    │
//! │  - allowed: bool                             │
//! │  - reason: DenyReason (deny only)            │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Permission matrix
//!
//! | Role    | CREATE | VIEW       | UPDATE     | DELETE                |
//! |---------|--------|------------|------------|-----------------------|
//! | User    | ✓      | own only   | own only   | own + draft only      |
//! | Manager | ✗      | ✓ (any)    | ✗          | ✗                     |
//! | Admin   | ✗      | ✓ (any)    | ✗          | ✓ (any owner/status)  |
//!
//! ## Examples
//!
//! ```
//! use tasklite_abac::decide;
//! use tasklite_types::{Action, Role, SubjectId, Todo, TodoId};
//! use chrono::Utc;
//!
//! let owner = SubjectId::new("u1");
//! let todo = Todo::new(TodoId::new("t1"), owner.clone(), "Buy groceries", "", Utc::now());
//!
//! let decision = decide(Role::User, Action::View, Some(&todo), &owner);
//! assert!(decision.is_allowed());
//!
//! let stranger = SubjectId::new("u2");
//! let decision = decide(Role::User, Action::View, Some(&todo), &stranger);
//! assert!(!decision.is_allowed());
//! ```
//!
//! The PDP is pure: no I/O, no logging, no hidden state. Identical inputs
//! always yield identical decisions, so it is safe to call from any number
//! of threads without synchronization.

pub mod decision;
pub mod evaluator;

// Kani proofs for bounded model checking
#[cfg(any(test, kani))]
mod kani_proofs;

pub use decision::{Decision, DenyReason};
pub use evaluator::{decide, decide_raw};
