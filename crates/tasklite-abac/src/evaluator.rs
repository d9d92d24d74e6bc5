//! Policy evaluation.
//!
//! Two entry points:
//! - [`decide`] operates on the closed [`Role`]/[`Action`] enums and is
//!   what the orchestration layer calls.
//! - [`decide_raw`] sits at the stringly boundary (session providers hand
//!   over role strings); unrecognized values deny with a reason naming
//!   the offending input instead of panicking or collapsing into a
//!   generic "forbidden".

use tasklite_types::{Action, Role, SubjectId, Todo, TodoStatus};

use crate::decision::{Decision, DenyReason};

// ============================================================================
// Public API
// ============================================================================

/// Decides whether `subject` (acting as `role`) may perform `action`.
///
/// `todo` must be `Some` for `View`/`Update`/`Delete` — a record has to
/// exist before it can be inspected or mutated — and is ignored for
/// `Create`, where no record exists yet.
///
/// # Postcondition
///
/// Always returns a `Decision`; an allow never carries a reason, a deny
/// always does. Never panics, never logs, never mutates its inputs.
pub fn decide(role: Role, action: Action, todo: Option<&Todo>, subject: &SubjectId) -> Decision {
    match action {
        Action::Create => decide_create(role),
        Action::View | Action::Update | Action::Delete => match todo {
            None => Decision::deny(DenyReason::ResourceRequired(action)),
            Some(todo) => decide_on_record(role, action, todo, subject),
        },
    }
}

/// Decides an access request whose role and action arrive as raw strings.
///
/// The role is resolved first, then the action; the first unrecognized
/// value short-circuits into the corresponding deny so diagnostics can
/// tell the two apart.
pub fn decide_raw(role: &str, action: &str, todo: Option<&Todo>, subject: &SubjectId) -> Decision {
    let Ok(role) = role.parse::<Role>() else {
        return Decision::deny(DenyReason::UnknownRole(role.to_string()));
    };
    let Ok(action) = action.parse::<Action>() else {
        return Decision::deny(DenyReason::UnknownAction(action.to_string()));
    };
    decide(role, action, todo, subject)
}

// ============================================================================
// Decision table
// ============================================================================

/// CREATE column: only regular users create todos.
fn decide_create(role: Role) -> Decision {
    match role {
        Role::User => Decision::allow(),
        Role::Manager => Decision::deny(DenyReason::ManagerReadOnly),
        Role::Admin => Decision::deny(DenyReason::AdminRestricted),
    }
}

/// VIEW/UPDATE/DELETE columns, with the record's attributes in hand.
fn decide_on_record(role: Role, action: Action, todo: &Todo, subject: &SubjectId) -> Decision {
    match (role, action) {
        // Users act on their own records. DELETE additionally requires
        // the record to still be a draft.
        (Role::User, Action::View | Action::Update) => {
            if todo.owner == *subject {
                Decision::allow()
            } else {
                Decision::deny(DenyReason::NotOwner(action))
            }
        }
        (Role::User, Action::Delete) => {
            if todo.owner != *subject {
                Decision::deny(DenyReason::NotOwner(action))
            } else if todo.status != TodoStatus::Draft {
                Decision::deny(DenyReason::NotDraft)
            } else {
                Decision::allow()
            }
        }

        // Managers monitor: read anything, mutate nothing.
        (Role::Manager, Action::View) => Decision::allow(),
        (Role::Manager, Action::Update | Action::Delete) => {
            Decision::deny(DenyReason::ManagerReadOnly)
        }

        // Admins clean up: view and delete anything, write nothing.
        (Role::Admin, Action::View | Action::Delete) => Decision::allow(),
        (Role::Admin, Action::Update) => Decision::deny(DenyReason::AdminRestricted),

        // Create never reaches here; `decide` routes it before fetching
        // record attributes.
        (_, Action::Create) => decide_create(role),
    }
}

// ============================================================================
// Tests
// ============================================================================
