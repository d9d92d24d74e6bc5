//! # tasklite-lifecycle: Status transition validation
//!
//! Decides whether a requested status is a legal successor to the current
//! one, independent of who is asking — role checks belong to the policy
//! decision point, not here.
//!
//! ## State machine
//!
//! ```text
//! draft ──────────────→ in_progress ──→ completed
//!   ↑                                       │
//!   └───────────────────────────────────────┘ (via in_progress only)
//! ```
//!
//! The graph is fully connected except for one forbidden edge:
//! `completed -> draft`. A finished todo can be reopened to
//! `in_progress`, but never jumps straight back to draft.
//! Self-transitions are always legal.
//!
//! The initial status of a new todo is always `draft`; that rule is
//! enforced at creation time by the service layer, outside this
//! validator.

use tasklite_types::TodoStatus;

/// Returns whether `requested` is a legal successor to `current`.
///
/// Self-transitions (no-op updates) are always legal, including
/// `completed -> completed`; callers need no special case for them.
///
/// Returns a plain bool. Translating `false` into a user-facing
/// "invalid transition from X to Y" message is the caller's job.
pub fn is_valid_transition(current: TodoStatus, requested: TodoStatus) -> bool {
    // The one irreversible edge: completed work cannot silently become a
    // draft again.
    !matches!(
        (current, requested),
        (TodoStatus::Completed, TodoStatus::Draft)
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(TodoStatus::Draft, TodoStatus::Draft, true; "draft to draft")]
    #[test_case(TodoStatus::Draft, TodoStatus::InProgress, true; "draft to in_progress")]
    #[test_case(TodoStatus::Draft, TodoStatus::Completed, true; "draft to completed")]
    #[test_case(TodoStatus::InProgress, TodoStatus::Draft, true; "in_progress to draft")]
    #[test_case(TodoStatus::InProgress, TodoStatus::InProgress, true; "in_progress to in_progress")]
    #[test_case(TodoStatus::InProgress, TodoStatus::Completed, true; "in_progress to completed")]
    #[test_case(TodoStatus::Completed, TodoStatus::Draft, false; "completed to draft is forbidden")]
    #[test_case(TodoStatus::Completed, TodoStatus::InProgress, true; "completed to in_progress")]
    #[test_case(TodoStatus::Completed, TodoStatus::Completed, true; "completed to completed")]
    fn transition_table(current: TodoStatus, requested: TodoStatus, legal: bool) {
        assert_eq!(is_valid_transition(current, requested), legal);
    }

    #[test]
    fn self_transitions_are_always_legal() {
        for status in TodoStatus::ALL {
            assert!(is_valid_transition(status, status));
        }
    }

    #[test]
    fn exactly_one_forbidden_edge() {
        let forbidden: Vec<_> = TodoStatus::ALL
            .into_iter()
            .flat_map(|from| TodoStatus::ALL.into_iter().map(move |to| (from, to)))
            .filter(|&(from, to)| !is_valid_transition(from, to))
            .collect();

        assert_eq!(forbidden, vec![(TodoStatus::Completed, TodoStatus::Draft)]);
    }
}
