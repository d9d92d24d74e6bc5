//! The PDP output type and the closed denial taxonomy.
//!
//! Denial is a normal return value, not exceptional control flow. Every
//! deny carries a [`DenyReason`] whose `Display` output is a stable,
//! human-readable message distinguishing which rule fired; callers map
//! reasons 1:1 to externally visible error detail.

use serde::{Deserialize, Serialize};
use tasklite_types::Action;
use thiserror::Error;

// ============================================================================
// DenyReason
// ============================================================================

/// Why the PDP denied a request.
///
/// A closed taxonomy: each variant corresponds to exactly one row of the
/// decision table, so a reason is enough to reproduce the decision. The
/// `Display` strings are part of the crate's contract — conformance tests
/// assert on substrings of them.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum DenyReason {
    /// The role string supplied at the boundary is not one of the closed set.
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// The action string supplied at the boundary is not one of the closed set.
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// A resource-dependent action was requested without a todo record.
    #[error("A todo record is required to {}", .0.verb())]
    ResourceRequired(Action),

    /// Subject has the User role and does not own the todo.
    #[error("Users can only {} their own todos", .0.verb())]
    NotOwner(Action),

    /// Subject owns the todo, but its status disqualifies deletion.
    #[error("Users can only delete todos in draft status")]
    NotDraft,

    /// Managers have no mutation rights at all.
    #[error("Managers cannot create, update, or delete todos")]
    ManagerReadOnly,

    /// Admins are restricted to viewing and deleting.
    #[error("Admins cannot create or update todos")]
    AdminRestricted,
}

// ============================================================================
// Decision
// ============================================================================

/// The result of a policy decision.
///
/// `reason` is populated if and only if `allowed` is false — an allow
/// never carries a reason, keeping the contract unambiguous for callers
/// and tests. Produced fresh per call, never cached or persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    allowed: bool,
    reason: Option<DenyReason>,
}

impl Decision {
    /// An allow decision. Carries no reason.
    pub fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    /// A deny decision with the rule that fired.
    pub fn deny(reason: DenyReason) -> Self {
        Self {
            allowed: false,
            reason: Some(reason),
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.allowed
    }

    /// The denial reason, if denied.
    pub fn reason(&self) -> Option<&DenyReason> {
        self.reason.as_ref()
    }

    /// The denial message rendered for humans, if denied.
    pub fn reason_text(&self) -> Option<String> {
        self.reason.as_ref().map(ToString::to_string)
    }

    /// Consumes the decision, returning the reason of a deny.
    pub fn into_reason(self) -> Option<DenyReason> {
        self.reason
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_carries_no_reason() {
        let decision = Decision::allow();
        assert!(decision.is_allowed());
        assert!(decision.reason().is_none());
        assert!(decision.reason_text().is_none());
    }

    #[test]
    fn deny_carries_its_reason() {
        let decision = Decision::deny(DenyReason::NotDraft);
        assert!(!decision.is_allowed());
        assert_eq!(decision.reason(), Some(&DenyReason::NotDraft));
    }

    #[test]
    fn reason_messages_are_stable() {
        // These strings are contract: callers assert on substrings.
        assert_eq!(
            DenyReason::UnknownRole("MODERATOR".to_string()).to_string(),
            "Unknown role: MODERATOR"
        );
        assert_eq!(
            DenyReason::UnknownAction("ARCHIVE".to_string()).to_string(),
            "Unknown action: ARCHIVE"
        );
        assert_eq!(
            DenyReason::ResourceRequired(Action::View).to_string(),
            "A todo record is required to view"
        );
        assert_eq!(
            DenyReason::NotOwner(Action::Update).to_string(),
            "Users can only update their own todos"
        );
        assert_eq!(
            DenyReason::NotDraft.to_string(),
            "Users can only delete todos in draft status"
        );
        assert_eq!(
            DenyReason::ManagerReadOnly.to_string(),
            "Managers cannot create, update, or delete todos"
        );
        assert_eq!(
            DenyReason::AdminRestricted.to_string(),
            "Admins cannot create or update todos"
        );
    }

    #[test]
    fn decision_serde_round_trip() {
        let decision = Decision::deny(DenyReason::NotOwner(Action::Delete));
        let json = serde_json::to_string(&decision).unwrap();
        let back: Decision = serde_json::from_str(&json).unwrap();
        assert_eq!(back, decision);
    }
}
