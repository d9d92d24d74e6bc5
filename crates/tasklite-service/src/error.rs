//! The tagged result surface every operation resolves to.
//!
//! Transport adapters translate these into status codes (HTTP 401/404/
//! 403/400/500, RPC codes, CLI exit codes); the service itself is
//! transport-agnostic.

use tasklite_abac::DenyReason;
use tasklite_store::StoreError;
use tasklite_types::{TodoId, TodoStatus};
use thiserror::Error;

/// Error type for service operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// No session: the caller's identity is unknown.
    #[error("unauthenticated")]
    Unauthenticated,

    /// The addressed todo does not exist. Checked before any policy
    /// decision, so a denial never masquerades as a missing record.
    #[error("todo not found: {0}")]
    NotFound(TodoId),

    /// The policy denied the request. Carries the PDP's reason verbatim.
    #[error("forbidden: {0}")]
    Forbidden(DenyReason),

    /// The requested status is not reachable from the current one.
    #[error("invalid transition from {from} to {to}")]
    InvalidTransition {
        from: TodoStatus,
        to: TodoStatus,
    },

    /// The input failed validation (empty title, empty patch, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// An invariant the service relies on was broken.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ServiceError::NotFound(id),
            // Ids are minted by the service; a collision means a bug, not
            // a caller mistake.
            StoreError::DuplicateId(id) => {
                ServiceError::Internal(format!("duplicate todo id minted: {id}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasklite_types::Action;

    #[test]
    fn forbidden_renders_the_pdp_reason() {
        let err = ServiceError::Forbidden(DenyReason::NotOwner(Action::View));
        assert_eq!(
            err.to_string(),
            "forbidden: Users can only view their own todos"
        );
    }

    #[test]
    fn invalid_transition_names_both_states() {
        let err = ServiceError::InvalidTransition {
            from: TodoStatus::Completed,
            to: TodoStatus::Draft,
        };
        assert_eq!(err.to_string(), "invalid transition from completed to draft");
    }

    #[test]
    fn store_not_found_maps_to_not_found() {
        let err: ServiceError = StoreError::NotFound(TodoId::new("t9")).into();
        assert_eq!(err, ServiceError::NotFound(TodoId::new("t9")));
    }
}
