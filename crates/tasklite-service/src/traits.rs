//! Collaborator traits for the service layer.
//!
//! The service is generic over these so production and test wiring differ
//! only in which implementations get injected.

use chrono::{DateTime, Utc};
use tasklite_types::Subject;

use crate::error::ServiceError;

// ============================================================================
// SessionProvider
// ============================================================================

/// Supplies the current caller's identity and role.
///
/// Tasklite performs no authentication itself: whatever subject this
/// returns is trusted verbatim. Transports typically adapt their session
/// mechanism (cookies, tokens, mTLS identity) behind this trait and
/// resolve it once per request.
pub trait SessionProvider {
    /// The current subject, or `None` when no session exists.
    fn current(&self) -> Option<Subject>;

    /// The current subject, or [`ServiceError::Unauthenticated`].
    fn require(&self) -> Result<Subject, ServiceError> {
        self.current().ok_or(ServiceError::Unauthenticated)
    }
}

/// A provider that always yields the same subject. Useful for tests and
/// single-user embeddings.
#[derive(Debug, Clone)]
pub struct FixedSession(pub Subject);

impl SessionProvider for FixedSession {
    fn current(&self) -> Option<Subject> {
        Some(self.0.clone())
    }
}

/// A provider with no session: every `require` fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSession;

impl SessionProvider for NoSession {
    fn current(&self) -> Option<Subject> {
        None
    }
}

// ============================================================================
// Clock
// ============================================================================

/// Source of timestamps for create/update stamps.
///
/// Injected so the decision path stays deterministic under test; the
/// policy core itself never reads a clock.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a fixed instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tasklite_types::Role;

    #[test]
    fn fixed_session_yields_its_subject() {
        let provider = FixedSession(Subject::new("u1", Role::User));
        let subject = provider.require().unwrap();
        assert_eq!(subject.id.as_str(), "u1");
        assert_eq!(subject.role, Role::User);
    }

    #[test]
    fn no_session_is_unauthenticated() {
        assert!(NoSession.current().is_none());
        assert_eq!(
            NoSession.require().unwrap_err(),
            ServiceError::Unauthenticated
        );
    }

    #[test]
    fn fixed_clock_is_frozen() {
        use chrono::TimeZone;
        let at = Utc.with_ymd_and_hms(2026, 3, 4, 12, 0, 0).unwrap();
        let clock = FixedClock(at);
        assert_eq!(clock.now(), at);
        assert_eq!(clock.now(), clock.now());
    }
}
