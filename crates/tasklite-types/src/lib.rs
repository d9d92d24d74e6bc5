//! # tasklite-types: Core types for Tasklite
//!
//! This crate contains shared types used across the Tasklite system:
//! - Subject identity ([`SubjectId`], [`Subject`])
//! - Resource identity and record ([`TodoId`], [`Todo`])
//! - The closed policy vocabulary ([`Role`], [`Action`], [`TodoStatus`])
//!
//! All three vocabulary enums are closed sets. Unknown wire values are
//! rejected at parse time with a typed error rather than falling through
//! to an implicit deny somewhere downstream.

use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Entity IDs - Opaque string identifiers
// ============================================================================

/// Unique identifier for a subject (the authenticated caller).
///
/// Opaque: Tasklite never inspects the content. The identity provider is
/// free to use UUIDs, database keys, or anything else that is unique.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SubjectId(String);

impl SubjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SubjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SubjectId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for SubjectId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Unique identifier for a todo record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TodoId(String);

impl TodoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TodoId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TodoId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// ============================================================================
// Role
// ============================================================================

/// Role of a subject in the access control system.
///
/// A closed set of exactly three roles with no hierarchy: each role's
/// permissions are enumerated independently per action by the policy
/// decision point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Regular user.
    ///
    /// Creates todos, and views/updates their own. May delete their own
    /// todos only while still in draft.
    User,

    /// Team lead / supervisor.
    ///
    /// Read-only monitoring access: views every todo, mutates nothing.
    Manager,

    /// System administrator.
    ///
    /// Views and deletes any todo (cleanup/maintenance), but cannot
    /// create or update records.
    Admin,
}

impl Role {
    /// Canonical wire spelling, matching the session provider's role field.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Manager => "MANAGER",
            Role::Admin => "ADMIN",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a role string is not one of the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Role::User),
            "MANAGER" => Ok(Role::Manager),
            "ADMIN" => Ok(Role::Admin),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

// ============================================================================
// Action
// ============================================================================

/// Action a subject requests against a todo record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Create a new todo. The only action decided without a resource.
    Create,
    /// Read an existing todo.
    View,
    /// Modify title, description, or status of an existing todo.
    Update,
    /// Remove an existing todo.
    Delete,
}

impl Action {
    /// Canonical wire spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Create => "CREATE",
            Action::View => "VIEW",
            Action::Update => "UPDATE",
            Action::Delete => "DELETE",
        }
    }

    /// Lowercase verb form, used when composing denial messages.
    pub fn verb(self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::View => "view",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when an action string is not one of the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action: {0}")]
pub struct ParseActionError(pub String);

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREATE" => Ok(Action::Create),
            "VIEW" => Ok(Action::View),
            "UPDATE" => Ok(Action::Update),
            "DELETE" => Ok(Action::Delete),
            other => Err(ParseActionError(other.to_string())),
        }
    }
}

// ============================================================================
// TodoStatus
// ============================================================================

/// Lifecycle stage of a todo record.
///
/// Every todo has exactly one status at all times. Transitions between
/// statuses are validated by `tasklite-lifecycle` before being committed;
/// the single forbidden edge is `Completed -> Draft`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoStatus {
    /// Freshly created, not started. Every todo begins here.
    Draft,
    /// Work has started.
    InProgress,
    /// Work is finished. Cannot go directly back to draft.
    Completed,
}

impl TodoStatus {
    /// Canonical wire spelling, matching the stored status column.
    pub fn as_str(self) -> &'static str {
        match self {
            TodoStatus::Draft => "draft",
            TodoStatus::InProgress => "in_progress",
            TodoStatus::Completed => "completed",
        }
    }

    /// All statuses, in lifecycle order. Handy for exhaustive tests.
    pub const ALL: [TodoStatus; 3] = [
        TodoStatus::Draft,
        TodoStatus::InProgress,
        TodoStatus::Completed,
    ];
}

impl Display for TodoStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a status string is not one of the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status: {0}")]
pub struct ParseStatusError(pub String);

impl FromStr for TodoStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(TodoStatus::Draft),
            "in_progress" => Ok(TodoStatus::InProgress),
            "completed" => Ok(TodoStatus::Completed),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

// ============================================================================
// Todo
// ============================================================================

/// A task record: the single resource type Tasklite governs.
///
/// Ownership is immutable after creation. The descriptive fields (`title`,
/// `description`) are irrelevant to policy; only `owner` and `status` feed
/// access decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    /// The subject that created this todo. Never changes.
    pub owner: SubjectId,
    pub status: TodoStatus,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Creates a new todo record.
    ///
    /// New records always start in [`TodoStatus::Draft`]; there is no way
    /// to construct one in a later lifecycle stage.
    pub fn new(
        id: TodoId,
        owner: SubjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            owner,
            status: TodoStatus::Draft,
            title: title.into(),
            description: description.into(),
            created_at,
            updated_at: created_at,
        }
    }
}

// ============================================================================
// Subject
// ============================================================================

/// The authenticated caller: identity plus role.
///
/// Supplied verbatim by the session collaborator. Tasklite trusts this
/// input and performs no authentication itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub role: Role,
}

impl Subject {
    pub fn new(id: impl Into<SubjectId>, role: Role) -> Self {
        Self {
            id: id.into(),
            role,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
