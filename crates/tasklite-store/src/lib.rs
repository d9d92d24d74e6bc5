//! # tasklite-store: Resource store abstraction
//!
//! The narrow persistence boundary between the policy core and whatever
//! actually holds todo records. The core crates never touch storage; the
//! orchestration service drives a [`TodoStore`] implementation and feeds
//! the fetched snapshot into the decision functions.
//!
//! [`InMemoryStore`] is the reference implementation, suitable for tests
//! and single-process embedding. Durable backends implement the same
//! trait.

use std::collections::BTreeMap;

use tasklite_types::{SubjectId, Todo, TodoId};
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

/// Error type for store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No todo with the given id exists.
    ///
    /// Surfaced to callers as a distinct condition before any policy
    /// decision is made — a record must exist to be decided on.
    #[error("todo not found: {0}")]
    NotFound(TodoId),

    /// A todo with the given id already exists.
    #[error("todo id already exists: {0}")]
    DuplicateId(TodoId),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

// ============================================================================
// TodoStore
// ============================================================================

/// Abstraction over the todo record store.
///
/// Implementations supply the current record (by id) before a
/// View/Update/Delete decision and accept writes only after the caller
/// has obtained a positive decision (and, for status changes, a positive
/// transition validation). The trait itself enforces none of that — the
/// orchestration service owns the sequencing.
pub trait TodoStore {
    /// Returns the todo with the given id.
    fn fetch(&self, id: &TodoId) -> Result<Todo>;

    /// Inserts a new todo. Fails if the id is already taken.
    fn insert(&mut self, todo: Todo) -> Result<()>;

    /// Replaces an existing todo. Fails if the id does not exist.
    fn update(&mut self, todo: Todo) -> Result<()>;

    /// Removes and returns the todo with the given id.
    fn remove(&mut self, id: &TodoId) -> Result<Todo>;

    /// Returns all todos.
    fn list(&self) -> Vec<Todo>;

    /// Returns all todos owned by the given subject.
    fn list_owned_by(&self, owner: &SubjectId) -> Vec<Todo>;
}

// ============================================================================
// InMemoryStore
// ============================================================================

/// In-memory store for testing and single-process embedding.
///
/// Ordered by id so listings are deterministic.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    todos: BTreeMap<TodoId, Todo>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}

impl TodoStore for InMemoryStore {
    fn fetch(&self, id: &TodoId) -> Result<Todo> {
        self.todos
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    fn insert(&mut self, todo: Todo) -> Result<()> {
        if self.todos.contains_key(&todo.id) {
            return Err(StoreError::DuplicateId(todo.id));
        }
        self.todos.insert(todo.id.clone(), todo);
        Ok(())
    }

    fn update(&mut self, todo: Todo) -> Result<()> {
        if !self.todos.contains_key(&todo.id) {
            return Err(StoreError::NotFound(todo.id));
        }
        self.todos.insert(todo.id.clone(), todo);
        Ok(())
    }

    fn remove(&mut self, id: &TodoId) -> Result<Todo> {
        self.todos
            .remove(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    fn list(&self) -> Vec<Todo> {
        self.todos.values().cloned().collect()
    }

    fn list_owned_by(&self, owner: &SubjectId) -> Vec<Todo> {
        self.todos
            .values()
            .filter(|todo| todo.owner == *owner)
            .cloned()
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn todo(id: &str, owner: &str) -> Todo {
        let at = Utc.with_ymd_and_hms(2026, 3, 4, 12, 0, 0).unwrap();
        Todo::new(TodoId::new(id), SubjectId::new(owner), "title", "", at)
    }

    #[test]
    fn fetch_returns_inserted_todo() {
        let mut store = InMemoryStore::new();
        store.insert(todo("t1", "u1")).unwrap();

        let fetched = store.fetch(&TodoId::new("t1")).unwrap();
        assert_eq!(fetched.owner, SubjectId::new("u1"));
    }

    #[test]
    fn fetch_missing_is_not_found() {
        let store = InMemoryStore::new();
        let err = store.fetch(&TodoId::new("nope")).unwrap_err();
        assert_eq!(err, StoreError::NotFound(TodoId::new("nope")));
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn insert_rejects_duplicate_id() {
        let mut store = InMemoryStore::new();
        store.insert(todo("t1", "u1")).unwrap();

        let err = store.insert(todo("t1", "u2")).unwrap_err();
        assert_eq!(err, StoreError::DuplicateId(TodoId::new("t1")));
    }

    #[test]
    fn update_rejects_missing_id() {
        let mut store = InMemoryStore::new();
        let err = store.update(todo("ghost", "u1")).unwrap_err();
        assert_eq!(err, StoreError::NotFound(TodoId::new("ghost")));
    }

    #[test]
    fn remove_returns_the_record() {
        let mut store = InMemoryStore::new();
        store.insert(todo("t1", "u1")).unwrap();

        let removed = store.remove(&TodoId::new("t1")).unwrap();
        assert_eq!(removed.id, TodoId::new("t1"));
        assert!(store.is_empty());
        assert!(store.fetch(&TodoId::new("t1")).is_err());
    }

    #[test]
    fn list_owned_by_filters_on_owner() {
        let mut store = InMemoryStore::new();
        store.insert(todo("t1", "u1")).unwrap();
        store.insert(todo("t2", "u2")).unwrap();
        store.insert(todo("t3", "u1")).unwrap();

        let owned = store.list_owned_by(&SubjectId::new("u1"));
        assert_eq!(owned.len(), 2);
        assert!(owned.iter().all(|t| t.owner == SubjectId::new("u1")));

        assert_eq!(store.list().len(), 3);
    }

    #[test]
    fn listing_order_is_deterministic() {
        let mut store = InMemoryStore::new();
        store.insert(todo("b", "u1")).unwrap();
        store.insert(todo("a", "u1")).unwrap();

        let ids: Vec<_> = store.list().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TodoId::new("a"), TodoId::new("b")]);
    }
}
