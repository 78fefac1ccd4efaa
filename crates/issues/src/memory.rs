//! In-memory issue store.
//!
//! Mirrors the PostgreSQL backend's session semantics: inserts are staged
//! per session and published on commit, and the `ref_id` uniqueness
//! constraint is checked against committed issues at commit time.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::errors::StoreError;
use crate::models::{Issue, NewIssue};
use crate::store::{IssueSession, IssueStore};

#[derive(Debug, Default)]
struct MemoryInner {
    issues: BTreeMap<String, Issue>,
    next_id: i64,
}

impl MemoryInner {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with committed issues.
    pub fn with_issues(issues: impl IntoIterator<Item = NewIssue>) -> Result<Self, StoreError> {
        let store = Self::new();
        {
            let mut inner = store.lock();
            for issue in issues {
                if inner.issues.contains_key(&issue.ref_id) {
                    return Err(StoreError::DuplicateRef(issue.ref_id));
                }
                let id = inner.allocate_id();
                inner.issues.insert(issue.ref_id.clone(), issue.into_issue(id));
            }
        }
        Ok(store)
    }

    /// Snapshot of committed issues in insertion order.
    pub fn issues(&self) -> Vec<Issue> {
        let mut issues: Vec<Issue> = self.lock().issues.values().cloned().collect();
        issues.sort_by_key(|issue| issue.id);
        issues
    }

    pub fn get(&self, ref_id: &str) -> Option<Issue> {
        self.lock().issues.get(ref_id).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryInner> {
        // A panic while holding the lock cannot leave a half-written map:
        // every mutation is a single insert.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl IssueStore for MemoryStore {
    type Session = MemorySession;

    async fn init(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn begin(&self) -> Result<MemorySession, StoreError> {
        Ok(MemorySession {
            store: self.clone(),
            staged: Vec::new(),
        })
    }
}

/// Staged writes against a [`MemoryStore`]. Dropping discards them.
///
/// Ids are allocated when a row is staged, like a `BIGSERIAL` default, so a
/// rolled-back insert leaves a gap in the sequence.
pub struct MemorySession {
    store: MemoryStore,
    staged: Vec<Issue>,
}

#[async_trait]
impl IssueSession for MemorySession {
    async fn find_by_ref(&mut self, ref_id: &str) -> Result<Option<Issue>, StoreError> {
        if let Some(issue) = self.store.get(ref_id) {
            return Ok(Some(issue));
        }
        // Own staged writes are visible inside the session.
        Ok(self
            .staged
            .iter()
            .find(|issue| issue.ref_id == ref_id)
            .cloned())
    }

    async fn insert(&mut self, issue: &NewIssue) -> Result<(), StoreError> {
        if self.staged.iter().any(|staged| staged.ref_id == issue.ref_id) {
            return Err(StoreError::DuplicateRef(issue.ref_id.clone()));
        }
        let id = self.store.lock().allocate_id();
        debug!(ref_id = %issue.ref_id, id, "Staged issue insert");
        self.staged.push(issue.clone().into_issue(id));
        Ok(())
    }

    async fn commit(self) -> Result<(), StoreError> {
        let mut inner = self.store.lock();
        if let Some(dup) = self
            .staged
            .iter()
            .find(|issue| inner.issues.contains_key(&issue.ref_id))
        {
            return Err(StoreError::DuplicateRef(dup.ref_id.clone()));
        }
        for issue in self.staged {
            inner.issues.insert(issue.ref_id.clone(), issue);
        }
        Ok(())
    }

    async fn rollback(self) -> Result<(), StoreError> {
        Ok(())
    }
}
