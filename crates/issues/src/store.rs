//! Unit-of-work seam over issue persistence.
//!
//! A session is a transactional boundary. Writes staged in a session become
//! visible to other sessions only after [`IssueSession::commit`]; a session
//! that is rolled back or simply dropped leaves the store untouched.

use async_trait::async_trait;

use crate::errors::StoreError;
use crate::models::{Issue, NewIssue};

#[async_trait]
pub trait IssueStore: Send + Sync {
    type Session: IssueSession;

    /// Prepares the backend for use. Safe to call on every run.
    async fn init(&self) -> Result<(), StoreError>;

    /// Opens a new unit of work.
    async fn begin(&self) -> Result<Self::Session, StoreError>;
}

#[async_trait]
pub trait IssueSession: Send {
    async fn find_by_ref(&mut self, ref_id: &str) -> Result<Option<Issue>, StoreError>;

    async fn insert(&mut self, issue: &NewIssue) -> Result<(), StoreError>;

    async fn commit(self) -> Result<(), StoreError>;

    async fn rollback(self) -> Result<(), StoreError>;
}
