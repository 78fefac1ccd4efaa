//! Issue store for the civic issue tracker.
//!
//! Provides the [`Issue`](models::Issue) model and a unit-of-work seam
//! ([`IssueStore`](store::IssueStore) / [`IssueSession`](store::IssueSession))
//! with a PostgreSQL backend ([`Database`](database::Database)) and an
//! in-memory backend ([`MemoryStore`](memory::MemoryStore)).

pub mod database;
pub mod errors;
pub mod memory;
pub mod models;
pub mod store;

pub use database::Database;
pub use errors::StoreError;
pub use memory::MemoryStore;
pub use models::{Issue, IssueStatus, NewIssue};
pub use store::{IssueSession, IssueStore};
