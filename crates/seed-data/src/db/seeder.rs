//! Database seeding utilities.

use std::fmt;

use issues::{IssueSession, IssueStore, StoreError};
use thiserror::Error;
use tracing::{debug, info};

use crate::seeds::{DEFAULT_SEEDS, EXAMPLE_ISSUE, SeedIssue};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// What a seeding run did for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    Created(String),
    AlreadyPresent(String),
}

impl SeedOutcome {
    pub fn ref_id(&self) -> &str {
        match self {
            SeedOutcome::Created(ref_id) | SeedOutcome::AlreadyPresent(ref_id) => ref_id,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, SeedOutcome::Created(_))
    }
}

/// Renders the console line for one entry.
///
/// The `seed` binary prints these lines to stdout and sends its tracing
/// output to stderr, so stdout carries nothing but outcome lines.
impl fmt::Display for SeedOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedOutcome::Created(ref_id) => write!(f, "Seed created: {ref_id}"),
            SeedOutcome::AlreadyPresent(_) => f.write_str("Seed already present"),
        }
    }
}

/// Seeds baseline issues, skipping any whose `ref_id` already exists.
///
/// Existing rows are never updated: a seed entry whose field values change
/// between releases is left as first written.
pub struct Seeder<S> {
    store: S,
    seeds: Vec<SeedIssue>,
}

impl<S: IssueStore> Seeder<S> {
    /// Creates a seeder over the given store with [`DEFAULT_SEEDS`].
    pub fn new(store: S) -> Self {
        Self {
            store,
            seeds: DEFAULT_SEEDS.to_vec(),
        }
    }

    /// Replaces the entries seeded by [`Seeder::seed_all`].
    pub fn with_seeds(mut self, seeds: impl Into<Vec<SeedIssue>>) -> Self {
        self.seeds = seeds.into();
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Ensures the example issue exists, independent of the configured list.
    pub async fn seed(&self) -> Result<SeedOutcome, SeedError> {
        self.store.init().await?;
        self.seed_issue(&EXAMPLE_ISSUE).await
    }

    /// Ensures every configured seed entry exists, one unit of work each.
    pub async fn seed_all(&self) -> Result<Vec<SeedOutcome>, SeedError> {
        self.store.init().await?;
        info!("Seeding {} issues...", self.seeds.len());

        let mut outcomes = Vec::with_capacity(self.seeds.len());
        for seed in &self.seeds {
            outcomes.push(self.seed_issue(seed).await?);
        }

        let created = outcomes.iter().filter(|o| o.is_created()).count();
        info!("Seeded {} issues ({} already present)", created, outcomes.len() - created);
        Ok(outcomes)
    }

    /// Inserts a single seed entry unless its `ref_id` is already stored.
    ///
    /// The session is released on every path: rolled back when the entry
    /// exists, committed after the insert, and dropped (rolled back) if any
    /// step fails.
    pub async fn seed_issue(&self, seed: &SeedIssue) -> Result<SeedOutcome, SeedError> {
        let mut session = self.store.begin().await?;

        if let Some(existing) = session.find_by_ref(seed.ref_id).await? {
            debug!(
                ref_id = %existing.ref_id,
                status = %existing.status,
                "Seed issue already stored"
            );
            session.rollback().await?;
            return Ok(SeedOutcome::AlreadyPresent(seed.ref_id.to_string()));
        }

        let issue = seed.to_new_issue();
        session.insert(&issue).await?;
        session.commit().await?;

        info!(ref_id = %issue.ref_id, "Created seed issue");
        Ok(SeedOutcome::Created(issue.ref_id))
    }
}
