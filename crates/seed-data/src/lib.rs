//! Baseline seed data for the civic issue tracker.
//!
//! Ensures a fixed set of example issues exists in the issue store without
//! duplicating them on repeated runs.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let db = Database::connect(&SeedConfig::from_env().database_url).await?;
//! run(&Seeder::new(db), &mut std::io::stdout()).await?;
//! ```

pub mod config;
pub mod db;
pub mod seeds;

use std::io::Write;

pub use issues::{Database, IssueStatus, MemoryStore};

use crate::db::{SeedError, SeedOutcome, Seeder};
use issues::IssueStore;

/// Seeds every configured entry and writes one outcome line per entry.
pub async fn run<S: IssueStore>(
    seeder: &Seeder<S>,
    out: &mut impl Write,
) -> Result<Vec<SeedOutcome>, SeedError> {
    let outcomes = seeder.seed_all().await?;
    for outcome in &outcomes {
        writeln!(out, "{outcome}")?;
    }
    Ok(outcomes)
}

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::SeedConfig;
    pub use crate::db::{SeedError, SeedOutcome, Seeder};
    pub use crate::seeds::{DEFAULT_SEEDS, EXAMPLE_ISSUE, SeedIssue};
    pub use crate::{Database, IssueStatus, MemoryStore, run};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeds::{EXAMPLE_ISSUE, SeedIssue};

    #[tokio::test]
    async fn test_run_prints_single_line_for_default_seeds() {
        let seeder = Seeder::new(MemoryStore::new());
        let mut out = Vec::new();

        run(&seeder, &mut out).await.unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Seed created: SC-EXAMPLE-0001\n");

        let mut out = Vec::new();
        run(&seeder, &mut out).await.unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Seed already present\n");
    }

    #[tokio::test]
    async fn test_run_seeds_extended_list() {
        let extra = SeedIssue {
            ref_id: "SC-EXAMPLE-0002",
            ..EXAMPLE_ISSUE
        };
        let store = MemoryStore::new();
        let seeder = Seeder::new(store.clone()).with_seeds(vec![EXAMPLE_ISSUE, extra]);
        let mut out = Vec::new();

        run(&seeder, &mut out).await.unwrap();

        let refs: Vec<_> = store.issues().into_iter().map(|i| i.ref_id).collect();
        assert_eq!(refs, vec!["SC-EXAMPLE-0001", "SC-EXAMPLE-0002"]);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Seed created: SC-EXAMPLE-0001\nSeed created: SC-EXAMPLE-0002\n"
        );
    }
}
