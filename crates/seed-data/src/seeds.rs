//! Baseline issues the seeder guarantees exist.

use issues::{IssueStatus, NewIssue};

/// A fixed seed entry, keyed by `ref_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedIssue {
    pub ref_id: &'static str,
    pub city: &'static str,
    pub area: &'static str,
    pub street: &'static str,
    pub issue_type: &'static str,
    pub description: &'static str,
    pub email: &'static str,
    pub status: IssueStatus,
}

impl SeedIssue {
    /// Builds the insert payload, stamped with the current UTC time.
    pub fn to_new_issue(&self) -> NewIssue {
        NewIssue::new(
            self.ref_id,
            self.city,
            self.area,
            self.street,
            self.issue_type,
            self.description,
            self.email,
        )
        .with_status(self.status)
    }
}

pub const EXAMPLE_ISSUE: SeedIssue = SeedIssue {
    ref_id: "SC-EXAMPLE-0001",
    city: "Metroville",
    area: "Downtown",
    street: "Elm Street",
    issue_type: "Broken Streetlight",
    description: "Lamp not turning on during night",
    email: "citizen@example.com",
    status: IssueStatus::Open,
};

/// Every entry seeded by [`Seeder::seed_all`](crate::db::Seeder::seed_all).
pub const DEFAULT_SEEDS: &[SeedIssue] = &[EXAMPLE_ISSUE];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_seed_refs_are_unique() {
        let refs: HashSet<_> = DEFAULT_SEEDS.iter().map(|s| s.ref_id).collect();
        assert_eq!(refs.len(), DEFAULT_SEEDS.len());
    }

    #[test]
    fn test_to_new_issue_copies_fields() {
        let issue = EXAMPLE_ISSUE.to_new_issue();
        assert_eq!(issue.ref_id, "SC-EXAMPLE-0001");
        assert_eq!(issue.street, "Elm Street");
        assert_eq!(issue.status, IssueStatus::Open);
    }
}
