use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

use crate::errors::StoreError;

/// Lifecycle state of a reported issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueStatus {
    Open,
    Verified,
}

impl IssueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStatus::Open => "open",
            IssueStatus::Verified => "verified",
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueStatus {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(IssueStatus::Open),
            "verified" => Ok(IssueStatus::Verified),
            other => Err(StoreError::InvalidStatus(other.to_string())),
        }
    }
}

impl TryFrom<String> for IssueStatus {
    type Error = StoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A persisted civic issue report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Issue {
    pub id: i64,
    /// Natural key, unique across all issues.
    pub ref_id: String,
    pub city: String,
    pub area: String,
    pub street: String,
    pub issue_type: String,
    pub description: String,
    /// Reporter contact.
    pub email: String,
    #[sqlx(try_from = "String")]
    pub status: IssueStatus,
    pub created_at: OffsetDateTime,
}

/// Insert payload for an issue; the store assigns `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewIssue {
    pub ref_id: String,
    pub city: String,
    pub area: String,
    pub street: String,
    pub issue_type: String,
    pub description: String,
    pub email: String,
    pub status: IssueStatus,
    pub created_at: OffsetDateTime,
}

impl NewIssue {
    /// Creates an open issue stamped with the current UTC time.
    pub fn new(
        ref_id: impl Into<String>,
        city: impl Into<String>,
        area: impl Into<String>,
        street: impl Into<String>,
        issue_type: impl Into<String>,
        description: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            ref_id: ref_id.into(),
            city: city.into(),
            area: area.into(),
            street: street.into(),
            issue_type: issue_type.into(),
            description: description.into(),
            email: email.into(),
            status: IssueStatus::Open,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    pub fn with_status(mut self, status: IssueStatus) -> Self {
        self.status = status;
        self
    }

    /// Materializes the stored form of this payload under the given id.
    pub fn into_issue(self, id: i64) -> Issue {
        Issue {
            id,
            ref_id: self.ref_id,
            city: self.city,
            area: self.area,
            street: self.street,
            issue_type: self.issue_type,
            description: self.description,
            email: self.email,
            status: self.status,
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_text() {
        for status in [IssueStatus::Open, IssueStatus::Verified] {
            assert_eq!(status.as_str().parse::<IssueStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let err = IssueStatus::try_from("closed".to_string()).unwrap_err();
        assert!(matches!(err, StoreError::InvalidStatus(s) if s == "closed"));
    }

    #[test]
    fn test_new_issue_defaults_to_open_now() {
        let before = OffsetDateTime::now_utc();
        let issue = NewIssue::new("REF-1", "City", "Area", "Street", "Pothole", "Deep", "a@b.c");
        let after = OffsetDateTime::now_utc();

        assert_eq!(issue.status, IssueStatus::Open);
        assert!(issue.created_at >= before && issue.created_at <= after);
        assert_eq!(issue.created_at.offset(), time::UtcOffset::UTC);
    }
}
