use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction, postgres::PgPoolOptions};
use tracing::{debug, info};

use crate::errors::StoreError;
use crate::models::{Issue, NewIssue};
use crate::store::{IssueSession, IssueStore};

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects a small pool; seeding and maintenance runs are short-lived.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn get_issue_by_ref(&self, ref_id: &str) -> Result<Option<Issue>, StoreError> {
        let issue = sqlx::query_as(
            r#"
            SELECT id, ref_id, city, area, street, issue_type, description,
                   email, status, created_at
            FROM issues
            WHERE ref_id = $1
            "#,
        )
        .bind(ref_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(issue)
    }

    pub async fn list_issues(&self) -> Result<Vec<Issue>, StoreError> {
        let issues: Vec<Issue> = sqlx::query_as(
            r#"
            SELECT id, ref_id, city, area, street, issue_type, description,
                   email, status, created_at
            FROM issues
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(issues)
    }
}

#[async_trait]
impl IssueStore for Database {
    type Session = PgSession;

    async fn init(&self) -> Result<(), StoreError> {
        MIGRATOR.run(&self.pool).await?;
        info!("Database schema up to date");
        Ok(())
    }

    async fn begin(&self) -> Result<PgSession, StoreError> {
        let tx = self.pool.begin().await?;
        Ok(PgSession { tx })
    }
}

/// A PostgreSQL transaction. Dropping it without committing rolls back.
pub struct PgSession {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl IssueSession for PgSession {
    async fn find_by_ref(&mut self, ref_id: &str) -> Result<Option<Issue>, StoreError> {
        let issue = sqlx::query_as(
            r#"
            SELECT id, ref_id, city, area, street, issue_type, description,
                   email, status, created_at
            FROM issues
            WHERE ref_id = $1
            "#,
        )
        .bind(ref_id)
        .fetch_optional(&mut *self.tx)
        .await?;

        Ok(issue)
    }

    async fn insert(&mut self, issue: &NewIssue) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO issues (ref_id, city, area, street, issue_type, description,
                                email, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(&issue.ref_id)
        .bind(&issue.city)
        .bind(&issue.area)
        .bind(&issue.street)
        .bind(&issue.issue_type)
        .bind(&issue.description)
        .bind(&issue.email)
        .bind(issue.status.as_str())
        .bind(issue.created_at)
        .execute(&mut *self.tx)
        .await;

        match result {
            Ok(_) => {
                debug!(ref_id = %issue.ref_id, "Staged issue insert");
                Ok(())
            }
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(StoreError::DuplicateRef(issue.ref_id.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn commit(self) -> Result<(), StoreError> {
        self.tx.commit().await?;
        Ok(())
    }

    async fn rollback(self) -> Result<(), StoreError> {
        self.tx.rollback().await?;
        Ok(())
    }
}
