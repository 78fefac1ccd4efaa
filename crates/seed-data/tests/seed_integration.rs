//! Integration tests for seeding against PostgreSQL.
//!
//! Requires DATABASE_URL; tests are skipped when it is unset or unreachable.
//!
//! Run with: `DATABASE_URL=postgres://... cargo nextest run -p seed-data seed`
//!
//! The example issue is baseline data, so this test leaves it in place. Seeding
//! runs are kept in a single test so two first runs never race on the insert.

use seed_data::prelude::*;
use std::env;

async fn get_test_db() -> Option<Database> {
    let database_url = match env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: DATABASE_URL not set");
            return None;
        }
    };

    match Database::connect(&database_url).await {
        Ok(db) => Some(db),
        Err(e) => {
            eprintln!("Skipping test: Failed to connect to database: {e}");
            None
        }
    }
}

async fn example_count(db: &Database) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM issues WHERE ref_id = $1")
        .bind(EXAMPLE_ISSUE.ref_id)
        .fetch_one(db.pool())
        .await
        .expect("Failed to count example issues")
}

#[tokio::test]
async fn test_seed_twice_leaves_one_example() {
    let Some(db) = get_test_db().await else {
        return;
    };
    let seeder = Seeder::new(db.clone());

    seeder.seed().await.expect("First seed run failed");
    let second = seeder.seed().await.expect("Second seed run failed");

    assert_eq!(second, SeedOutcome::AlreadyPresent("SC-EXAMPLE-0001".to_string()));
    assert_eq!(second.to_string(), "Seed already present");
    assert_eq!(example_count(&db).await, 1);

    let issue = db
        .get_issue_by_ref(EXAMPLE_ISSUE.ref_id)
        .await
        .unwrap()
        .expect("Example issue should exist after seeding");
    assert_eq!(issue.ref_id, "SC-EXAMPLE-0001");
}
