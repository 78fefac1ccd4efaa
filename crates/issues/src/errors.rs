use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid issue status: {0}")]
    InvalidStatus(String),

    #[error("Issue with ref_id {0} already exists")]
    DuplicateRef(String),
}
