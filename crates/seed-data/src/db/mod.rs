//! Database integration for seeding baseline data.
//!
//! The [`Seeder`] checks each seed entry by its `ref_id` inside its own unit
//! of work and inserts only the entries that are missing.

mod seeder;

pub use seeder::{SeedError, SeedOutcome, Seeder};
