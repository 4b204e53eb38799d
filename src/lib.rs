pub mod application;
pub mod db;
pub mod domain;
pub mod infrastructure;
pub mod schema;

use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub use db::{create_pool, DbPool};
pub use domain::errors::DomainError;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), DomainError> {
    let mut conn = pool.get()?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| DomainError::Persistence(e.to_string()))?;
    log::debug!("applied {} migration(s)", applied.len());
    Ok(())
}
