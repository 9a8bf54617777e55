//! # jot-db
//!
//! PostgreSQL database layer for jot.
//!
//! This crate provides:
//! - Connection pool management
//! - Repository implementations for notes and tags
//! - Startup schema migrations
//!
//! ## Example
//!
//! ```rust,ignore
//! use jot_db::Database;
//! use jot_core::{CreateNote, NoteRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("postgres://localhost/jot").await?;
//!     db.migrate().await?;
//!
//!     let note = db.notes.insert("alice", CreateNote {
//!         title: None,
//!         text: "Hello, world!".to_string(),
//!         tags: vec!["greeting".to_string()],
//!     }).await?;
//!
//!     println!("Created note: {}", note.id);
//!     Ok(())
//! }
//! ```

pub mod notes;
pub mod pool;
pub mod tags;

// Test fixtures are always compiled so integration tests (in tests/) can
// use them against a locally running database.
pub mod test_fixtures;

pub use notes::PgNoteRepository;
pub use pool::{create_pool, create_pool_lazy, create_pool_with_config, PoolConfig};
pub use tags::PgTagRepository;

// Re-export core types
pub use jot_core::*;

/// Main database facade providing access to all repositories.
#[derive(Clone)]
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::PgPool,
    /// Note repository for CRUD and archive transitions.
    pub notes: PgNoteRepository,
    /// Tag repository for global tag management.
    pub tags: PgTagRepository,
}

impl Database {
    /// Create a new Database instance from a connection pool.
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self {
            notes: PgNoteRepository::new(pool.clone()),
            tags: PgTagRepository::new(pool.clone()),
            pool,
        }
    }

    /// Create a new Database instance by connecting to the given URL.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = create_pool(url).await?;
        Ok(Self::new(pool))
    }

    /// Create with custom pool configuration.
    pub async fn connect_with_config(url: &str, config: PoolConfig) -> Result<Self> {
        let pool = create_pool_with_config(url, config).await?;
        Ok(Self::new(pool))
    }

    /// Create without connecting; connections open on first use.
    pub fn connect_lazy(url: &str) -> Result<Self> {
        let pool = create_pool_lazy(url)?;
        Ok(Self::new(pool))
    }

    /// Run pending schema migrations.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| Error::Database(sqlx::Error::Migrate(Box::new(e))))?;
        Ok(())
    }

    /// Check database connectivity with a trivial round trip.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(())
    }
}
