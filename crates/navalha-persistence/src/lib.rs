//! # Navalha Persistence Library
//!
//! Persistence layer for the Navalha salon booking platform.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Application Layer                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Repository Traits                          │
//! │                   (EmployeeRepository)                       │
//! └─────────────────────────────────────────────────────────────┘
//!          │                                      │
//!          ▼                                      ▼
//! ┌─────────────────────────┐   ┌──────────────────────────────┐
//! │     Cache Facade        │   │        PostgreSQL            │
//! │   (fail-open, one of    │   │     (Source of Truth)        │
//! │   Redis / managed REST) │   │                              │
//! └─────────────────────────┘   └──────────────────────────────┘
//! ```
//!
//! The cache facade picks its backend once at startup: a local Redis
//! server in development and test, a managed serverless cache over REST in
//! production. Every cache failure degrades to a miss or a no-op; only
//! database errors propagate to callers.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use navalha_persistence::{
//!     Cache, CacheSettings, PgConfig, PgEmployeeRepository, RedisConfig, connect_pool,
//! };
//!
//! let pool = connect_pool(&PgConfig { url, max_connections: 10 }).await?;
//! let cache = Cache::connect(CacheSettings::Local(RedisConfig::default())).await?;
//!
//! let repo = PgEmployeeRepository::new(pool);
//! let employees = repo.list_all().await?;
//! cache.set("employees", &employees, Duration::from_secs(600)).await;
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod error;
pub mod repository;

// Re-export commonly used types
pub use cache::{Cache, CacheSettings, CacheStore, DEFAULT_TTL, RedisConfig, RestConfig};
pub use error::{PersistenceError, Result};
pub use repository::{EmployeeRepository, PgConfig, PgEmployeeRepository, connect_pool};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
