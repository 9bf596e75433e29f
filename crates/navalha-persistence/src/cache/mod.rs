//! # Cache Module
//!
//! Pluggable cache layer with two interchangeable backends behind one
//! fail-open front:
//!
//! - [`RedisStore`] - a local Redis server over one shared async connection
//! - [`RestStore`] - a managed serverless cache spoken to over HTTP
//!
//! The backend is picked once at startup from [`CacheSettings`]; callers
//! only ever see [`Cache`].

pub mod layer;
pub mod redis_store;
pub mod rest_store;
pub mod store;

pub use layer::{Cache, CacheSettings, DEFAULT_TTL};
pub use redis_store::{RedisConfig, RedisStore};
pub use rest_store::{RestConfig, RestStore};
pub use store::CacheStore;
