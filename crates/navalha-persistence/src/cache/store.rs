//! Backend-neutral cache store interface.

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

use crate::error::Result;

/// One cache backend: a uniform get/set/delete surface over JSON payloads.
///
/// Implementations report failures as errors; the fail-open policy lives in
/// [`super::Cache`], not here, so tests can observe raw backend behavior.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Backend label used in log output.
    fn name(&self) -> &'static str;

    /// Fetch a value. `Ok(None)` means the key is absent or expired.
    async fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Store a value with an expiry.
    async fn set(&self, key: &str, value: &Value, ttl: Duration) -> Result<()>;

    /// Remove a single key; removing an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<()>;

    /// Remove every key matching a glob pattern.
    async fn delete_pattern(&self, pattern: &str) -> Result<()>;
}
