//! Unified cache front.
//!
//! Callers never see a backend error: reads degrade to a miss, writes and
//! deletes to a no-op, and the failure is logged. The cache is a latency
//! optimization only; Postgres stays authoritative.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

use super::redis_store::{RedisConfig, RedisStore};
use super::rest_store::{RestConfig, RestStore};
use super::store::CacheStore;
use crate::error::Result;

/// Fallback expiry when a caller has no better idea
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

/// Which backend to stand up, decided once from the runtime environment
#[derive(Debug, Clone)]
pub enum CacheSettings {
    /// Local Redis server (development, test)
    Local(RedisConfig),
    /// Managed serverless cache over REST (production)
    Managed(RestConfig),
}

/// Fail-open cache facade over one injected backend
#[derive(Clone)]
pub struct Cache {
    store: Arc<dyn CacheStore>,
}

impl Cache {
    /// Wrap an already-constructed backend. Test seams inject mocks here.
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self { store }
    }

    /// Stand up the backend the settings call for. Runs once at startup;
    /// the choice is fixed for the process lifetime.
    pub async fn connect(settings: CacheSettings) -> Result<Self> {
        let store: Arc<dyn CacheStore> = match settings {
            CacheSettings::Local(config) => Arc::new(RedisStore::connect(&config).await?),
            CacheSettings::Managed(config) => Arc::new(RestStore::new(config)),
        };
        Ok(Self::new(store))
    }

    /// Backend label, for startup logs
    pub fn backend(&self) -> &'static str {
        self.store.name()
    }

    /// Fetch and decode a value. Absent, expired, undecodable and erroring
    /// reads all come back as `None`.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.store.get(key).await {
            Ok(Some(value)) => match serde_json::from_value(value) {
                Ok(parsed) => Some(parsed),
                Err(err) => {
                    warn!(
                        backend = self.store.name(),
                        key,
                        error = %err,
                        "Discarding undecodable cache entry"
                    );
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!(
                    backend = self.store.name(),
                    key,
                    error = %err,
                    "Cache read failed, treating as miss"
                );
                None
            }
        }
    }

    /// Store a value with an expiry. Callers must not rely on the write
    /// landing; a failed set leaves whatever was there before.
    pub async fn set<T: Serialize>(&self, key: &str, value: &T, ttl: Duration) {
        let value = match serde_json::to_value(value) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, error = %err, "Skipping cache write of unserializable value");
                return;
            }
        };

        if let Err(err) = self.store.set(key, &value, ttl).await {
            warn!(
                backend = self.store.name(),
                key,
                error = %err,
                "Cache write failed, skipping"
            );
        }
    }

    /// Remove one key; absent keys and backend failures are both no-ops.
    pub async fn delete(&self, key: &str) {
        if let Err(err) = self.store.delete(key).await {
            warn!(
                backend = self.store.name(),
                key,
                error = %err,
                "Cache delete failed, skipping"
            );
        }
    }

    /// Remove every key matching a glob pattern, best effort.
    pub async fn delete_by_pattern(&self, pattern: &str) {
        if let Err(err) = self.store.delete_pattern(pattern).await {
            warn!(
                backend = self.store.name(),
                pattern,
                error = %err,
                "Cache pattern delete failed, skipping"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PersistenceError;
    use async_trait::async_trait;
    use serde::Deserialize;
    use serde_json::{Value, json};
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::time::Instant;

    /// In-memory store with injectable failures and a real TTL clock.
    struct MemoryStore {
        entries: Mutex<HashMap<String, (Value, Instant)>>,
        fail: AtomicBool,
    }

    impl MemoryStore {
        fn new() -> Self {
            Self {
                entries: Mutex::new(HashMap::new()),
                fail: AtomicBool::new(false),
            }
        }

        fn fail_all(&self) {
            self.fail.store(true, Ordering::SeqCst);
        }

        fn check(&self) -> crate::error::Result<()> {
            if self.fail.load(Ordering::SeqCst) {
                Err(PersistenceError::Redis("injected failure".to_string()))
            } else {
                Ok(())
            }
        }

        fn keys(&self) -> Vec<String> {
            self.entries.lock().unwrap().keys().cloned().collect()
        }
    }

    /// Redis-style glob match, enough for test patterns.
    fn glob_match(pattern: &str, key: &str) -> bool {
        fn matches(p: &[char], k: &[char]) -> bool {
            match p.split_first() {
                None => k.is_empty(),
                Some((&'*', rest)) => (0..=k.len()).any(|i| matches(rest, &k[i..])),
                Some((c, rest)) => k
                    .split_first()
                    .is_some_and(|(kc, krest)| kc == c && matches(rest, krest)),
            }
        }
        let p: Vec<char> = pattern.chars().collect();
        let k: Vec<char> = key.chars().collect();
        matches(&p, &k)
    }

    #[async_trait]
    impl CacheStore for MemoryStore {
        fn name(&self) -> &'static str {
            "memory"
        }

        async fn get(&self, key: &str) -> crate::error::Result<Option<Value>> {
            self.check()?;
            let entries = self.entries.lock().unwrap();
            Ok(entries
                .get(key)
                .filter(|(_, expires)| *expires > Instant::now())
                .map(|(value, _)| value.clone()))
        }

        async fn set(&self, key: &str, value: &Value, ttl: Duration) -> crate::error::Result<()> {
            self.check()?;
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), (value.clone(), Instant::now() + ttl));
            Ok(())
        }

        async fn delete(&self, key: &str) -> crate::error::Result<()> {
            self.check()?;
            self.entries.lock().unwrap().remove(key);
            Ok(())
        }

        async fn delete_pattern(&self, pattern: &str) -> crate::error::Result<()> {
            self.check()?;
            self.entries
                .lock()
                .unwrap()
                .retain(|key, _| !glob_match(pattern, key));
            Ok(())
        }
    }

    fn cache_over(store: &Arc<MemoryStore>) -> Cache {
        Cache::new(Arc::clone(store) as Arc<dyn CacheStore>)
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Payload {
        name: String,
        tags: Vec<String>,
        nested: Option<Box<Payload>>,
    }

    fn sample_payload() -> Payload {
        Payload {
            name: "corte masculino".to_string(),
            tags: vec!["hair".to_string(), "walk-in".to_string()],
            nested: Some(Box::new(Payload {
                name: "barba".to_string(),
                tags: vec![],
                nested: None,
            })),
        }
    }

    #[tokio::test]
    async fn get_on_unknown_key_is_a_miss() {
        let cache = cache_over(&Arc::new(MemoryStore::new()));
        assert_eq!(cache.get::<Vec<String>>("employees").await, None);
    }

    #[tokio::test]
    async fn set_then_get_roundtrips_deeply() {
        let cache = cache_over(&Arc::new(MemoryStore::new()));
        let payload = sample_payload();

        cache.set("employees", &payload, DEFAULT_TTL).await;
        assert_eq!(cache.get::<Payload>("employees").await, Some(payload));
    }

    #[tokio::test]
    async fn delete_removes_the_key() {
        let cache = cache_over(&Arc::new(MemoryStore::new()));

        cache.set("employees", &vec![1, 2, 3], DEFAULT_TTL).await;
        cache.delete("employees").await;
        assert_eq!(cache.get::<Vec<i32>>("employees").await, None);

        // Deleting again is a quiet no-op.
        cache.delete("employees").await;
    }

    #[tokio::test]
    async fn pattern_delete_spares_non_matching_keys() {
        let store = Arc::new(MemoryStore::new());
        let cache = cache_over(&store);

        cache.set("employees", &json!([1]), DEFAULT_TTL).await;
        cache.set("employees:active", &json!([2]), DEFAULT_TTL).await;
        cache.set("services", &json!([3]), DEFAULT_TTL).await;

        cache.delete_by_pattern("employees*").await;

        assert_eq!(store.keys(), vec!["services".to_string()]);
        assert_eq!(cache.get::<Value>("services").await, Some(json!([3])));
    }

    #[tokio::test]
    async fn erroring_backend_reads_as_miss() {
        let store = Arc::new(MemoryStore::new());
        let cache = cache_over(&store);

        cache.set("employees", &json!(["kept"]), DEFAULT_TTL).await;
        store.fail_all();

        assert_eq!(cache.get::<Value>("employees").await, None);
    }

    #[tokio::test]
    async fn erroring_backend_write_leaves_prior_state() {
        let store = Arc::new(MemoryStore::new());
        let cache = cache_over(&store);

        cache.set("employees", &json!(["before"]), DEFAULT_TTL).await;
        store.fail_all();

        // Must not panic, must not clobber the earlier entry.
        cache.set("employees", &json!(["after"]), DEFAULT_TTL).await;
        cache.delete("employees").await;
        cache.delete_by_pattern("employees*").await;

        let entries = store.entries.lock().unwrap();
        assert_eq!(entries.get("employees").unwrap().0, json!(["before"]));
    }

    #[tokio::test(start_paused = true)]
    async fn entries_expire_after_ttl() {
        let cache = cache_over(&Arc::new(MemoryStore::new()));

        cache
            .set("employees", &json!(["a"]), Duration::from_secs(600))
            .await;

        tokio::time::advance(Duration::from_secs(599)).await;
        assert_eq!(cache.get::<Value>("employees").await, Some(json!(["a"])));

        tokio::time::advance(Duration::from_secs(2)).await;
        assert_eq!(cache.get::<Value>("employees").await, None);
    }

    #[tokio::test]
    async fn undecodable_entry_reads_as_miss() {
        let store = Arc::new(MemoryStore::new());
        let cache = cache_over(&store);

        cache.set("employees", &json!({"not": "a list"}), DEFAULT_TTL).await;
        assert_eq!(cache.get::<Vec<i32>>("employees").await, None);
    }

    #[test]
    fn default_ttl_is_one_hour() {
        assert_eq!(DEFAULT_TTL, Duration::from_secs(3600));
    }

    #[test]
    fn glob_matcher_handles_infix_stars() {
        assert!(glob_match("employees*", "employees"));
        assert!(glob_match("employees*", "employees:active"));
        assert!(glob_match("*:active", "employees:active"));
        assert!(glob_match("emp*active", "employees:active"));
        assert!(!glob_match("employees*", "services"));
    }
}
