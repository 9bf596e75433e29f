//! Managed serverless cache backend.
//!
//! Speaks the Upstash-compatible REST protocol: every operation is one
//! authenticated POST carrying a single Redis command, and the reply comes
//! back as `{"result": ...}`. There is no connection lifecycle to manage.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;

use super::store::CacheStore;
use crate::error::{PersistenceError, Result};

/// Page size for cursor-based SCAN enumeration
const SCAN_COUNT: usize = 100;

/// Managed cache endpoint configuration
#[derive(Debug, Clone)]
pub struct RestConfig {
    /// REST endpoint base URL
    pub url: String,
    /// Bearer token for the endpoint
    pub token: String,
}

/// Stateless cache backend over a managed REST cache service
pub struct RestStore {
    http: Client,
    config: RestConfig,
}

/// Reply envelope returned by the REST endpoint
#[derive(Debug, Deserialize)]
struct RestReply {
    result: Value,
}

impl RestStore {
    pub fn new(config: RestConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Execute one Redis command against the REST endpoint.
    async fn command(&self, cmd: &Value) -> Result<Value> {
        let reply: RestReply = self
            .http
            .post(&self.config.url)
            .bearer_auth(&self.config.token)
            .json(cmd)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(reply.result)
    }

    /// Split a SCAN reply into its continuation cursor and key page.
    ///
    /// The endpoint replies `[cursor, [key, ...]]`; the cursor arrives as a
    /// string or a number depending on the service revision, `"0"` marks the
    /// end of the enumeration.
    fn parse_scan_reply(reply: &Value) -> Result<(String, Vec<String>)> {
        let parts = reply
            .as_array()
            .filter(|a| a.len() == 2)
            .ok_or_else(|| PersistenceError::Protocol(format!("malformed SCAN reply: {reply}")))?;

        let cursor = match &parts[0] {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            other => {
                return Err(PersistenceError::Protocol(format!(
                    "non-scalar SCAN cursor: {other}"
                )));
            }
        };

        let keys = parts[1]
            .as_array()
            .ok_or_else(|| {
                PersistenceError::Protocol(format!("SCAN page is not an array: {}", parts[1]))
            })?
            .iter()
            .map(|key| {
                key.as_str().map(str::to_owned).ok_or_else(|| {
                    PersistenceError::Protocol(format!("non-string key in SCAN page: {key}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok((cursor, keys))
    }
}

#[async_trait]
impl CacheStore for RestStore {
    fn name(&self) -> &'static str {
        "rest"
    }

    async fn get(&self, key: &str) -> Result<Option<Value>> {
        let result = self.command(&json!(["GET", key])).await?;

        match result {
            Value::Null => Ok(None),
            Value::String(json) if !json.is_empty() => Ok(Some(serde_json::from_str(&json)?)),
            Value::String(_) => Ok(None),
            other => Err(PersistenceError::Protocol(format!(
                "unexpected GET reply: {other}"
            ))),
        }
    }

    async fn set(&self, key: &str, value: &Value, ttl: Duration) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.command(&json!(["SET", key, json, "EX", ttl.as_secs()]))
            .await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.command(&json!(["DEL", key])).await?;
        Ok(())
    }

    async fn delete_pattern(&self, pattern: &str) -> Result<()> {
        let mut cursor = String::from("0");

        loop {
            let reply = self
                .command(&json!(["SCAN", cursor, "MATCH", pattern, "COUNT", SCAN_COUNT]))
                .await?;
            let (next, keys) = Self::parse_scan_reply(&reply)?;

            if !keys.is_empty() {
                let mut cmd = vec![Value::from("DEL")];
                cmd.extend(keys.into_iter().map(Value::from));
                self.command(&Value::Array(cmd)).await?;
            }

            // The enumeration is only finished when the service hands the
            // zero cursor back; stopping after one page would strand keys.
            if next == "0" {
                break;
            }
            cursor = next;
        }

        Ok(())
    }
}
