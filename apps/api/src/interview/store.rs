//! Session storage: pluggable, trait-based backend for live interview sessions.
//!
//! Default: `InMemorySessionStore` (process memory, lost on restart).
//! Optional: `RedisSessionStore` (JSON values with an expiry), selected by
//! `SESSION_STORE=redis`. `remove` reads and deletes inside one MULTI/EXEC
//! block, so it works on Redis versions without `GETDEL` (< 6.2).
//!
//! `AppState` holds the store as `Arc<dyn SessionStore>` via `InterviewService`.

use std::collections::HashMap;

use async_trait::async_trait;
use redis::Client as RedisClient;
use tokio::sync::RwLock;

use crate::errors::AppError;
use crate::interview::models::Session;

/// Get / put / remove by session id. Implement this to swap persistence
/// without touching the service or handlers.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, id: &str) -> Result<Option<Session>, AppError>;

    /// Inserts or replaces the session stored under `session.id`.
    async fn put(&self, session: Session) -> Result<(), AppError>;

    /// Removes and returns the session, if it existed.
    async fn remove(&self, id: &str) -> Result<Option<Session>, AppError>;

    /// Backend name for startup logging.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// InMemorySessionStore
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, id: &str) -> Result<Option<Session>, AppError> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn put(&self, session: Session) -> Result<(), AppError> {
        self.sessions
            .write()
            .await
            .insert(session.id.clone(), session);
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<Option<Session>, AppError> {
        Ok(self.sessions.write().await.remove(id))
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// RedisSessionStore
// ────────────────────────────────────────────────────────────────────────────

const REDIS_KEY_PREFIX: &str = "interview:session:";

pub struct RedisSessionStore {
    client: RedisClient,
    ttl_secs: u64,
}

impl RedisSessionStore {
    pub fn new(client: RedisClient, ttl_secs: u64) -> Self {
        Self { client, ttl_secs }
    }

    fn key(id: &str) -> String {
        format!("{REDIS_KEY_PREFIX}{id}")
    }

    async fn connection(&self) -> Result<redis::aio::MultiplexedConnection, AppError> {
        Ok(self.client.get_multiplexed_async_connection().await?)
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn get(&self, id: &str) -> Result<Option<Session>, AppError> {
        let mut conn = self.connection().await?;
        let raw: Option<String> = redis::cmd("GET")
            .arg(Self::key(id))
            .query_async(&mut conn)
            .await?;
        raw.map(|json| serde_json::from_str(&json))
            .transpose()
            .map_err(AppError::from)
    }

    async fn put(&self, session: Session) -> Result<(), AppError> {
        let json = serde_json::to_string(&session)?;
        let mut conn = self.connection().await?;
        redis::cmd("SET")
            .arg(Self::key(&session.id))
            .arg(json)
            .arg("EX")
            .arg(self.ttl_secs)
            .query_async::<_, ()>(&mut conn)
            .await?;
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<Option<Session>, AppError> {
        let mut conn = self.connection().await?;
        let key = Self::key(id);
        let (raw,): (Option<String>,) = redis::pipe()
            .atomic()
            .cmd("GET")
            .arg(&key)
            .cmd("DEL")
            .arg(&key)
            .ignore()
            .query_async(&mut conn)
            .await?;
        raw.map(|json| serde_json::from_str(&json))
            .transpose()
            .map_err(AppError::from)
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
