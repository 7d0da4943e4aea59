use redis::Client as RedisClient;
use sqlx::PgPool;

use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Redis holds opaque session tokens with a TTL (see `auth::sessions`).
    pub redis: RedisClient,
    pub llm: LlmClient,
    pub config: Config,
}
