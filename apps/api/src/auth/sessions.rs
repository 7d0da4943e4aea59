//! Opaque session tokens in Redis: one key per token, value = user id,
//! expiry handled by the key TTL. Not a JWT — sign-out is a plain delete
//! and session restore is a plain lookup.

use redis::{AsyncCommands, Client as RedisClient};
use uuid::Uuid;

use crate::errors::AppError;

fn session_key(token: &str) -> String {
    format!("session:{token}")
}

/// Creates a fresh opaque token for `user_id` and stores it with a TTL.
pub async fn create_session(
    redis: &RedisClient,
    user_id: Uuid,
    ttl_secs: u64,
) -> Result<String, AppError> {
    let token = format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple());
    let mut conn = redis.get_multiplexed_async_connection().await?;
    let _: () = conn
        .set_ex(session_key(&token), user_id.to_string(), ttl_secs)
        .await?;
    Ok(token)
}

/// Resolves a token to its owning user id, or None when missing/expired.
pub async fn lookup_session(
    redis: &RedisClient,
    token: &str,
) -> Result<Option<Uuid>, AppError> {
    let mut conn = redis.get_multiplexed_async_connection().await?;
    let value: Option<String> = conn.get(session_key(token)).await?;
    Ok(value.and_then(|v| Uuid::parse_str(&v).ok()))
}

/// Deletes a token. Deleting an unknown token is not an error.
pub async fn delete_session(redis: &RedisClient, token: &str) -> Result<(), AppError> {
    let mut conn = redis.get_multiplexed_async_connection().await?;
    let _: () = conn.del(session_key(token)).await?;
    Ok(())
}
