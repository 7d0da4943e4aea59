// Session auth: sign-up / sign-in / sign-out / restore. Passwords are
// Argon2-hashed in Postgres; sessions are opaque tokens in Redis with a TTL.

pub mod extract;
pub mod handlers;
pub mod password;
pub mod sessions;
