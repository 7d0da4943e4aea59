pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::auth::handlers as auth;
use crate::generation::handlers as generation;
use crate::leads::handlers as leads;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth API
        .route("/api/v1/auth/signup", post(auth::handle_signup))
        .route("/api/v1/auth/signin", post(auth::handle_signin))
        .route("/api/v1/auth/signout", post(auth::handle_signout))
        .route("/api/v1/auth/session", get(auth::handle_session))
        // Generation API
        .route("/api/v1/openers/generate", post(generation::handle_generate))
        // Saved leads API
        .route(
            "/api/v1/leads",
            post(leads::handle_save_lead).get(leads::handle_list_leads),
        )
        .route("/api/v1/leads/:id", delete(leads::handle_delete_lead))
        .with_state(state)
}
