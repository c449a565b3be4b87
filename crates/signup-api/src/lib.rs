//! JSON REST API for signup.
//!
//! Exposes an axum [`Router`] backed by any [`signup_core::store::UserStore`].
//! TLS and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", signup_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod profile;
pub mod users;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use signup_core::store::UserStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: UserStore + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/users", get(users::list::<S>).post(users::create::<S>))
    .route("/users/{id}", get(users::get_one::<S>))
    .route("/profile/check", post(profile::check))
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
