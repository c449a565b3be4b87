//! Handlers for `/users` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/users` | All users, registration order |
//! | `POST` | `/users` | Body: [`RegistrationForm`] fields as JSON; 201 + user, 422 + field errors, 400 if the email is taken |
//! | `GET`  | `/users/:id` | 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use signup_core::{
  RegistrationForm,
  registration::EMAIL_TAKEN,
  store::UserStore,
  user::User,
};
use serde_json::Value;
use uuid::Uuid;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /users`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<User>>, ApiError>
where
  S: UserStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let users = store
    .list_users()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(users))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /users/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<User>, ApiError>
where
  S: UserStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let user = store
    .get_user(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("user {id} not found")))?;
  Ok(Json(user))
}

// ─── Register ─────────────────────────────────────────────────────────────────

/// `POST /users`: returns 201 + the stored [`User`].
///
/// The body is read as loose JSON so that a field of the wrong type gets its
/// own message in the 422 map. The form is validated in full before the
/// store sees it. An email already
/// on file is a 400, both when spotted up front and when the store's unique
/// index catches a concurrent registration.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError>
where
  S: UserStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let new_user = RegistrationForm::validate_json(&body).map_err(|errors| {
    tracing::warn!(fields = ?errors.keys().collect::<Vec<_>>(), "registration rejected");
    ApiError::Validation(errors)
  })?;

  if email_taken(store.as_ref(), &new_user.email).await? {
    tracing::warn!(email = %new_user.email, "registration with a known email");
    return Err(ApiError::BadRequest(EMAIL_TAKEN.to_owned()));
  }

  let email = new_user.email.clone();
  let user = match store.add_user(new_user).await {
    Ok(user) => user,
    Err(e) => {
      if email_taken(store.as_ref(), &email).await? {
        tracing::warn!(%email, "registration lost a race on a known email");
        return Err(ApiError::BadRequest(EMAIL_TAKEN.to_owned()));
      }
      return Err(ApiError::Store(Box::new(e)));
    }
  };

  tracing::info!(id = %user.id, "user registered");
  Ok((StatusCode::CREATED, Json(user)))
}

async fn email_taken<S>(store: &S, email: &str) -> Result<bool, ApiError>
where
  S: UserStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Ok(
    store
      .find_by_email(email)
      .await
      .map_err(|e| ApiError::Store(Box::new(e)))?
      .is_some(),
  )
}
