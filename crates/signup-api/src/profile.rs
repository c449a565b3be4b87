//! Handler for `POST /profile/check`.
//!
//! Runs the aggregate profile check over any JSON body. The answer is a bare
//! boolean; field-level messages come from `POST /users`.

use axum::Json;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct CheckResponse {
  pub valid: bool,
}

/// `POST /profile/check`: body: `{"name":…,"email":…,"zipCode":…,"birthDate":"YYYY-MM-DD"}`
pub async fn check(Json(body): Json<Value>) -> Json<CheckResponse> {
  Json(CheckResponse { valid: signup_core::is_valid_profile(&body) })
}
