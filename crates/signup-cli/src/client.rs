//! Async HTTP client wrapping the signup JSON API.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use signup_core::{
  FieldErrors,
  user::{NewUser, User},
};

use crate::backend::SubmitError;

/// Connection settings for the signup API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// Async HTTP client for the signup JSON REST API.
///
/// Cheap to clone: the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

/// Body of a 422 answer to `POST /users`.
#[derive(Deserialize)]
struct ValidationBody {
  errors: FieldErrors,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!(
      "{}/api{}",
      self.config.base_url.trim_end_matches('/'),
      path
    )
  }

  /// `GET /api/users`
  pub async fn list_users(&self) -> Result<Vec<User>> {
    let resp = self
      .client
      .get(self.url("/users"))
      .send()
      .await
      .context("GET /users failed")?;

    if !resp.status().is_success() {
      return Err(anyhow!("GET /users → {}", resp.status()));
    }
    resp.json().await.context("deserialising users")
  }

  /// `POST /api/users`
  ///
  /// A 400 means the email is already registered; any other failure,
  /// transport errors included, is reported as a network error.
  pub async fn register(&self, user: &NewUser) -> Result<User, SubmitError> {
    let resp = self
      .client
      .post(self.url("/users"))
      .json(user)
      .send()
      .await
      .map_err(|e| SubmitError::Network(anyhow!(e).context("POST /users failed")))?;

    match resp.status() {
      s if s.is_success() => resp
        .json()
        .await
        .map_err(|e| SubmitError::Network(anyhow!(e).context("deserialising user"))),
      StatusCode::BAD_REQUEST => Err(SubmitError::EmailTaken),
      StatusCode::UNPROCESSABLE_ENTITY => {
        let body: ValidationBody = resp
          .json()
          .await
          .map_err(|e| SubmitError::Network(anyhow!(e).context("deserialising errors")))?;
        Err(SubmitError::Invalid(body.errors))
      }
      other => Err(SubmitError::Network(anyhow!("POST /users → {other}"))),
    }
  }
}
