//! Where registrations go: a remote signup API or a local SQLite file.

use anyhow::{Context, Result};
use signup_core::{
  FieldErrors,
  registration::EMAIL_TAKEN,
  store::UserStore,
  user::{NewUser, User},
};
use signup_store_sqlite::SqliteStore;
use thiserror::Error;

use crate::client::ApiClient;

/// Why a validated registration was not persisted.
#[derive(Debug, Error)]
pub enum SubmitError {
  #[error("{}", EMAIL_TAKEN)]
  EmailTaken,

  /// The server disagreed with local validation.
  #[error("registration refused")]
  Invalid(FieldErrors),

  #[error("Une erreur réseau est survenue. Veuillez réessayer.")]
  Network(#[source] anyhow::Error),
}

pub enum Backend {
  Remote(ApiClient),
  Local(SqliteStore),
}

impl Backend {
  pub async fn register(&self, user: NewUser) -> Result<User, SubmitError> {
    match self {
      Backend::Remote(client) => client.register(&user).await,
      Backend::Local(store) => store.add_user(user).await.map_err(|e| match e {
        signup_store_sqlite::Error::DuplicateEmail(_) => SubmitError::EmailTaken,
        other => SubmitError::Network(other.into()),
      }),
    }
  }

  pub async fn list_users(&self) -> Result<Vec<User>> {
    match self {
      Backend::Remote(client) => client.list_users().await,
      Backend::Local(store) => store.list_users().await.context("reading local store"),
    }
  }
}
