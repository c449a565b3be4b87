//! The `UserStore` trait.
//!
//! Implemented by storage backends (e.g. `signup-store-sqlite`). The API
//! and the CLI depend on this abstraction, not on a concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::user::{NewUser, User};

/// Abstraction over the registered-user list.
///
/// Stores only ever receive a [`NewUser`], i.e. a registration that already
/// passed validation. Email addresses are unique, compared without regard
/// to ASCII case.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait UserStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new user; the store assigns the id and registration time.
  fn add_user(
    &self,
    user: NewUser,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  /// Retrieve a user by id. Returns `None` if not found.
  fn get_user(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + '_;

  /// Retrieve the user registered with `email`, if any.
  fn find_by_email<'a>(
    &'a self,
    email: &'a str,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + 'a;

  /// All users, in registration order.
  fn list_users(
    &self,
  ) -> impl Future<Output = Result<Vec<User>, Self::Error>> + Send + '_;

  fn count_users(
    &self,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;
}
