//! Registered users.
//!
//! A [`NewUser`] only exists once a registration form has passed every
//! rule; a [`User`] is a stored `NewUser` with its identity.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The validated field set handed to a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
  pub last_name:  String,
  pub first_name: String,
  pub email:      String,
  pub birth_date: NaiveDate,
  pub zip_code:   String,
  pub city:       String,
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
  pub id:         Uuid,
  /// Server-assigned registration time.
  pub created_at: DateTime<Utc>,
  pub last_name:  String,
  pub first_name: String,
  pub email:      String,
  pub birth_date: NaiveDate,
  pub zip_code:   String,
  pub city:       String,
}

impl User {
  /// Attach an identity to a validated registration.
  pub fn from_new(id: Uuid, created_at: DateTime<Utc>, new: NewUser) -> Self {
    Self {
      id,
      created_at,
      last_name: new.last_name,
      first_name: new.first_name,
      email: new.email,
      birth_date: new.birth_date,
      zip_code: new.zip_code,
      city: new.city,
    }
  }

  /// "First Last", as shown in user listings.
  pub fn display_name(&self) -> String {
    format!("{} {}", self.first_name, self.last_name)
  }
}

/// The headline of a user listing, e.g. `2 utilisateur(s) inscrit(s)`.
pub fn registered_count_label(count: usize) -> String {
  format!("{count} utilisateur(s) inscrit(s)")
}

#[cfg(test)]
mod tests {
  use super::*;

  fn new_user() -> NewUser {
    NewUser {
      last_name:  "Pradier".into(),
      first_name: "Julien".into(),
      email:      "julien@test.com".into(),
      birth_date: NaiveDate::from_ymd_opt(1999, 7, 11).unwrap(),
      zip_code:   "75001".into(),
      city:       "Paris".into(),
    }
  }

  #[test]
  fn json_uses_form_field_names() {
    let json = serde_json::to_value(new_user()).unwrap();
    assert_eq!(json["lastName"], "Pradier");
    assert_eq!(json["birthDate"], "1999-07-11");
    assert_eq!(json["zipCode"], "75001");
  }

  #[test]
  fn display_name_is_first_then_last() {
    let user = User::from_new(Uuid::nil(), Utc::now(), new_user());
    assert_eq!(user.display_name(), "Julien Pradier");
  }

  #[test]
  fn count_label() {
    assert_eq!(registered_count_label(0), "0 utilisateur(s) inscrit(s)");
    assert_eq!(registered_count_label(3), "3 utilisateur(s) inscrit(s)");
  }
}
