//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are RFC 3339 strings, birth dates `YYYY-MM-DD`, UUIDs
//! hyphenated lowercase strings.

use chrono::{DateTime, NaiveDate, Utc};
use signup_core::{policy::DATE_FORMAT, user::User};
use uuid::Uuid;

use crate::{Error, Result};

/// Column list shared by every `SELECT` on `users`, in [`RawUser`] order.
pub const USER_COLUMNS: &str =
  "user_id, created_at, last_name, first_name, email, birth_date, zip_code, city";

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── NaiveDate ────────────────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String { d.format(DATE_FORMAT).to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Row type ─────────────────────────────────────────────────────────────────

/// Raw strings read directly from a `users` row.
pub struct RawUser {
  pub user_id:    String,
  pub created_at: String,
  pub last_name:  String,
  pub first_name: String,
  pub email:      String,
  pub birth_date: String,
  pub zip_code:   String,
  pub city:       String,
}

impl RawUser {
  /// Read a row selected with [`USER_COLUMNS`].
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      user_id:    row.get(0)?,
      created_at: row.get(1)?,
      last_name:  row.get(2)?,
      first_name: row.get(3)?,
      email:      row.get(4)?,
      birth_date: row.get(5)?,
      zip_code:   row.get(6)?,
      city:       row.get(7)?,
    })
  }

  pub fn into_user(self) -> Result<User> {
    Ok(User {
      id:         decode_uuid(&self.user_id)?,
      created_at: decode_dt(&self.created_at)?,
      last_name:  self.last_name,
      first_name: self.first_name,
      email:      self.email,
      birth_date: decode_date(&self.birth_date)?,
      zip_code:   self.zip_code,
      city:       self.city,
    })
  }
}
