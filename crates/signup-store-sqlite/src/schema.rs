//! SQL schema for the signup SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- `seq` keeps registration order; `user_id` is the public identity.
CREATE TABLE IF NOT EXISTS users (
    seq         INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id     TEXT NOT NULL UNIQUE,
    created_at  TEXT NOT NULL,   -- RFC 3339 UTC; server-assigned
    last_name   TEXT NOT NULL,
    first_name  TEXT NOT NULL,
    email       TEXT NOT NULL,
    birth_date  TEXT NOT NULL,   -- YYYY-MM-DD
    zip_code    TEXT NOT NULL,
    city        TEXT NOT NULL
);

CREATE UNIQUE INDEX IF NOT EXISTS users_email_idx ON users(email COLLATE NOCASE);

PRAGMA user_version = 1;
";
