//! Validation rules and domain types for signup.
//!
//! The rules are pure functions: they read their input (and, for dates,
//! "today") and return `Ok(())` or the first violated constraint. This
//! crate has no HTTP or database dependencies; the other crates depend on
//! it.

pub mod age;
pub mod error;
pub mod policy;
pub mod profile;
pub mod registration;
pub mod rules;
pub mod store;
pub mod user;
pub mod value;

pub use age::{calculate_age, calculate_age_on, is_valid_age, is_valid_age_on};
pub use error::{AgeError, EmailError, Error, NameError, Result, ZipCodeError};
pub use profile::{is_valid_profile, is_valid_profile_on};
pub use registration::{Field, FieldErrors, RegistrationForm};
pub use rules::{is_valid_email, is_valid_name, is_valid_zip_code};
pub use value::{DateInput, RawValue};
