//! Aggregate profile check.
//!
//! A profile is a JSON object `{ name, email, zipCode, birthDate }`. The
//! check collapses every rule into one boolean and never says which field
//! failed; callers that need messages run the field rules themselves.

use chrono::NaiveDate;
use serde_json::Value;

use crate::{
  age::{self, is_valid_age_on},
  rules::{is_valid_email, is_valid_name, is_valid_zip_code},
  value::DateInput,
};

/// `true` iff `profile` is an object whose name, email, postal code and
/// birth date all pass their rules on `today`.
pub fn is_valid_profile_on(profile: &Value, today: NaiveDate) -> bool {
  let Some(fields) = profile.as_object() else {
    return false;
  };

  is_valid_name(fields.get("name")).is_ok()
    && is_valid_email(fields.get("email")).is_ok()
    && is_valid_zip_code(fields.get("zipCode")).is_ok()
    && is_valid_age_on(DateInput::from_json(fields.get("birthDate")), today).is_ok()
}

/// [`is_valid_profile_on`] against the local date.
pub fn is_valid_profile(profile: &Value) -> bool {
  is_valid_profile_on(profile, age::today())
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn today() -> NaiveDate { NaiveDate::from_ymd_opt(2024, 6, 15).unwrap() }

  fn valid() -> Value {
    json!({
      "name":      "Jean",
      "email":     "jean@test.com",
      "zipCode":   "75001",
      "birthDate": "2004-01-01",
    })
  }

  #[test]
  fn valid_profile() {
    assert!(is_valid_profile_on(&valid(), today()));
  }

  #[test]
  fn any_invalid_field_is_false() {
    for (field, bad) in [
      ("name", json!("Jean3")),
      ("email", json!("invalide")),
      ("zipCode", json!(75001)),
      ("birthDate", json!("2010-01-01")),
      ("birthDate", json!("2030-01-01")),
      ("birthDate", json!(1072915200)),
    ] {
      let mut profile = valid();
      profile[field] = bad;
      assert!(!is_valid_profile_on(&profile, today()), "{field}");
    }
  }

  #[test]
  fn missing_field_is_false() {
    let mut profile = valid();
    profile.as_object_mut().unwrap().remove("zipCode");
    assert!(!is_valid_profile_on(&profile, today()));
  }

  #[test]
  fn non_object_is_false() {
    assert!(!is_valid_profile_on(&Value::Null, today()));
    assert!(!is_valid_profile_on(&json!("string"), today()));
    assert!(!is_valid_profile_on(&json!([valid()]), today()));
  }

  #[test]
  fn equals_conjunction_of_rules() {
    let profile = valid();
    let expected = is_valid_name(profile.get("name")).is_ok()
      && is_valid_email(profile.get("email")).is_ok()
      && is_valid_zip_code(profile.get("zipCode")).is_ok()
      && is_valid_age_on(DateInput::from_json(profile.get("birthDate")), today()).is_ok();
    assert_eq!(is_valid_profile_on(&profile, today()), expected);
  }

  #[test]
  fn real_clock_variant() {
    assert!(is_valid_profile(&json!({
      "name":      "Jean",
      "email":     "jean@test.com",
      "zipCode":   "75001",
      "birthDate": "1980-01-01",
    })));
  }
}
