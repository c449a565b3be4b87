//! The registration form: six text fields validated together.
//!
//! Unlike the field rules, form validation keeps going after a failure so
//! every field gets its own message. Each field is still fail-fast: it
//! carries at most one message.

use std::{collections::BTreeMap, fmt};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
  age::{self, is_valid_age_on},
  error::AgeError,
  rules::{is_valid_email, is_valid_name, is_valid_zip_code},
  user::NewUser,
  value::{DateInput, RawValue},
};

pub const CITY_REQUIRED: &str = "La ville est requise";
pub const BIRTH_DATE_REQUIRED: &str = "Date requise";
/// Shown when a registration reuses an email address already on file.
pub const EMAIL_TAKEN: &str = "Cet email existe déjà.";

// ─── Field ───────────────────────────────────────────────────────────────────

/// A form field, named as in the JSON body.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Field {
  LastName,
  FirstName,
  Email,
  BirthDate,
  ZipCode,
  City,
}

impl Field {
  /// Form order.
  pub const ALL: [Field; 6] = [
    Field::LastName,
    Field::FirstName,
    Field::Email,
    Field::BirthDate,
    Field::ZipCode,
    Field::City,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      Field::LastName => "lastName",
      Field::FirstName => "firstName",
      Field::Email => "email",
      Field::BirthDate => "birthDate",
      Field::ZipCode => "zipCode",
      Field::City => "city",
    }
  }
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// One message per failing field, in form order.
pub type FieldErrors = BTreeMap<Field, String>;

// ─── Form ────────────────────────────────────────────────────────────────────

/// Raw form values. The birth date is a `YYYY-MM-DD` string, as produced by
/// a date input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationForm {
  pub last_name:  String,
  pub first_name: String,
  pub email:      String,
  pub birth_date: String,
  pub zip_code:   String,
  pub city:       String,
}

impl RegistrationForm {
  pub fn value(&self, field: Field) -> &str {
    match field {
      Field::LastName => &self.last_name,
      Field::FirstName => &self.first_name,
      Field::Email => &self.email,
      Field::BirthDate => &self.birth_date,
      Field::ZipCode => &self.zip_code,
      Field::City => &self.city,
    }
  }

  fn value_mut(&mut self, field: Field) -> &mut String {
    match field {
      Field::LastName => &mut self.last_name,
      Field::FirstName => &mut self.first_name,
      Field::Email => &mut self.email,
      Field::BirthDate => &mut self.birth_date,
      Field::ZipCode => &mut self.zip_code,
      Field::City => &mut self.city,
    }
  }

  /// No field is left empty.
  pub fn is_complete(&self) -> bool {
    Field::ALL.iter().all(|f| !self.value(*f).is_empty())
  }

  /// The message a field would show on `today`, if any.
  pub fn check_field_on(&self, field: Field, today: NaiveDate) -> Option<String> {
    let result = match field {
      Field::LastName => is_valid_name(&self.last_name).map_err(|e| e.to_string()),
      Field::FirstName => is_valid_name(&self.first_name).map_err(|e| e.to_string()),
      Field::Email => is_valid_email(&self.email).map_err(|e| e.to_string()),
      Field::ZipCode => is_valid_zip_code(&self.zip_code).map_err(|e| e.to_string()),
      Field::City => self.check_city(),
      Field::BirthDate => self.check_birth_date(today).map(|_| ()),
    };
    result.err()
  }

  /// Every field's message on `today`.
  pub fn errors_on(&self, today: NaiveDate) -> FieldErrors {
    Field::ALL
      .iter()
      .filter_map(|f| self.check_field_on(*f, today).map(|m| (*f, m)))
      .collect()
  }

  /// Whether the form may be submitted: complete and without errors.
  pub fn can_submit_on(&self, today: NaiveDate) -> bool {
    self.is_complete() && self.errors_on(today).is_empty()
  }

  /// Validate the whole form on `today`, producing the field set to persist.
  pub fn validate_on(&self, today: NaiveDate) -> Result<NewUser, FieldErrors> {
    let errors = self.errors_on(today);
    if !errors.is_empty() {
      return Err(errors);
    }
    let birth_date = self
      .check_birth_date(today)
      .map_err(|m| FieldErrors::from([(Field::BirthDate, m)]))?;

    Ok(NewUser {
      last_name: self.last_name.clone(),
      first_name: self.first_name.clone(),
      email: self.email.clone(),
      birth_date,
      zip_code: self.zip_code.clone(),
      city: self.city.clone(),
    })
  }

  /// [`validate_on`](Self::validate_on) against the local date.
  pub fn validate(&self) -> Result<NewUser, FieldErrors> {
    self.validate_on(age::today())
  }

  /// Validate a JSON body on `today`.
  ///
  /// Text fields go through the form rules. A field holding a number, a
  /// boolean or a structure gets the message its rule gives for that value
  /// (e.g. the postal code "must be text" message). A body that is not an
  /// object has no fields, so every field reports as missing.
  pub fn validate_json_on(body: &Value, today: NaiveDate) -> Result<NewUser, FieldErrors> {
    let mut form = RegistrationForm::default();
    let mut untyped = FieldErrors::new();
    for field in Field::ALL {
      match RawValue::from(body.get(field.as_str())) {
        RawValue::Text(text) => *form.value_mut(field) = text.to_owned(),
        RawValue::Absent => {}
        raw => {
          if let Some(message) = untyped_message(field, raw, today) {
            untyped.insert(field, message);
          }
        }
      }
    }

    if untyped.is_empty() {
      return form.validate_on(today);
    }
    let mut errors = form.errors_on(today);
    errors.extend(untyped);
    Err(errors)
  }

  /// [`validate_json_on`](Self::validate_json_on) against the local date.
  pub fn validate_json(body: &Value) -> Result<NewUser, FieldErrors> {
    Self::validate_json_on(body, age::today())
  }

  fn check_city(&self) -> Result<(), String> {
    if self.city.is_empty() {
      return Err(CITY_REQUIRED.to_owned());
    }
    is_valid_name(&self.city).map_err(|e| e.to_string())
  }

  fn check_birth_date(&self, today: NaiveDate) -> Result<NaiveDate, String> {
    if self.birth_date.is_empty() {
      return Err(BIRTH_DATE_REQUIRED.to_owned());
    }
    let input = DateInput::parse(&self.birth_date);
    is_valid_age_on(input, today).map_err(|e| e.to_string())?;
    match input {
      DateInput::Date(Some(date)) => Ok(date),
      _ => Err(AgeError::InvalidDate.to_string()),
    }
  }
}

/// The message for a field whose JSON value is not text.
fn untyped_message(field: Field, raw: RawValue<'_>, today: NaiveDate) -> Option<String> {
  let result = match field {
    Field::LastName | Field::FirstName => is_valid_name(raw).map_err(|e| e.to_string()),
    Field::Email => is_valid_email(raw).map_err(|e| e.to_string()),
    Field::ZipCode => is_valid_zip_code(raw).map_err(|e| e.to_string()),
    Field::City if raw.is_falsy() => Err(CITY_REQUIRED.to_owned()),
    Field::City => is_valid_name(raw).map_err(|e| e.to_string()),
    Field::BirthDate if raw.is_falsy() => Err(BIRTH_DATE_REQUIRED.to_owned()),
    Field::BirthDate => {
      is_valid_age_on(DateInput::from(raw), today).map_err(|e| e.to_string())
    }
  };
  result.err()
}
