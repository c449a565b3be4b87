//! Field rules for postal codes, names and email addresses.
//!
//! Each rule checks its guards in a fixed order and reports the first one
//! that fails. Success is `Ok(())`.

use crate::{
  error::{EmailError, NameError, ZipCodeError},
  policy::{EMAIL_REGEX, NAME_REGEX, ZIP_CODE_LENGTH},
  value::RawValue,
};

// ─── Postal code ─────────────────────────────────────────────────────────────

/// A French postal code: exactly five ASCII digits, as text.
pub fn is_valid_zip_code<'a>(
  code: impl Into<RawValue<'a>>,
) -> Result<(), ZipCodeError> {
  let code = code.into();
  if code.is_falsy() {
    return Err(ZipCodeError::Required);
  }
  let Some(text) = code.as_text() else {
    return Err(ZipCodeError::WrongType);
  };
  if text.chars().count() != ZIP_CODE_LENGTH {
    return Err(ZipCodeError::WrongLength);
  }
  if !text.chars().all(|c| c.is_ascii_digit()) {
    return Err(ZipCodeError::NonDigit);
  }
  Ok(())
}

// ─── Name ────────────────────────────────────────────────────────────────────

/// A surname, given name or city: letters (accented Latin letters included),
/// whitespace and hyphens.
///
/// Markup such as `<script>` fails on the character class alone; nothing is
/// escaped or stripped.
pub fn is_valid_name<'a>(name: impl Into<RawValue<'a>>) -> Result<(), NameError> {
  let text = match name.into() {
    RawValue::Text(text) => text,
    RawValue::Number(_) => return Err(NameError::WrongType),
    _ => return Err(NameError::Required),
  };
  if text.trim().is_empty() {
    return Err(NameError::Required);
  }
  if !NAME_REGEX.is_match(text) {
    return Err(NameError::InvalidCharacters);
  }
  Ok(())
}

// ─── Email ───────────────────────────────────────────────────────────────────

/// Syntactic email check: `local@domain.tld`. No DNS lookups.
pub fn is_valid_email<'a>(
  email: impl Into<RawValue<'a>>,
) -> Result<(), EmailError> {
  let email = email.into();
  if email.is_falsy() {
    return Err(EmailError::Required);
  }
  let Some(text) = email.as_text() else {
    return Err(EmailError::WrongType);
  };
  if text.trim().is_empty() {
    return Err(EmailError::Required);
  }
  if !EMAIL_REGEX.is_match(text) {
    return Err(EmailError::InvalidFormat);
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  // ─── Postal code ───────────────────────────────────────────────────────────

  #[test]
  fn zip_code_valid() {
    assert_eq!(is_valid_zip_code("75001"), Ok(()));
    assert_eq!(is_valid_zip_code("06000"), Ok(()));
  }

  #[test]
  fn zip_code_required() {
    assert_eq!(is_valid_zip_code(RawValue::Absent), Err(ZipCodeError::Required));
    assert_eq!(is_valid_zip_code(None::<&str>), Err(ZipCodeError::Required));
    assert_eq!(is_valid_zip_code(""), Err(ZipCodeError::Required));
  }

  #[test]
  fn zip_code_must_be_text() {
    assert_eq!(is_valid_zip_code(75001_i32), Err(ZipCodeError::WrongType));
    assert_eq!(is_valid_zip_code(true), Err(ZipCodeError::WrongType));
  }

  #[test]
  fn zip_code_falsy_is_required_before_type() {
    assert_eq!(is_valid_zip_code(0_i32), Err(ZipCodeError::Required));
    assert_eq!(is_valid_zip_code(false), Err(ZipCodeError::Required));
    assert_eq!(is_valid_zip_code(f64::NAN), Err(ZipCodeError::Required));
  }

  #[test]
  fn zip_code_length() {
    assert_eq!(is_valid_zip_code("75"), Err(ZipCodeError::WrongLength));
    assert_eq!(is_valid_zip_code("750"), Err(ZipCodeError::WrongLength));
    assert_eq!(is_valid_zip_code("750000"), Err(ZipCodeError::WrongLength));
  }

  #[test]
  fn zip_code_digits_only() {
    assert_eq!(is_valid_zip_code("7500A"), Err(ZipCodeError::NonDigit));
    assert_eq!(is_valid_zip_code("75A01"), Err(ZipCodeError::NonDigit));
    assert_eq!(is_valid_zip_code("75 01"), Err(ZipCodeError::NonDigit));
    // Non-ASCII digits are not decimal digits here.
    assert_eq!(is_valid_zip_code("७५००१"), Err(ZipCodeError::NonDigit));
  }

  #[test]
  fn zip_code_length_checked_before_digits() {
    assert_eq!(is_valid_zip_code("ABC"), Err(ZipCodeError::WrongLength));
  }

  // ─── Name ──────────────────────────────────────────────────────────────────

  #[test]
  fn names_accepted() {
    for name in ["Thomas", "Martin", "Jean-Pierre", "Hélène", "Noël", "De Gaulle", "Ørsted"] {
      assert_eq!(is_valid_name(name), Ok(()), "{name}");
    }
  }

  #[test]
  fn names_with_digits_or_symbols_rejected() {
    for name in ["Thomas123", "Nom123", "Thomas!", "O'Brien", "a×b", "a÷b", "Łukasz"] {
      assert_eq!(is_valid_name(name), Err(NameError::InvalidCharacters), "{name}");
    }
  }

  #[test]
  fn markup_rejected() {
    assert_eq!(is_valid_name("<script>"), Err(NameError::InvalidCharacters));
    assert_eq!(
      is_valid_name("<script>alert('hack')</script>"),
      Err(NameError::InvalidCharacters)
    );
  }

  #[test]
  fn name_required() {
    assert_eq!(is_valid_name(RawValue::Absent), Err(NameError::Required));
    assert_eq!(is_valid_name(""), Err(NameError::Required));
    assert_eq!(is_valid_name("   "), Err(NameError::Required));
    assert_eq!(is_valid_name(false), Err(NameError::Required));
  }

  #[test]
  fn name_number_is_wrong_type() {
    assert_eq!(is_valid_name(123_i32), Err(NameError::WrongType));
    assert_eq!(is_valid_name(0_i32), Err(NameError::WrongType));
  }

  #[test]
  fn name_surrounding_whitespace_is_allowed() {
    assert_eq!(is_valid_name("  Anne "), Ok(()));
  }

  // ─── Email ─────────────────────────────────────────────────────────────────

  #[test]
  fn emails_accepted() {
    for email in [
      "test@example.com",
      "prenom.nom@ynov.com",
      "jean.dupont@test.com",
      "test-123@sub.domain.org",
    ] {
      assert_eq!(is_valid_email(email), Ok(()), "{email}");
    }
  }

  #[test]
  fn emails_rejected() {
    for email in [
      "testexample.com",
      "test.com",
      "test@",
      "test@domain",
      "test@domain.c",
      "a b@domain.com",
      "a@@domain.com",
      " test@example.com",
    ] {
      assert_eq!(is_valid_email(email), Err(EmailError::InvalidFormat), "{email}");
    }
  }

  #[test]
  fn email_required_and_type() {
    assert_eq!(is_valid_email(RawValue::Absent), Err(EmailError::Required));
    assert_eq!(is_valid_email(""), Err(EmailError::Required));
    assert_eq!(is_valid_email("   "), Err(EmailError::Required));
    assert_eq!(is_valid_email(12345_i32), Err(EmailError::WrongType));
  }

  #[test]
  fn email_falsy_is_required_before_type() {
    assert_eq!(is_valid_email(0_i32), Err(EmailError::Required));
    assert_eq!(is_valid_email(false), Err(EmailError::Required));
    assert_eq!(is_valid_email(true), Err(EmailError::WrongType));
  }

  #[test]
  fn rules_accept_json_fields() {
    let body = json!({ "zip": "75001", "name": 42, "email": null });
    assert_eq!(is_valid_zip_code(body.get("zip")), Ok(()));
    assert_eq!(is_valid_name(body.get("name")), Err(NameError::WrongType));
    assert_eq!(is_valid_email(body.get("email")), Err(EmailError::Required));
  }

  #[test]
  fn messages_are_displayable() {
    assert_eq!(
      ZipCodeError::NonDigit.to_string(),
      "Le code postal ne doit contenir que des chiffres"
    );
    assert_eq!(
      NameError::InvalidCharacters.to_string(),
      "Le nom ne doit contenir que des lettres, accents, espaces ou tirets"
    );
    assert_eq!(
      EmailError::InvalidFormat.to_string(),
      "L'email doit être valide (ex: user@domain.com)"
    );
  }
}
