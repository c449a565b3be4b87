//! Raw field values, before any rule has looked at them.
//!
//! Form bodies and JSON payloads are loosely typed: a field may be missing,
//! hold text, a number, a boolean, or a nested structure. The rules decide
//! what each of those means, so the conversion into [`RawValue`] never
//! coerces anything.

use chrono::NaiveDate;
use serde_json::Value;

use crate::policy::DATE_FORMAT;

// ─── RawValue ────────────────────────────────────────────────────────────────

/// A borrowed, untyped field value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue<'a> {
  /// `null`, or a key that is not present at all.
  Absent,
  Text(&'a str),
  Number(f64),
  Bool(bool),
  /// An array or an object.
  Structured,
}

impl RawValue<'_> {
  /// Values a form treats as "nothing entered": absent, empty text, zero,
  /// NaN and `false`.
  pub fn is_falsy(&self) -> bool {
    match self {
      Self::Absent => true,
      Self::Text(s) => s.is_empty(),
      Self::Number(n) => *n == 0.0 || n.is_nan(),
      Self::Bool(b) => !b,
      Self::Structured => false,
    }
  }

  pub fn as_text(&self) -> Option<&str> {
    match self {
      Self::Text(s) => Some(s),
      _ => None,
    }
  }
}

impl<'a> From<&'a str> for RawValue<'a> {
  fn from(s: &'a str) -> Self { Self::Text(s) }
}

impl<'a> From<&'a String> for RawValue<'a> {
  fn from(s: &'a String) -> Self { Self::Text(s.as_str()) }
}

impl<'a> From<Option<&'a str>> for RawValue<'a> {
  fn from(s: Option<&'a str>) -> Self { s.map_or(Self::Absent, Self::Text) }
}

impl From<bool> for RawValue<'_> {
  fn from(b: bool) -> Self { Self::Bool(b) }
}

impl From<f64> for RawValue<'_> {
  fn from(n: f64) -> Self { Self::Number(n) }
}

impl From<i64> for RawValue<'_> {
  fn from(n: i64) -> Self { Self::Number(n as f64) }
}

impl From<i32> for RawValue<'_> {
  fn from(n: i32) -> Self { Self::Number(f64::from(n)) }
}

impl From<u32> for RawValue<'_> {
  fn from(n: u32) -> Self { Self::Number(f64::from(n)) }
}

impl<'a> From<&'a Value> for RawValue<'a> {
  fn from(v: &'a Value) -> Self {
    match v {
      Value::Null => Self::Absent,
      Value::String(s) => Self::Text(s),
      Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
      Value::Bool(b) => Self::Bool(*b),
      Value::Array(_) | Value::Object(_) => Self::Structured,
    }
  }
}

impl<'a> From<Option<&'a Value>> for RawValue<'a> {
  fn from(v: Option<&'a Value>) -> Self { v.map_or(Self::Absent, Self::from) }
}

// ─── DateInput ───────────────────────────────────────────────────────────────

/// The value handed to the age rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DateInput<'a> {
  Absent,
  /// A date-typed value. `None` means it does not resolve to a calendar
  /// date (e.g. a failed parse or February 30th).
  Date(Option<NaiveDate>),
  /// Anything that is not date-typed. Never coerced into a date.
  Other(RawValue<'a>),
}

impl DateInput<'_> {
  /// Build a date-typed value from calendar parts. Parts that do not form a
  /// real date yield an unresolvable date rather than an error.
  pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
    Self::Date(NaiveDate::from_ymd_opt(year, month, day))
  }

  /// Read a `YYYY-MM-DD` form value as a date-typed value.
  pub fn parse(s: &str) -> Self {
    Self::Date(NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok())
  }

  /// Read a JSON field as a birth date.
  ///
  /// JSON has no date type; a date travels as its `YYYY-MM-DD` string. Empty
  /// strings and `null` are absent, other strings are parsed, and numbers,
  /// booleans or structures are not date-typed.
  pub fn from_json(v: Option<&Value>) -> DateInput<'_> {
    match v {
      None | Some(Value::Null) => DateInput::Absent,
      Some(Value::String(s)) if s.is_empty() => DateInput::Absent,
      Some(Value::String(s)) => DateInput::parse(s),
      Some(other) => DateInput::Other(RawValue::from(other)),
    }
  }
}

impl From<NaiveDate> for DateInput<'_> {
  fn from(d: NaiveDate) -> Self { Self::Date(Some(d)) }
}

impl From<Option<NaiveDate>> for DateInput<'_> {
  fn from(d: Option<NaiveDate>) -> Self { d.map_or(Self::Absent, Self::from) }
}

impl<'a> From<RawValue<'a>> for DateInput<'a> {
  fn from(v: RawValue<'a>) -> Self {
    match v {
      RawValue::Absent => Self::Absent,
      other => Self::Other(other),
    }
  }
}
