//! Locale policy: French postal codes, Latin names, adult at 18.
//!
//! The rules read these definitions and nothing else, so another locale only
//! has to change this module.

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum age, in full years, to register.
pub const MAJORITY_AGE: u32 = 18;

/// Number of characters in a postal code.
pub const ZIP_CODE_LENGTH: usize = 5;

/// Form and JSON representation of a calendar date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// ASCII letters, Latin-1 supplement letters, whitespace and hyphens.
///
/// The plain `À-ÿ` range would also admit the signs `×` (U+00D7) and `÷`
/// (U+00F7); both are left out.
pub const NAME_PATTERN: &str = r"^[A-Za-zÀ-ÖØ-öø-ÿ\s-]+$";

/// `local@domain.tld`, no whitespace or extra `@`, extension of two or more.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$";

pub(crate) static NAME_REGEX: Lazy<Regex> =
  Lazy::new(|| Regex::new(NAME_PATTERN).expect("name pattern must compile"));

pub(crate) static EMAIL_REGEX: Lazy<Regex> =
  Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern must compile"));
