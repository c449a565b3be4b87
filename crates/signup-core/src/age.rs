//! Age computation and the majority rule.
//!
//! Ages are counted in full calendar years at day granularity: a person
//! gains a year on the anniversary of their birth, not before. There is no
//! timezone handling; "today" is a local calendar date.
//!
//! Each rule has an `_on` form taking "today" explicitly and a plain form
//! that reads the local clock.

use chrono::{Datelike, Local, NaiveDate};

use crate::{error::AgeError, policy::MAJORITY_AGE, value::DateInput};

/// The local calendar date right now.
pub fn today() -> NaiveDate { Local::now().date_naive() }

/// Apply the birth date guards and return the resolved date.
///
/// Order matters: absent, then not date-typed, then unresolvable, then in
/// the future.
fn resolve_birth_date(
  birth: DateInput<'_>,
  today: NaiveDate,
) -> Result<NaiveDate, AgeError> {
  let date = match birth {
    DateInput::Absent => return Err(AgeError::MissingArgument),
    DateInput::Other(raw) if raw.is_falsy() => {
      return Err(AgeError::MissingArgument);
    }
    DateInput::Other(_) => return Err(AgeError::InvalidFormat),
    DateInput::Date(None) => return Err(AgeError::InvalidDate),
    DateInput::Date(Some(date)) => date,
  };

  if date > today {
    return Err(AgeError::FutureDate);
  }
  Ok(date)
}

/// Full years between `birth` and `today`. `birth` must not be after
/// `today`.
fn full_years(birth: NaiveDate, today: NaiveDate) -> u32 {
  let mut age = today.year() - birth.year();
  if (today.month(), today.day()) < (birth.month(), birth.day()) {
    age -= 1;
  }
  // Non-negative because the future-date guard ran first.
  age.max(0) as u32
}

/// Age in full years of someone born on `birth`, as of `today`.
pub fn calculate_age_on<'a>(
  birth: impl Into<DateInput<'a>>,
  today: NaiveDate,
) -> Result<u32, AgeError> {
  let birth = resolve_birth_date(birth.into(), today)?;
  Ok(full_years(birth, today))
}

/// Age in full years of someone born on `birth`, as of the local date.
pub fn calculate_age<'a>(
  birth: impl Into<DateInput<'a>>,
) -> Result<u32, AgeError> {
  calculate_age_on(birth, today())
}

/// Succeeds when someone born on `birth` is an adult on `today`.
///
/// There is no "invalid but not an error" outcome: a minor is
/// [`AgeError::Underage`].
pub fn is_valid_age_on<'a>(
  birth: impl Into<DateInput<'a>>,
  today: NaiveDate,
) -> Result<(), AgeError> {
  if calculate_age_on(birth, today)? < MAJORITY_AGE {
    return Err(AgeError::Underage);
  }
  Ok(())
}

/// [`is_valid_age_on`] against the local date.
pub fn is_valid_age<'a>(birth: impl Into<DateInput<'a>>) -> Result<(), AgeError> {
  is_valid_age_on(birth, today())
}

#[cfg(test)]
mod tests {
  use chrono::Days;

  use super::*;
  use crate::value::RawValue;

  fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  /// Same month and day, `years` earlier; February 29th falls back to the
  /// 28th in common years.
  fn years_before(today: NaiveDate, years: i32) -> NaiveDate {
    let year = today.year() - years;
    today
      .with_year(year)
      .unwrap_or_else(|| ymd(year, today.month(), today.day() - 1))
  }

  // ─── calculate_age ─────────────────────────────────────────────────────────

  #[test]
  fn age_on_fixed_clock() {
    assert_eq!(calculate_age_on(ymd(2000, 1, 1), ymd(2024, 6, 15)), Ok(24));
  }

  #[test]
  fn birthday_already_passed() {
    let today = ymd(2024, 6, 15);
    assert_eq!(calculate_age_on(years_before(today, 20), today), Ok(20));
  }

  #[test]
  fn birthday_tomorrow_is_one_year_less() {
    let today = ymd(2024, 6, 15);
    let birth = years_before(today, 20).checked_add_days(Days::new(1)).unwrap();
    assert_eq!(calculate_age_on(birth, today), Ok(19));
  }

  #[test]
  fn birthday_later_month_is_one_year_less() {
    assert_eq!(calculate_age_on(ymd(1990, 12, 1), ymd(2024, 6, 15)), Ok(33));
  }

  #[test]
  fn born_today_is_zero() {
    let today = ymd(2024, 6, 15);
    assert_eq!(calculate_age_on(today, today), Ok(0));
  }

  #[test]
  fn leap_day_birth() {
    let birth = ymd(2004, 2, 29);
    assert_eq!(calculate_age_on(birth, ymd(2022, 2, 28)), Ok(17));
    assert_eq!(calculate_age_on(birth, ymd(2022, 3, 1)), Ok(18));
    assert_eq!(calculate_age_on(birth, ymd(2024, 2, 29)), Ok(20));
  }

  #[test]
  fn year_boundary() {
    assert_eq!(calculate_age_on(ymd(2000, 12, 31), ymd(2018, 12, 31)), Ok(18));
    assert_eq!(calculate_age_on(ymd(2000, 12, 31), ymd(2018, 12, 30)), Ok(17));
    assert_eq!(calculate_age_on(ymd(2001, 1, 1), ymd(2018, 12, 31)), Ok(17));
  }

  #[test]
  fn missing_argument() {
    let today = ymd(2024, 6, 15);
    assert_eq!(
      calculate_age_on(DateInput::Absent, today),
      Err(AgeError::MissingArgument)
    );
    assert_eq!(
      calculate_age_on(None::<NaiveDate>, today),
      Err(AgeError::MissingArgument)
    );
    assert_eq!(
      calculate_age_on(RawValue::from(""), today),
      Err(AgeError::MissingArgument)
    );
  }

  #[test]
  fn text_and_numbers_are_not_coerced() {
    let today = ymd(2024, 6, 15);
    assert_eq!(
      calculate_age_on(RawValue::from("2000-01-01"), today),
      Err(AgeError::InvalidFormat)
    );
    assert_eq!(
      calculate_age_on(RawValue::from(123456789_i64), today),
      Err(AgeError::InvalidFormat)
    );
  }

  #[test]
  fn unresolvable_date() {
    let today = ymd(2024, 6, 15);
    assert_eq!(
      calculate_age_on(DateInput::parse("ceci n'est pas une date"), today),
      Err(AgeError::InvalidDate)
    );
    assert_eq!(
      calculate_age_on(DateInput::from_ymd(2001, 2, 29), today),
      Err(AgeError::InvalidDate)
    );
  }

  #[test]
  fn future_date() {
    let today = ymd(2024, 6, 15);
    let tomorrow = today.checked_add_days(Days::new(1)).unwrap();
    assert_eq!(calculate_age_on(tomorrow, today), Err(AgeError::FutureDate));
    assert_eq!(
      calculate_age_on(ymd(2025, 6, 15), today),
      Err(AgeError::FutureDate)
    );
  }

  #[test]
  fn real_clock_variant() {
    let now = today();
    assert_eq!(calculate_age(years_before(now, 30)), Ok(30));
  }

  // ─── is_valid_age ──────────────────────────────────────────────────────────

  #[test]
  fn exactly_eighteen_today() {
    let today = ymd(2024, 6, 15);
    assert_eq!(is_valid_age_on(years_before(today, 18), today), Ok(()));
  }

  #[test]
  fn eighteen_tomorrow_is_underage() {
    let today = ymd(2024, 6, 15);
    let birth = years_before(today, 18).checked_add_days(Days::new(1)).unwrap();
    assert_eq!(is_valid_age_on(birth, today), Err(AgeError::Underage));
  }

  #[test]
  fn seventeen_is_underage() {
    let today = ymd(2024, 6, 15);
    assert_eq!(
      is_valid_age_on(years_before(today, 17), today),
      Err(AgeError::Underage)
    );
  }

  #[test]
  fn majority_shares_the_age_guards() {
    let today = ymd(2024, 6, 15);
    assert_eq!(is_valid_age_on(DateInput::Absent, today), Err(AgeError::MissingArgument));
    assert_eq!(
      is_valid_age_on(RawValue::from("pas une date"), today),
      Err(AgeError::InvalidFormat)
    );
    assert_eq!(is_valid_age_on(DateInput::Date(None), today), Err(AgeError::InvalidDate));
    assert_eq!(is_valid_age_on(ymd(2025, 1, 1), today), Err(AgeError::FutureDate));
  }

  #[test]
  fn messages_are_displayable() {
    assert_eq!(AgeError::Underage.to_string(), "Vous devez être majeur");
    assert_eq!(
      AgeError::FutureDate.to_string(),
      "La date de naissance ne peut pas être dans le futur"
    );
  }

  #[test]
  fn repeated_calls_agree() {
    let today = ymd(2024, 6, 15);
    let birth = ymd(2006, 6, 16);
    assert_eq!(is_valid_age_on(birth, today), is_valid_age_on(birth, today));
  }

  #[test]
  fn property_matches_year_difference_with_borrow() {
    let today = ymd(2024, 3, 1);
    let mut birth = ymd(1990, 1, 1);
    while birth <= today {
      let borrow = (today.month(), today.day()) < (birth.month(), birth.day());
      let expected = (today.year() - birth.year()) as u32 - u32::from(borrow);
      assert_eq!(calculate_age_on(birth, today), Ok(expected), "born {birth}");
      birth = birth.checked_add_days(Days::new(17)).unwrap();
    }
  }
}
