//! Error types for `signup-core`.
//!
//! Every rule has its own error vocabulary. The `Display` text of each
//! variant is the user-facing message and is part of the contract: form and
//! API layers show it verbatim next to the offending field.

use thiserror::Error;

/// Failure of [`calculate_age`](crate::age::calculate_age) or
/// [`is_valid_age`](crate::age::is_valid_age).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AgeError {
  #[error("Le paramètre date de naissance est requis")]
  MissingArgument,

  #[error("Le format de la date est invalide. Un objet Date est attendu")]
  InvalidFormat,

  #[error("La date fournie n'est pas une date valide")]
  InvalidDate,

  #[error("La date de naissance ne peut pas être dans le futur")]
  FutureDate,

  #[error("Vous devez être majeur")]
  Underage,
}

/// Failure of [`is_valid_zip_code`](crate::rules::is_valid_zip_code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ZipCodeError {
  #[error("Le code postal est requis")]
  Required,

  #[error("Le code postal doit être une chaîne de caractères")]
  WrongType,

  #[error("Le code postal doit contenir exactement 5 chiffres")]
  WrongLength,

  #[error("Le code postal ne doit contenir que des chiffres")]
  NonDigit,
}

/// Failure of [`is_valid_name`](crate::rules::is_valid_name).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameError {
  #[error("Le nom est requis")]
  Required,

  #[error("Le nom doit être une chaîne de caractères")]
  WrongType,

  #[error("Le nom ne doit contenir que des lettres, accents, espaces ou tirets")]
  InvalidCharacters,
}

/// Failure of [`is_valid_email`](crate::rules::is_valid_email).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmailError {
  #[error("L'email est requis")]
  Required,

  #[error("L'email doit être une chaîne de caractères")]
  WrongType,

  #[error("L'email doit être valide (ex: user@domain.com)")]
  InvalidFormat,
}

/// Umbrella error for callers that want a single type.
#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Age(#[from] AgeError),

  #[error(transparent)]
  ZipCode(#[from] ZipCodeError),

  #[error(transparent)]
  Name(#[from] NameError),

  #[error(transparent)]
  Email(#[from] EmailError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
