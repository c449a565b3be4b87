//! `signup`: register and list users from the command line.
//!
//! # Usage
//!
//! ```text
//! signup --url http://localhost:8080 list
//! signup --store ~/signup.db register --last-name Dupont --first-name Jean \
//!   --email jean@test.com --birth-date 1990-04-12 --zip-code 75001 --city Paris
//! signup check zip-code 7500A
//! ```

mod backend;
mod client;

use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use backend::{Backend, SubmitError};
use clap::{Parser, Subcommand, ValueEnum};
use client::{ApiClient, ApiConfig};
use serde::Deserialize;
use signup_core::{
  DateInput, RegistrationForm, calculate_age, is_valid_age, is_valid_email, is_valid_name,
  is_valid_zip_code, user::registered_count_label,
};
use signup_store_sqlite::SqliteStore;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "signup", about = "Register and list users")]
struct Args {
  /// Path to a TOML config file (url, store).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Base URL of a signup server; takes precedence over a local store.
  #[arg(long, env = "SIGNUP_URL")]
  url: Option<String>,

  /// Path of the local SQLite store (default: signup.db).
  #[arg(long, env = "SIGNUP_STORE")]
  store: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Validate a registration and persist it.
  Register(RegisterArgs),
  /// Print the number of registered users and their names.
  List,
  /// Run a single rule against a value.
  Check {
    rule:  Rule,
    /// The value to check; omit to check an absent value.
    value: Option<String>,
  },
}

#[derive(clap::Args, Debug)]
struct RegisterArgs {
  #[arg(long, default_value = "")]
  last_name:  String,
  #[arg(long, default_value = "")]
  first_name: String,
  #[arg(long, default_value = "")]
  email:      String,
  /// Birth date as YYYY-MM-DD.
  #[arg(long, default_value = "")]
  birth_date: String,
  #[arg(long, default_value = "")]
  zip_code:   String,
  #[arg(long, default_value = "")]
  city:       String,
}

impl From<RegisterArgs> for RegistrationForm {
  fn from(a: RegisterArgs) -> Self {
    RegistrationForm {
      last_name:  a.last_name,
      first_name: a.first_name,
      email:      a.email,
      birth_date: a.birth_date,
      zip_code:   a.zip_code,
      city:       a.city,
    }
  }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Rule {
  Name,
  Email,
  ZipCode,
  /// Majority rule on a YYYY-MM-DD date.
  BirthDate,
  /// Print the age for a YYYY-MM-DD date.
  Age,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  url:   Option<String>,
  store: Option<PathBuf>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<ExitCode> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  run(Args::parse()).await
}

async fn run(args: Args) -> Result<ExitCode> {
  match args.command {
    Command::Check { rule, value } => Ok(report_check(rule, value.as_deref())),
    Command::Register(reg) => {
      let backend = open_backend(args.config, args.url, args.store).await?;
      register(&backend, reg.into()).await
    }
    Command::List => {
      let backend = open_backend(args.config, args.url, args.store).await?;
      list(&backend).await
    }
  }
}

/// CLI flags override the config file, which overrides defaults.
async fn open_backend(
  config: Option<PathBuf>,
  url: Option<String>,
  store: Option<PathBuf>,
) -> Result<Backend> {
  let file_cfg: ConfigFile = if let Some(path) = &config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  if let Some(base_url) = url.or(file_cfg.url) {
    tracing::debug!(%base_url, "using remote API");
    return Ok(Backend::Remote(ApiClient::new(ApiConfig { base_url })?));
  }

  let path = store
    .or(file_cfg.store)
    .unwrap_or_else(|| PathBuf::from("signup.db"));
  tracing::debug!(?path, "using local store");
  let store = SqliteStore::open(&path)
    .await
    .with_context(|| format!("failed to open store at {path:?}"))?;
  Ok(Backend::Local(store))
}

// ─── Commands ─────────────────────────────────────────────────────────────────

async fn register(backend: &Backend, form: RegistrationForm) -> Result<ExitCode> {
  let new_user = match form.validate() {
    Ok(user) => user,
    Err(errors) => {
      for (field, message) in &errors {
        eprintln!("{field}: {message}");
      }
      return Ok(ExitCode::FAILURE);
    }
  };

  match backend.register(new_user).await {
    Ok(user) => {
      println!("{} ({})", user.display_name(), user.id);
      Ok(ExitCode::SUCCESS)
    }
    Err(SubmitError::Invalid(errors)) => {
      for (field, message) in &errors {
        eprintln!("{field}: {message}");
      }
      Ok(ExitCode::FAILURE)
    }
    Err(e) => {
      if let SubmitError::Network(cause) = &e {
        tracing::error!("registration failed: {cause:#}");
      }
      eprintln!("{e}");
      Ok(ExitCode::FAILURE)
    }
  }
}

async fn list(backend: &Backend) -> Result<ExitCode> {
  let users = backend.list_users().await?;
  println!("{}", registered_count_label(users.len()));
  for user in &users {
    println!("{}", user.display_name());
  }
  Ok(ExitCode::SUCCESS)
}

/// Print the outcome of one rule. `check` never touches a store.
fn report_check(rule: Rule, value: Option<&str>) -> ExitCode {
  match check(rule, value) {
    Ok(out) => {
      println!("{out}");
      ExitCode::SUCCESS
    }
    Err(e) => {
      println!("{e}");
      ExitCode::FAILURE
    }
  }
}

/// Run one rule; `Ok` carries what to print.
fn check(rule: Rule, value: Option<&str>) -> signup_core::Result<String> {
  match rule {
    Rule::Name => is_valid_name(value)?,
    Rule::Email => is_valid_email(value)?,
    Rule::ZipCode => is_valid_zip_code(value)?,
    Rule::BirthDate => is_valid_age(date_arg(value))?,
    Rule::Age => return Ok(calculate_age(date_arg(value))?.to_string()),
  }
  Ok("ok".to_string())
}

fn date_arg(value: Option<&str>) -> DateInput<'_> {
  match value {
    None | Some("") => DateInput::Absent,
    Some(s) => DateInput::parse(s),
  }
}
