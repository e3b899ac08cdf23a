//! Error type for `recruit-store-sqlite`.

use recruit_core::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// A write collided with a `UNIQUE` column (the email of a person row).
  #[error("unique constraint violated: {0}")]
  UniqueViolation(String),
}

impl Error {
  /// Split out uniqueness violations so callers can report them as such.
  pub(crate) fn classify(e: tokio_rusqlite::Error) -> Self {
    if let tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(
      ref code,
      ref message,
    )) = e
      && code.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    {
      return Self::UniqueViolation(
        message.clone().unwrap_or_else(|| code.to_string()),
      );
    }
    Self::Database(e)
  }
}

impl StoreError for Error {
  fn is_unique_violation(&self) -> bool {
    matches!(self, Self::UniqueViolation(_))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
