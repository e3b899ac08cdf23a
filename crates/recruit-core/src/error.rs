//! Error types for `recruit-core`.

use thiserror::Error;

use crate::{model::EntityKind, validate::ValidationError};

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Validation(#[from] ValidationError),

  /// Another row of the same kind already owns the email.
  #[error("{}", duplicate_email_message(.0, .1))]
  DuplicateEmail(EntityKind, Write),

  #[error("Interview already scheduled")]
  DuplicateInterview,

  #[error("Candidate to be interviewed is not registered")]
  UnknownCandidate,

  #[error("Employee as Interviewer is not available")]
  UnknownEmployee,

  #[error("{0} not found")]
  NotFound(EntityKind),

  #[error("{}", referenced_message(.0))]
  ReferencedByInterview(EntityKind),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// The write that tripped over a taken email.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Write {
  Create,
  Update,
}

fn duplicate_email_message(kind: &EntityKind, write: &Write) -> String {
  match (kind, write) {
    (EntityKind::Candidate, Write::Create) => "Email already registered".to_owned(),
    _ => format!("{kind} with the provided email already exists"),
  }
}

fn referenced_message(kind: &EntityKind) -> &'static str {
  match kind {
    EntityKind::Employee => "Employee can not be deleted as its an interviewer",
    _ => "Candidate can not be deleted as its interview is scheduled",
  }
}

impl Error {
  /// Whether the operation's target row was absent, as opposed to the input
  /// being rejected or the store failing.
  pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound(_)) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
