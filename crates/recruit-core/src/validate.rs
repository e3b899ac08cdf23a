//! Field-level well-formedness checks for drafts.
//!
//! Checks run in a fixed order and stop at the first violation; a draft never
//! reports more than one error.

use thiserror::Error;

use crate::model::{EntityKind, NewCandidate, NewEmployee, NewInterview};

/// The draft field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
  Name,
  Email,
  Status,
  Designation,
  Round,
  CandidateId,
  EmployeeId,
}

/// A single malformed input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", message(.entity, .field))]
pub struct ValidationError {
  pub entity: EntityKind,
  pub field:  Field,
}

fn message(entity: &EntityKind, field: &Field) -> String {
  let noun = entity.noun();
  match field {
    Field::Name => format!("Please enter the {noun} name"),
    Field::Email => format!("Please enter the {noun} email"),
    Field::Status => format!("Please enter the {noun} status"),
    Field::Designation => format!("Please enter the {noun} designation"),
    Field::Round => "Please enter non-zero round".to_owned(),
    Field::CandidateId => "Please enter the non-zero candidate id".to_owned(),
    Field::EmployeeId => "Please enter the non-zero employee id".to_owned(),
  }
}

/// Implemented by every draft type.
pub trait Validate {
  fn validate(&self) -> Result<(), ValidationError>;
}

fn require_text(
  entity: EntityKind,
  field: Field,
  value: &str,
) -> Result<(), ValidationError> {
  if value.trim().is_empty() {
    return Err(ValidationError { entity, field });
  }
  Ok(())
}

fn require_positive(
  entity: EntityKind,
  field: Field,
  value: i64,
) -> Result<(), ValidationError> {
  if value <= 0 {
    return Err(ValidationError { entity, field });
  }
  Ok(())
}

impl Validate for NewCandidate {
  fn validate(&self) -> Result<(), ValidationError> {
    let kind = EntityKind::Candidate;
    require_text(kind, Field::Name, &self.name)?;
    require_text(kind, Field::Email, &self.email)?;
    require_text(kind, Field::Status, &self.status)
  }
}

impl Validate for NewEmployee {
  fn validate(&self) -> Result<(), ValidationError> {
    let kind = EntityKind::Employee;
    require_text(kind, Field::Name, &self.name)?;
    require_text(kind, Field::Email, &self.email)?;
    require_text(kind, Field::Designation, &self.designation)
  }
}

impl Validate for NewInterview {
  fn validate(&self) -> Result<(), ValidationError> {
    let kind = EntityKind::Interview;
    require_positive(kind, Field::Round, self.round)?;
    require_positive(kind, Field::CandidateId, self.candidate_id)?;
    require_positive(kind, Field::EmployeeId, self.employee_id)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn candidate(name: &str, email: &str, status: &str) -> NewCandidate {
    NewCandidate {
      name:   name.into(),
      email:  email.into(),
      status: status.into(),
    }
  }

  #[test]
  fn well_formed_candidate_passes() {
    let c = candidate("vardhman", "vardhman@gmail.com", "pre-hire");
    assert_eq!(c.validate(), Ok(()));
  }

  #[test]
  fn whitespace_only_counts_as_empty() {
    let err = candidate("   ", "a@b.c", "active").validate().unwrap_err();
    assert_eq!(err.field, Field::Name);
    assert_eq!(err.to_string(), "Please enter the candidate name");
  }

  #[test]
  fn candidate_checks_name_before_email_before_status() {
    let err = candidate("", "", "").validate().unwrap_err();
    assert_eq!(err.field, Field::Name);

    let err = candidate("x", " \t", "").validate().unwrap_err();
    assert_eq!(err.field, Field::Email);

    let err = candidate("x", "y", "\n").validate().unwrap_err();
    assert_eq!(err.field, Field::Status);
    assert_eq!(err.to_string(), "Please enter the candidate status");
  }

  #[test]
  fn employee_reports_designation_last() {
    let e = NewEmployee {
      name:        "Ann".into(),
      email:       "ann@corp.example".into(),
      designation: " ".into(),
    };
    let err = e.validate().unwrap_err();
    assert_eq!(err.entity, EntityKind::Employee);
    assert_eq!(err.field, Field::Designation);
    assert_eq!(err.to_string(), "Please enter the employee designation");
  }

  #[test]
  fn employee_email_message_names_employee() {
    let e = NewEmployee {
      name:        "Ann".into(),
      email:       "".into(),
      designation: "CEO".into(),
    };
    assert_eq!(
      e.validate().unwrap_err().to_string(),
      "Please enter the employee email"
    );
  }

  #[test]
  fn interview_checks_round_then_candidate_then_employee() {
    let i = NewInterview { round: 0, candidate_id: 0, employee_id: 0 };
    assert_eq!(i.validate().unwrap_err().field, Field::Round);

    let i = NewInterview { round: 2, candidate_id: -4, employee_id: 0 };
    assert_eq!(i.validate().unwrap_err().field, Field::CandidateId);

    let i = NewInterview { round: 2, candidate_id: 4, employee_id: 0 };
    let err = i.validate().unwrap_err();
    assert_eq!(err.field, Field::EmployeeId);
    assert_eq!(err.to_string(), "Please enter the non-zero employee id");
  }

  #[test]
  fn negative_round_is_rejected() {
    let i = NewInterview { round: -1, candidate_id: 1, employee_id: 1 };
    assert_eq!(
      i.validate().unwrap_err().to_string(),
      "Please enter non-zero round"
    );
  }

  #[test]
  fn interview_draft_deserialises_zero_for_the_validator() {
    let i: NewInterview = serde_json::from_str(
      r#"{"round":0,"candidate_id":1,"employee_id":1}"#,
    )
    .unwrap();
    assert_eq!(i.validate().unwrap_err().field, Field::Round);
  }
}
