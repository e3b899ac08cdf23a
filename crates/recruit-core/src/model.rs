//! Record types for the three tables of the recruiting pipeline.
//!
//! Every record has a `New*` draft counterpart: the id-less shape accepted by
//! create and update. Drafts are what the validators inspect; records are
//! what the store hands back.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::validate::Validate;

// ─── Kind ────────────────────────────────────────────────────────────────────

/// Which of the three tables a record lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
  Candidate,
  Employee,
  Interview,
}

impl EntityKind {
  /// Capitalised singular name, as used in response messages.
  pub fn name(self) -> &'static str {
    match self {
      Self::Candidate => "Candidate",
      Self::Employee => "Employee",
      Self::Interview => "Interview",
    }
  }

  /// Lowercase singular name, as used in validation messages.
  pub fn noun(self) -> &'static str {
    match self {
      Self::Candidate => "candidate",
      Self::Employee => "employee",
      Self::Interview => "interview",
    }
  }
}

impl fmt::Display for EntityKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

// ─── Entity ──────────────────────────────────────────────────────────────────

/// The interface shared by the three record types.
pub trait Entity: Clone + Send + Sync + 'static {
  const KIND: EntityKind;

  /// The id-less input shape used by create and update.
  type Draft: Validate + Clone + Send + Sync + 'static;

  /// Attach a store-assigned id to a draft.
  fn from_draft(id: i64, draft: Self::Draft) -> Self;
}

// ─── Candidate ───────────────────────────────────────────────────────────────

/// A person being considered for hire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
  pub id:     i64,
  pub name:   String,
  /// Unique across all candidates.
  pub email:  String,
  /// Free-form hiring status, e.g. `"pre-hire"`, `"active"`, `"inactive"`.
  pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCandidate {
  pub name:   String,
  pub email:  String,
  pub status: String,
}

impl Entity for Candidate {
  const KIND: EntityKind = EntityKind::Candidate;
  type Draft = NewCandidate;

  fn from_draft(id: i64, draft: NewCandidate) -> Self {
    Self { id, name: draft.name, email: draft.email, status: draft.status }
  }
}

// ─── Employee ────────────────────────────────────────────────────────────────

/// A person who may conduct interviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
  pub id:          i64,
  pub name:        String,
  /// Unique across all employees; may collide with a candidate's email.
  pub email:       String,
  /// Free-form job title, e.g. `"CEO"`, `"Developer"`.
  pub designation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
  pub name:        String,
  pub email:       String,
  pub designation: String,
}

impl Entity for Employee {
  const KIND: EntityKind = EntityKind::Employee;
  type Draft = NewEmployee;

  fn from_draft(id: i64, draft: NewEmployee) -> Self {
    Self {
      id,
      name: draft.name,
      email: draft.email,
      designation: draft.designation,
    }
  }
}

// ─── Interview ───────────────────────────────────────────────────────────────

/// A scheduled pairing of one candidate and one employee at a given round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interview {
  pub id:           i64,
  pub round:        i64,
  pub candidate_id: i64,
  pub employee_id:  i64,
}

/// Draft fields are signed so that zero and negative input reach the
/// validator rather than failing deserialisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInterview {
  pub round:        i64,
  pub candidate_id: i64,
  pub employee_id:  i64,
}

impl Entity for Interview {
  const KIND: EntityKind = EntityKind::Interview;
  type Draft = NewInterview;

  fn from_draft(id: i64, draft: NewInterview) -> Self {
    Self {
      id,
      round: draft.round,
      candidate_id: draft.candidate_id,
      employee_id: draft.employee_id,
    }
  }
}
