//! The `RecruitStore` trait and supporting query types.
//!
//! The trait is the storage gateway: implemented by backends (e.g.
//! `recruit-store-sqlite`) and consumed by [`crate::registry::Registry`],
//! which layers the integrity rules on top. Backends enforce no business
//! rules beyond what their schema does on its own.

use std::future::Future;

use crate::model::{
  Candidate, Employee, Interview, NewCandidate, NewEmployee, NewInterview,
};

// ─── Query types ─────────────────────────────────────────────────────────────

/// Equality filters over the `candidates` table. `None` means no constraint
/// on that column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateFilter {
  pub name:   Option<String>,
  pub email:  Option<String>,
  pub status: Option<String>,
}

impl CandidateFilter {
  pub fn by_email(email: impl Into<String>) -> Self {
    Self { email: Some(email.into()), ..Self::default() }
  }
}

/// Equality filters over the `employees` table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
  pub name:        Option<String>,
  pub email:       Option<String>,
  pub designation: Option<String>,
}

impl EmployeeFilter {
  pub fn by_email(email: impl Into<String>) -> Self {
    Self { email: Some(email.into()), ..Self::default() }
  }
}

/// Equality filters over the `interviews` table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterviewFilter {
  pub round:        Option<i64>,
  pub candidate_id: Option<i64>,
  pub employee_id:  Option<i64>,
}

impl InterviewFilter {
  pub fn by_candidate(candidate_id: i64) -> Self {
    Self { candidate_id: Some(candidate_id), ..Self::default() }
  }

  pub fn by_employee(employee_id: i64) -> Self {
    Self { employee_id: Some(employee_id), ..Self::default() }
  }

  /// The (candidate, employee) key that may be scheduled at most once.
  pub fn pair(candidate_id: i64, employee_id: i64) -> Self {
    Self {
      candidate_id: Some(candidate_id),
      employee_id: Some(employee_id),
      ..Self::default()
    }
  }
}

/// Offset/limit window applied after filtering, in id order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
  pub offset: usize,
  pub limit:  usize,
}

impl Default for Page {
  fn default() -> Self { Self { offset: 0, limit: 100 } }
}

/// How a candidate or employee row is addressed for deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonKey {
  Id(i64),
  Email(String),
}

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Classification the integrity rules need from a backend's error type.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  /// The write was refused by a storage-level uniqueness constraint.
  fn is_unique_violation(&self) -> bool;
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a recruiting-pipeline storage backend.
///
/// Per table it offers fetch-by-id, fetch-first-by-filter, filtered listing,
/// insert-returning-identity, delete-by-key and replace-by-identity. Nothing
/// is cached between calls.
pub trait RecruitStore: Send + Sync {
  type Error: StoreError;

  // ── Candidates ────────────────────────────────────────────────────────

  fn get_candidate(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Candidate>, Self::Error>> + Send + '_;

  /// The lowest-id candidate matching `filter`, if any.
  fn find_candidate<'a>(
    &'a self,
    filter: &'a CandidateFilter,
  ) -> impl Future<Output = Result<Option<Candidate>, Self::Error>> + Send + 'a;

  fn list_candidates<'a>(
    &'a self,
    filter: &'a CandidateFilter,
    page: Page,
  ) -> impl Future<Output = Result<Vec<Candidate>, Self::Error>> + Send + 'a;

  /// Persist a new candidate; the store assigns the id.
  fn insert_candidate(
    &self,
    input: NewCandidate,
  ) -> impl Future<Output = Result<Candidate, Self::Error>> + Send + '_;

  /// Returns the number of rows removed.
  fn delete_candidate<'a>(
    &'a self,
    key: &'a PersonKey,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + 'a;

  /// Replace every column of the existing row with `candidate.id`. Returns
  /// the number of rows written; zero if the row is gone, which is never
  /// re-created.
  fn replace_candidate(
    &self,
    candidate: Candidate,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  // ── Employees ─────────────────────────────────────────────────────────

  fn get_employee(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + '_;

  fn find_employee<'a>(
    &'a self,
    filter: &'a EmployeeFilter,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + 'a;

  fn list_employees<'a>(
    &'a self,
    filter: &'a EmployeeFilter,
    page: Page,
  ) -> impl Future<Output = Result<Vec<Employee>, Self::Error>> + Send + 'a;

  fn insert_employee(
    &self,
    input: NewEmployee,
  ) -> impl Future<Output = Result<Employee, Self::Error>> + Send + '_;

  fn delete_employee<'a>(
    &'a self,
    key: &'a PersonKey,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + 'a;

  fn replace_employee(
    &self,
    employee: Employee,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  // ── Interviews ────────────────────────────────────────────────────────

  fn get_interview(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Interview>, Self::Error>> + Send + '_;

  fn find_interview<'a>(
    &'a self,
    filter: &'a InterviewFilter,
  ) -> impl Future<Output = Result<Option<Interview>, Self::Error>> + Send + 'a;

  fn list_interviews<'a>(
    &'a self,
    filter: &'a InterviewFilter,
    page: Page,
  ) -> impl Future<Output = Result<Vec<Interview>, Self::Error>> + Send + 'a;

  fn insert_interview(
    &self,
    input: NewInterview,
  ) -> impl Future<Output = Result<Interview, Self::Error>> + Send + '_;

  fn delete_interview(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  fn replace_interview(
    &self,
    interview: Interview,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;
}
