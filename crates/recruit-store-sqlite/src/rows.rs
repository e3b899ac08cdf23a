//! SQL text, parameter binding and row mapping for the three tables.
//!
//! Filters use the `(?n IS NULL OR col = ?n)` form so each statement is
//! static and an unset filter binds `NULL`.

use recruit_core::{
  model::{Candidate, Employee, Interview},
  store::{CandidateFilter, EmployeeFilter, InterviewFilter, Page, PersonKey},
};
use rusqlite::{Row, types::Value};

// ─── Candidates ──────────────────────────────────────────────────────────────

pub const CANDIDATE_BY_ID: &str =
  "SELECT id, name, email, status FROM candidates WHERE id = ?1";

pub const CANDIDATE_SELECT: &str = "
  SELECT id, name, email, status FROM candidates
  WHERE (?1 IS NULL OR name = ?1)
    AND (?2 IS NULL OR email = ?2)
    AND (?3 IS NULL OR status = ?3)
  ORDER BY id
  LIMIT ?4 OFFSET ?5";

pub const CANDIDATE_INSERT: &str =
  "INSERT INTO candidates (name, email, status) VALUES (?1, ?2, ?3)";

pub const CANDIDATE_REPLACE: &str =
  "UPDATE candidates SET name = ?2, email = ?3, status = ?4 WHERE id = ?1";

pub fn candidate(row: &Row<'_>) -> rusqlite::Result<Candidate> {
  Ok(Candidate {
    id:     row.get(0)?,
    name:   row.get(1)?,
    email:  row.get(2)?,
    status: row.get(3)?,
  })
}

pub fn candidate_filter(f: &CandidateFilter, page: Page) -> Vec<Value> {
  let mut params = vec![text(&f.name), text(&f.email), text(&f.status)];
  params.extend(window(page));
  params
}

// ─── Employees ───────────────────────────────────────────────────────────────

pub const EMPLOYEE_BY_ID: &str =
  "SELECT id, name, email, designation FROM employees WHERE id = ?1";

pub const EMPLOYEE_SELECT: &str = "
  SELECT id, name, email, designation FROM employees
  WHERE (?1 IS NULL OR name = ?1)
    AND (?2 IS NULL OR email = ?2)
    AND (?3 IS NULL OR designation = ?3)
  ORDER BY id
  LIMIT ?4 OFFSET ?5";

pub const EMPLOYEE_INSERT: &str =
  "INSERT INTO employees (name, email, designation) VALUES (?1, ?2, ?3)";

pub const EMPLOYEE_REPLACE: &str =
  "UPDATE employees SET name = ?2, email = ?3, designation = ?4 WHERE id = ?1";

pub fn employee(row: &Row<'_>) -> rusqlite::Result<Employee> {
  Ok(Employee {
    id:          row.get(0)?,
    name:        row.get(1)?,
    email:       row.get(2)?,
    designation: row.get(3)?,
  })
}

pub fn employee_filter(f: &EmployeeFilter, page: Page) -> Vec<Value> {
  let mut params = vec![text(&f.name), text(&f.email), text(&f.designation)];
  params.extend(window(page));
  params
}

// ─── Interviews ──────────────────────────────────────────────────────────────

pub const INTERVIEW_BY_ID: &str =
  "SELECT id, round, candidate_id, employee_id FROM interviews WHERE id = ?1";

pub const INTERVIEW_SELECT: &str = "
  SELECT id, round, candidate_id, employee_id FROM interviews
  WHERE (?1 IS NULL OR round = ?1)
    AND (?2 IS NULL OR candidate_id = ?2)
    AND (?3 IS NULL OR employee_id = ?3)
  ORDER BY id
  LIMIT ?4 OFFSET ?5";

pub const INTERVIEW_INSERT: &str =
  "INSERT INTO interviews (round, candidate_id, employee_id) VALUES (?1, ?2, ?3)";

pub const INTERVIEW_REPLACE: &str = "
  UPDATE interviews SET round = ?2, candidate_id = ?3, employee_id = ?4
  WHERE id = ?1";

pub const INTERVIEW_DELETE: &str = "DELETE FROM interviews WHERE id = ?1";

pub fn interview(row: &Row<'_>) -> rusqlite::Result<Interview> {
  Ok(Interview {
    id:           row.get(0)?,
    round:        row.get(1)?,
    candidate_id: row.get(2)?,
    employee_id:  row.get(3)?,
  })
}

pub fn interview_filter(f: &InterviewFilter, page: Page) -> Vec<Value> {
  let mut params = vec![
    integer(f.round),
    integer(f.candidate_id),
    integer(f.employee_id),
  ];
  params.extend(window(page));
  params
}

// ─── Deletion keys ───────────────────────────────────────────────────────────

/// `DELETE` statement and its single parameter for a person table.
pub fn person_delete(table: &str, key: &PersonKey) -> (String, Value) {
  match key {
    PersonKey::Id(id) => {
      (format!("DELETE FROM {table} WHERE id = ?1"), Value::Integer(*id))
    }
    PersonKey::Email(email) => (
      format!("DELETE FROM {table} WHERE email = ?1"),
      Value::Text(email.clone()),
    ),
  }
}

// ─── Values ──────────────────────────────────────────────────────────────────

fn text(v: &Option<String>) -> Value {
  v.clone().map_or(Value::Null, Value::Text)
}

fn integer(v: Option<i64>) -> Value { v.map_or(Value::Null, Value::Integer) }

fn clamp(n: usize) -> i64 { i64::try_from(n).unwrap_or(i64::MAX) }

fn window(page: Page) -> [Value; 2] {
  [Value::Integer(clamp(page.limit)), Value::Integer(clamp(page.offset))]
}

/// The window used when only the first match is wanted.
pub fn first() -> Page { Page { offset: 0, limit: 1 } }
