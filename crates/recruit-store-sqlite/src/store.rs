//! [`SqliteStore`]: the SQLite implementation of [`RecruitStore`].

use std::path::Path;

use recruit_core::{
  model::{
    Candidate, Employee, Entity, Interview, NewCandidate, NewEmployee,
    NewInterview,
  },
  store::{
    CandidateFilter, EmployeeFilter, InterviewFilter, Page, PersonKey,
    RecruitStore,
  },
};
use rusqlite::{OptionalExtension as _, Row, params_from_iter, types::Value};

use crate::{Error, Result, rows, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A recruiting-pipeline store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref().to_path_buf();
    let conn = tokio_rusqlite::Connection::open(&path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    tracing::debug!(path = %path.display(), "store opened");
    Ok(store)
  }

  /// Open an in-memory store.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn fetch_one<T, F>(
    &self,
    sql: &'static str,
    params: Vec<Value>,
    map: F,
  ) -> Result<Option<T>>
  where
    T: Send + 'static,
    F: FnOnce(&Row<'_>) -> rusqlite::Result<T> + Send + 'static,
  {
    let row = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(sql, params_from_iter(params), map)
            .optional()?,
        )
      })
      .await?;
    Ok(row)
  }

  async fn fetch_all<T, F>(
    &self,
    sql: &'static str,
    params: Vec<Value>,
    map: F,
  ) -> Result<Vec<T>>
  where
    T: Send + 'static,
    F: FnMut(&Row<'_>) -> rusqlite::Result<T> + Send + 'static,
  {
    let rows = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare_cached(sql)?;
        let rows = stmt
          .query_map(params_from_iter(params), map)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  /// Run an `INSERT` and return the id SQLite assigned to the new row.
  async fn insert(&self, sql: &'static str, params: Vec<Value>) -> Result<i64> {
    self
      .conn
      .call(move |conn| {
        conn.execute(sql, params_from_iter(params))?;
        Ok(conn.last_insert_rowid())
      })
      .await
      .map_err(Error::classify)
  }

  /// Run a write and return the number of rows it touched.
  async fn execute(&self, sql: String, params: Vec<Value>) -> Result<usize> {
    self
      .conn
      .call(move |conn| Ok(conn.execute(&sql, params_from_iter(params))?))
      .await
      .map_err(Error::classify)
  }
}

// ─── RecruitStore impl ───────────────────────────────────────────────────────

impl RecruitStore for SqliteStore {
  type Error = Error;

  // ── Candidates ────────────────────────────────────────────────────────────

  async fn get_candidate(&self, id: i64) -> Result<Option<Candidate>> {
    self
      .fetch_one(rows::CANDIDATE_BY_ID, vec![Value::Integer(id)], rows::candidate)
      .await
  }

  async fn find_candidate(&self, filter: &CandidateFilter) -> Result<Option<Candidate>> {
    let params = rows::candidate_filter(filter, rows::first());
    self
      .fetch_one(rows::CANDIDATE_SELECT, params, rows::candidate)
      .await
  }

  async fn list_candidates(
    &self,
    filter: &CandidateFilter,
    page: Page,
  ) -> Result<Vec<Candidate>> {
    let params = rows::candidate_filter(filter, page);
    self
      .fetch_all(rows::CANDIDATE_SELECT, params, rows::candidate)
      .await
  }

  async fn insert_candidate(&self, input: NewCandidate) -> Result<Candidate> {
    let params = vec![
      Value::Text(input.name.clone()),
      Value::Text(input.email.clone()),
      Value::Text(input.status.clone()),
    ];
    let id = self.insert(rows::CANDIDATE_INSERT, params).await?;
    Ok(Candidate::from_draft(id, input))
  }

  async fn delete_candidate(&self, key: &PersonKey) -> Result<usize> {
    let (sql, param) = rows::person_delete("candidates", key);
    self.execute(sql, vec![param]).await
  }

  async fn replace_candidate(&self, candidate: Candidate) -> Result<usize> {
    let params = vec![
      Value::Integer(candidate.id),
      Value::Text(candidate.name),
      Value::Text(candidate.email),
      Value::Text(candidate.status),
    ];
    self.execute(rows::CANDIDATE_REPLACE.to_owned(), params).await
  }

  // ── Employees ─────────────────────────────────────────────────────────────

  async fn get_employee(&self, id: i64) -> Result<Option<Employee>> {
    self
      .fetch_one(rows::EMPLOYEE_BY_ID, vec![Value::Integer(id)], rows::employee)
      .await
  }

  async fn find_employee(&self, filter: &EmployeeFilter) -> Result<Option<Employee>> {
    let params = rows::employee_filter(filter, rows::first());
    self
      .fetch_one(rows::EMPLOYEE_SELECT, params, rows::employee)
      .await
  }

  async fn list_employees(
    &self,
    filter: &EmployeeFilter,
    page: Page,
  ) -> Result<Vec<Employee>> {
    let params = rows::employee_filter(filter, page);
    self
      .fetch_all(rows::EMPLOYEE_SELECT, params, rows::employee)
      .await
  }

  async fn insert_employee(&self, input: NewEmployee) -> Result<Employee> {
    let params = vec![
      Value::Text(input.name.clone()),
      Value::Text(input.email.clone()),
      Value::Text(input.designation.clone()),
    ];
    let id = self.insert(rows::EMPLOYEE_INSERT, params).await?;
    Ok(Employee::from_draft(id, input))
  }

  async fn delete_employee(&self, key: &PersonKey) -> Result<usize> {
    let (sql, param) = rows::person_delete("employees", key);
    self.execute(sql, vec![param]).await
  }

  async fn replace_employee(&self, employee: Employee) -> Result<usize> {
    let params = vec![
      Value::Integer(employee.id),
      Value::Text(employee.name),
      Value::Text(employee.email),
      Value::Text(employee.designation),
    ];
    self.execute(rows::EMPLOYEE_REPLACE.to_owned(), params).await
  }

  // ── Interviews ────────────────────────────────────────────────────────────

  async fn get_interview(&self, id: i64) -> Result<Option<Interview>> {
    self
      .fetch_one(rows::INTERVIEW_BY_ID, vec![Value::Integer(id)], rows::interview)
      .await
  }

  async fn find_interview(&self, filter: &InterviewFilter) -> Result<Option<Interview>> {
    let params = rows::interview_filter(filter, rows::first());
    self
      .fetch_one(rows::INTERVIEW_SELECT, params, rows::interview)
      .await
  }

  async fn list_interviews(
    &self,
    filter: &InterviewFilter,
    page: Page,
  ) -> Result<Vec<Interview>> {
    let params = rows::interview_filter(filter, page);
    self
      .fetch_all(rows::INTERVIEW_SELECT, params, rows::interview)
      .await
  }

  async fn insert_interview(&self, input: NewInterview) -> Result<Interview> {
    let params = vec![
      Value::Integer(input.round),
      Value::Integer(input.candidate_id),
      Value::Integer(input.employee_id),
    ];
    let id = self.insert(rows::INTERVIEW_INSERT, params).await?;
    Ok(Interview::from_draft(id, input))
  }

  async fn delete_interview(&self, id: i64) -> Result<usize> {
    self
      .execute(rows::INTERVIEW_DELETE.to_owned(), vec![Value::Integer(id)])
      .await
  }

  async fn replace_interview(&self, interview: Interview) -> Result<usize> {
    let params = vec![
      Value::Integer(interview.id),
      Value::Integer(interview.round),
      Value::Integer(interview.candidate_id),
      Value::Integer(interview.employee_id),
    ];
    self.execute(rows::INTERVIEW_REPLACE.to_owned(), params).await
  }
}
