//! [`Registry`]: the integrity rules layered over a [`RecruitStore`].
//!
//! Every operation re-reads the state it depends on, decides, then performs at
//! most one write. Check-then-act sequences are not transactional; the
//! storage-level `UNIQUE` on email is the authoritative guard, and a
//! violation of it surfaces as [`Error::DuplicateEmail`].

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::{
  Error, Result, Write,
  model::{
    Candidate, Employee, Entity, EntityKind, Interview, NewCandidate,
    NewEmployee, NewInterview,
  },
  store::{
    CandidateFilter, EmployeeFilter, InterviewFilter, Page, PersonKey,
    RecruitStore, StoreError,
  },
  validate::Validate,
};

fn store_err<E: StoreError>(e: E) -> Error { Error::Store(Box::new(e)) }

/// Map a failed insert or replace of a person row, turning a uniqueness
/// violation into the same error the pre-check would have produced.
fn person_write_err<E: StoreError>(
  kind: EntityKind,
  write: Write,
) -> impl FnOnce(E) -> Error {
  move |e| {
    if e.is_unique_violation() {
      warn!(entity = %kind, "email uniqueness enforced by store");
      Error::DuplicateEmail(kind, write)
    } else {
      store_err(e)
    }
  }
}

fn admit<E: Entity>(draft: &E::Draft) -> Result<()> {
  draft.validate().map_err(|e| {
    debug!(entity = %E::KIND, error = %e, "draft rejected");
    Error::from(e)
  })
}

/// The integrity rules engine for candidates, employees and interviews.
///
/// Cloning is cheap; the store handle is shared.
pub struct Registry<S> {
  store: Arc<S>,
}

impl<S> Clone for Registry<S> {
  fn clone(&self) -> Self { Self { store: Arc::clone(&self.store) } }
}

impl<S: RecruitStore> Registry<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  // ── Candidates ────────────────────────────────────────────────────────────

  #[instrument(skip(self, input))]
  pub async fn create_candidate(&self, input: NewCandidate) -> Result<Candidate> {
    admit::<Candidate>(&input)?;

    let taken = self
      .store
      .find_candidate(&CandidateFilter::by_email(&input.email))
      .await
      .map_err(store_err)?;
    if taken.is_some() {
      warn!(email = %input.email, "candidate email already registered");
      return Err(Error::DuplicateEmail(EntityKind::Candidate, Write::Create));
    }

    let candidate = self
      .store
      .insert_candidate(input)
      .await
      .map_err(person_write_err(EntityKind::Candidate, Write::Create))?;
    info!(id = candidate.id, "candidate created");
    Ok(candidate)
  }

  #[instrument(skip(self))]
  pub async fn get_candidate(&self, id: i64) -> Result<Candidate> {
    self
      .store
      .get_candidate(id)
      .await
      .map_err(store_err)?
      .ok_or(Error::NotFound(EntityKind::Candidate))
  }

  /// The first candidate matching `filter`.
  #[instrument(skip(self))]
  pub async fn find_candidate(&self, filter: &CandidateFilter) -> Result<Candidate> {
    self
      .store
      .find_candidate(filter)
      .await
      .map_err(store_err)?
      .ok_or(Error::NotFound(EntityKind::Candidate))
  }

  #[instrument(skip(self))]
  pub async fn list_candidates(
    &self,
    filter: &CandidateFilter,
    page: Page,
  ) -> Result<Vec<Candidate>> {
    let rows = self
      .store
      .list_candidates(filter, page)
      .await
      .map_err(store_err)?;
    debug!(count = rows.len(), "candidates listed");
    Ok(rows)
  }

  /// Replace every field of candidate `id` with `input`.
  #[instrument(skip(self, input))]
  pub async fn update_candidate(&self, id: i64, input: NewCandidate) -> Result<()> {
    self.get_candidate(id).await?;
    admit::<Candidate>(&input)?;

    let owner = self
      .store
      .find_candidate(&CandidateFilter::by_email(&input.email))
      .await
      .map_err(store_err)?;
    if owner.is_some_and(|c| c.id != id) {
      warn!(email = %input.email, "candidate email owned by another row");
      return Err(Error::DuplicateEmail(EntityKind::Candidate, Write::Update));
    }

    let written = self
      .store
      .replace_candidate(Candidate::from_draft(id, input))
      .await
      .map_err(person_write_err(EntityKind::Candidate, Write::Update))?;
    if written == 0 {
      warn!(id, "candidate deleted before update");
      return Err(Error::NotFound(EntityKind::Candidate));
    }
    info!(id, "candidate updated");
    Ok(())
  }

  /// Returns the number of rows removed; zero means the delete did not take.
  #[instrument(skip(self))]
  pub async fn delete_candidate(&self, id: i64) -> Result<usize> {
    self.get_candidate(id).await?;
    self.remove_candidate(id, PersonKey::Id(id)).await
  }

  #[instrument(skip(self))]
  pub async fn delete_candidate_by_email(&self, email: &str) -> Result<usize> {
    let candidate = self.find_candidate(&CandidateFilter::by_email(email)).await?;
    self
      .remove_candidate(candidate.id, PersonKey::Email(email.to_owned()))
      .await
  }

  async fn remove_candidate(&self, id: i64, key: PersonKey) -> Result<usize> {
    let referencing = self
      .store
      .find_interview(&InterviewFilter::by_candidate(id))
      .await
      .map_err(store_err)?;
    if let Some(interview) = referencing {
      warn!(id, interview = interview.id, "candidate has a scheduled interview");
      return Err(Error::ReferencedByInterview(EntityKind::Candidate));
    }

    let removed = self.store.delete_candidate(&key).await.map_err(store_err)?;
    info!(id, removed, "candidate deleted");
    Ok(removed)
  }

  // ── Employees ─────────────────────────────────────────────────────────────

  #[instrument(skip(self, input))]
  pub async fn create_employee(&self, input: NewEmployee) -> Result<Employee> {
    admit::<Employee>(&input)?;

    let taken = self
      .store
      .find_employee(&EmployeeFilter::by_email(&input.email))
      .await
      .map_err(store_err)?;
    if taken.is_some() {
      warn!(email = %input.email, "employee email already registered");
      return Err(Error::DuplicateEmail(EntityKind::Employee, Write::Create));
    }

    let employee = self
      .store
      .insert_employee(input)
      .await
      .map_err(person_write_err(EntityKind::Employee, Write::Create))?;
    info!(id = employee.id, "employee created");
    Ok(employee)
  }

  #[instrument(skip(self))]
  pub async fn get_employee(&self, id: i64) -> Result<Employee> {
    self
      .store
      .get_employee(id)
      .await
      .map_err(store_err)?
      .ok_or(Error::NotFound(EntityKind::Employee))
  }

  #[instrument(skip(self))]
  pub async fn find_employee(&self, filter: &EmployeeFilter) -> Result<Employee> {
    self
      .store
      .find_employee(filter)
      .await
      .map_err(store_err)?
      .ok_or(Error::NotFound(EntityKind::Employee))
  }

  #[instrument(skip(self))]
  pub async fn list_employees(
    &self,
    filter: &EmployeeFilter,
    page: Page,
  ) -> Result<Vec<Employee>> {
    let rows = self
      .store
      .list_employees(filter, page)
      .await
      .map_err(store_err)?;
    debug!(count = rows.len(), "employees listed");
    Ok(rows)
  }

  #[instrument(skip(self, input))]
  pub async fn update_employee(&self, id: i64, input: NewEmployee) -> Result<()> {
    self.get_employee(id).await?;
    admit::<Employee>(&input)?;

    let owner = self
      .store
      .find_employee(&EmployeeFilter::by_email(&input.email))
      .await
      .map_err(store_err)?;
    if owner.is_some_and(|e| e.id != id) {
      warn!(email = %input.email, "employee email owned by another row");
      return Err(Error::DuplicateEmail(EntityKind::Employee, Write::Update));
    }

    let written = self
      .store
      .replace_employee(Employee::from_draft(id, input))
      .await
      .map_err(person_write_err(EntityKind::Employee, Write::Update))?;
    if written == 0 {
      warn!(id, "employee deleted before update");
      return Err(Error::NotFound(EntityKind::Employee));
    }
    info!(id, "employee updated");
    Ok(())
  }

  #[instrument(skip(self))]
  pub async fn delete_employee(&self, id: i64) -> Result<usize> {
    self.get_employee(id).await?;
    self.remove_employee(id, PersonKey::Id(id)).await
  }

  #[instrument(skip(self))]
  pub async fn delete_employee_by_email(&self, email: &str) -> Result<usize> {
    let employee = self.find_employee(&EmployeeFilter::by_email(email)).await?;
    self
      .remove_employee(employee.id, PersonKey::Email(email.to_owned()))
      .await
  }

  async fn remove_employee(&self, id: i64, key: PersonKey) -> Result<usize> {
    let referencing = self
      .store
      .find_interview(&InterviewFilter::by_employee(id))
      .await
      .map_err(store_err)?;
    if let Some(interview) = referencing {
      warn!(id, interview = interview.id, "employee is an interviewer");
      return Err(Error::ReferencedByInterview(EntityKind::Employee));
    }

    let removed = self.store.delete_employee(&key).await.map_err(store_err)?;
    info!(id, removed, "employee deleted");
    Ok(removed)
  }

  // ── Interviews ────────────────────────────────────────────────────────────

  #[instrument(skip(self))]
  pub async fn create_interview(&self, input: NewInterview) -> Result<Interview> {
    admit::<Interview>(&input)?;

    let scheduled = self
      .store
      .find_interview(&InterviewFilter::pair(input.candidate_id, input.employee_id))
      .await
      .map_err(store_err)?;
    if let Some(existing) = scheduled {
      warn!(existing = existing.id, "interview already scheduled for pair");
      return Err(Error::DuplicateInterview);
    }

    self.ensure_participants(&input).await?;

    let interview = self.store.insert_interview(input).await.map_err(store_err)?;
    info!(id = interview.id, "interview created");
    Ok(interview)
  }

  #[instrument(skip(self))]
  pub async fn get_interview(&self, id: i64) -> Result<Interview> {
    self
      .store
      .get_interview(id)
      .await
      .map_err(store_err)?
      .ok_or(Error::NotFound(EntityKind::Interview))
  }

  #[instrument(skip(self))]
  pub async fn find_interview(&self, filter: &InterviewFilter) -> Result<Interview> {
    self
      .store
      .find_interview(filter)
      .await
      .map_err(store_err)?
      .ok_or(Error::NotFound(EntityKind::Interview))
  }

  #[instrument(skip(self))]
  pub async fn list_interviews(
    &self,
    filter: &InterviewFilter,
    page: Page,
  ) -> Result<Vec<Interview>> {
    let rows = self
      .store
      .list_interviews(filter, page)
      .await
      .map_err(store_err)?;
    debug!(count = rows.len(), "interviews listed");
    Ok(rows)
  }

  /// Replace round, candidate and employee of interview `id`.
  ///
  /// Unlike [`Self::create_interview`] this does not reject a pair that is
  /// already scheduled under another id.
  #[instrument(skip(self))]
  pub async fn update_interview(&self, id: i64, input: NewInterview) -> Result<()> {
    self.get_interview(id).await?;
    admit::<Interview>(&input)?;
    self.ensure_participants(&input).await?;

    let written = self
      .store
      .replace_interview(Interview::from_draft(id, input))
      .await
      .map_err(store_err)?;
    if written == 0 {
      warn!(id, "interview deleted before update");
      return Err(Error::NotFound(EntityKind::Interview));
    }
    info!(id, "interview updated");
    Ok(())
  }

  #[instrument(skip(self))]
  pub async fn delete_interview(&self, id: i64) -> Result<usize> {
    self.get_interview(id).await?;
    let removed = self.store.delete_interview(id).await.map_err(store_err)?;
    info!(id, removed, "interview deleted");
    Ok(removed)
  }

  /// Both sides of the interview must exist; the candidate is checked first.
  async fn ensure_participants(&self, input: &NewInterview) -> Result<()> {
    let candidate = self
      .store
      .get_candidate(input.candidate_id)
      .await
      .map_err(store_err)?;
    if candidate.is_none() {
      warn!(candidate_id = input.candidate_id, "unknown candidate");
      return Err(Error::UnknownCandidate);
    }

    let employee = self
      .store
      .get_employee(input.employee_id)
      .await
      .map_err(store_err)?;
    if employee.is_none() {
      warn!(employee_id = input.employee_id, "unknown employee");
      return Err(Error::UnknownEmployee);
    }
    Ok(())
  }
}
