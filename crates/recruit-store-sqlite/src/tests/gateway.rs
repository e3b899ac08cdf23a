//! Storage-gateway behaviour of `SqliteStore`, without integrity rules.

use recruit_core::{
  model::{Candidate, Interview},
  store::{
    CandidateFilter, EmployeeFilter, InterviewFilter, Page, PersonKey,
    RecruitStore, StoreError,
  },
};

use super::{candidate, employee, interview, store};

// ─── Candidates ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_assigns_sequential_ids() {
  let s = store().await;

  let a = s.insert_candidate(candidate("A", "a@x.io", "active")).await.unwrap();
  let b = s.insert_candidate(candidate("B", "b@x.io", "active")).await.unwrap();
  assert_eq!(a.id, 1);
  assert_eq!(b.id, 2);

  let fetched = s.get_candidate(b.id).await.unwrap().unwrap();
  assert_eq!(fetched, b);
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert!(s.get_candidate(42).await.unwrap().is_none());
  assert!(s.get_employee(42).await.unwrap().is_none());
  assert!(s.get_interview(42).await.unwrap().is_none());
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
  let s = store().await;
  let a = s.insert_candidate(candidate("A", "a@x.io", "active")).await.unwrap();
  assert_eq!(s.delete_candidate(&PersonKey::Id(a.id)).await.unwrap(), 1);

  let b = s.insert_candidate(candidate("B", "b@x.io", "active")).await.unwrap();
  assert_eq!(b.id, a.id + 1);
}

#[tokio::test]
async fn duplicate_email_is_a_unique_violation() {
  let s = store().await;
  s.insert_candidate(candidate("A", "same@x.io", "active")).await.unwrap();

  let err = s
    .insert_candidate(candidate("B", "same@x.io", "inactive"))
    .await
    .unwrap_err();
  assert!(err.is_unique_violation(), "unexpected error: {err}");

  let all = s
    .list_candidates(&CandidateFilter::default(), Page::default())
    .await
    .unwrap();
  assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn same_email_allowed_across_tables() {
  let s = store().await;
  s.insert_candidate(candidate("A", "shared@x.io", "active")).await.unwrap();
  s.insert_employee(employee("A", "shared@x.io", "CEO")).await.unwrap();
}

#[tokio::test]
async fn list_applies_conjunction_of_filters() {
  let s = store().await;
  s.insert_candidate(candidate("ann", "ann1@x.io", "active")).await.unwrap();
  s.insert_candidate(candidate("ann", "ann2@x.io", "pre-hire")).await.unwrap();
  s.insert_candidate(candidate("bob", "bob@x.io", "active")).await.unwrap();

  let by_name = CandidateFilter { name: Some("ann".into()), ..Default::default() };
  assert_eq!(s.list_candidates(&by_name, Page::default()).await.unwrap().len(), 2);

  let both = CandidateFilter {
    name:   Some("ann".into()),
    status: Some("active".into()),
    ..Default::default()
  };
  let rows = s.list_candidates(&both, Page::default()).await.unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0].email, "ann1@x.io");

  let none = CandidateFilter {
    name:   Some("bob".into()),
    status: Some("pre-hire".into()),
    ..Default::default()
  };
  assert!(s.list_candidates(&none, Page::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn list_applies_offset_then_limit_in_id_order() {
  let s = store().await;
  for i in 0..5 {
    s.insert_employee(employee("e", &format!("e{i}@x.io"), "Developer"))
      .await
      .unwrap();
  }

  let page = Page { offset: 1, limit: 2 };
  let rows = s.list_employees(&EmployeeFilter::default(), page).await.unwrap();
  let ids: Vec<i64> = rows.iter().map(|e| e.id).collect();
  assert_eq!(ids, vec![2, 3]);

  let past_end = Page { offset: 10, limit: 2 };
  assert!(
    s.list_employees(&EmployeeFilter::default(), past_end)
      .await
      .unwrap()
      .is_empty()
  );
}

#[tokio::test]
async fn find_returns_first_match() {
  let s = store().await;
  s.insert_employee(employee("Zed", "z1@x.io", "Designer")).await.unwrap();
  s.insert_employee(employee("Zed", "z2@x.io", "Designer")).await.unwrap();

  let filter = EmployeeFilter { name: Some("Zed".into()), ..Default::default() };
  let found = s.find_employee(&filter).await.unwrap().unwrap();
  assert_eq!(found.id, 1);

  let missing = EmployeeFilter::by_email("nobody@x.io");
  assert!(s.find_employee(&missing).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_by_email_removes_only_that_row() {
  let s = store().await;
  s.insert_candidate(candidate("A", "a@x.io", "active")).await.unwrap();
  s.insert_candidate(candidate("B", "b@x.io", "active")).await.unwrap();

  let removed = s
    .delete_candidate(&PersonKey::Email("a@x.io".into()))
    .await
    .unwrap();
  assert_eq!(removed, 1);

  let again = s
    .delete_candidate(&PersonKey::Email("a@x.io".into()))
    .await
    .unwrap();
  assert_eq!(again, 0);

  assert!(s.get_candidate(2).await.unwrap().is_some());
}

#[tokio::test]
async fn replace_rewrites_every_column() {
  let s = store().await;
  let c = s.insert_candidate(candidate("A", "a@x.io", "pre-hire")).await.unwrap();

  let replaced = Candidate {
    id:     c.id,
    name:   "Alice".into(),
    email:  "alice@x.io".into(),
    status: "active".into(),
  };
  assert_eq!(s.replace_candidate(replaced.clone()).await.unwrap(), 1);
  assert_eq!(s.get_candidate(c.id).await.unwrap().unwrap(), replaced);
}

#[tokio::test]
async fn replace_onto_taken_email_is_a_unique_violation() {
  let s = store().await;
  s.insert_candidate(candidate("A", "a@x.io", "active")).await.unwrap();
  let b = s.insert_candidate(candidate("B", "b@x.io", "active")).await.unwrap();

  let err = s
    .replace_candidate(Candidate { email: "a@x.io".into(), ..b.clone() })
    .await
    .unwrap_err();
  assert!(err.is_unique_violation());
  assert_eq!(s.get_candidate(b.id).await.unwrap().unwrap(), b);
}

#[tokio::test]
async fn replace_of_deleted_row_writes_nothing() {
  let s = store().await;
  let c = s.insert_candidate(candidate("A", "a@x.io", "active")).await.unwrap();
  s.delete_candidate(&PersonKey::Id(c.id)).await.unwrap();

  assert_eq!(s.replace_candidate(c.clone()).await.unwrap(), 0);
  assert!(s.get_candidate(c.id).await.unwrap().is_none());

  let next = s.insert_candidate(candidate("B", "b@x.io", "active")).await.unwrap();
  assert_eq!(next.id, c.id + 1);
}

// ─── Interviews ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn interview_filters_by_pair() {
  let s = store().await;
  s.insert_candidate(candidate("C1", "c1@x.io", "active")).await.unwrap();
  s.insert_candidate(candidate("C2", "c2@x.io", "active")).await.unwrap();
  s.insert_employee(employee("E1", "e1@x.io", "CEO")).await.unwrap();

  s.insert_interview(interview(1, 1, 1)).await.unwrap();
  s.insert_interview(interview(2, 2, 1)).await.unwrap();

  let pair = s.find_interview(&InterviewFilter::pair(2, 1)).await.unwrap().unwrap();
  assert_eq!(pair.round, 2);
  assert!(s.find_interview(&InterviewFilter::pair(1, 2)).await.unwrap().is_none());

  let by_employee = s
    .list_interviews(&InterviewFilter::by_employee(1), Page::default())
    .await
    .unwrap();
  assert_eq!(by_employee.len(), 2);

  let round_one = InterviewFilter { round: Some(1), ..Default::default() };
  let rows = s.list_interviews(&round_one, Page::default()).await.unwrap();
  assert_eq!(rows, vec![Interview { id: 1, round: 1, candidate_id: 1, employee_id: 1 }]);
}

#[tokio::test]
async fn interview_foreign_keys_are_enforced() {
  let s = store().await;
  let err = s.insert_interview(interview(1, 9, 9)).await.unwrap_err();
  assert!(!err.is_unique_violation(), "unexpected error: {err}");
}

#[tokio::test]
async fn delete_interview_reports_rows_removed() {
  let s = store().await;
  s.insert_candidate(candidate("C", "c@x.io", "active")).await.unwrap();
  s.insert_employee(employee("E", "e@x.io", "CEO")).await.unwrap();
  let i = s.insert_interview(interview(1, 1, 1)).await.unwrap();

  assert_eq!(s.delete_interview(i.id).await.unwrap(), 1);
  assert_eq!(s.delete_interview(i.id).await.unwrap(), 0);
}
