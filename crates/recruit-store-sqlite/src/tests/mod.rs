//! Tests against an in-memory database.

mod gateway;

use recruit_core::model::{NewCandidate, NewEmployee, NewInterview};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn candidate(name: &str, email: &str, status: &str) -> NewCandidate {
  NewCandidate {
    name:   name.into(),
    email:  email.into(),
    status: status.into(),
  }
}

fn employee(name: &str, email: &str, designation: &str) -> NewEmployee {
  NewEmployee {
    name:        name.into(),
    email:       email.into(),
    designation: designation.into(),
  }
}

fn interview(round: i64, candidate_id: i64, employee_id: i64) -> NewInterview {
  NewInterview { round, candidate_id, employee_id }
}
