//! Handlers for interview endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/interview/{id}` | 404 if not found |
//! | `GET`    | `/interviews/` | Optional `round`, `candidate_id`, `employee_id`, `skip`, `limit` |
//! | `POST`   | `/interview/` | 400 if the pair is already scheduled or a side is unknown |
//! | `PUT`    | `/interview/{id}` | Full replace; the pair is not re-checked |
//! | `DELETE` | `/interview/{id}` | Always allowed once found |

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use recruit_core::{
  Registry,
  model::{Interview, NewInterview},
  store::{InterviewFilter, RecruitStore},
};
use serde::Deserialize;

use crate::{Detail, deleted, error::ApiError, int_filter, non_empty, page, updated};

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub round:        Option<i64>,
  pub candidate_id: Option<i64>,
  pub employee_id:  Option<i64>,
  pub skip:         Option<usize>,
  pub limit:        Option<usize>,
}

/// `GET /interviews/[?round=..][&candidate_id=..][&employee_id=..][&skip=..][&limit=..]`
pub async fn list<S: RecruitStore>(
  State(registry): State<Registry<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Interview>>, ApiError> {
  let filter = InterviewFilter {
    round:        int_filter(params.round),
    candidate_id: int_filter(params.candidate_id),
    employee_id:  int_filter(params.employee_id),
  };
  let rows = registry
    .list_interviews(&filter, page(params.skip, params.limit))
    .await?;
  non_empty(rows)
}

/// `GET /interview/{id}`
pub async fn get_one<S: RecruitStore>(
  State(registry): State<Registry<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Interview>, ApiError> {
  Ok(Json(registry.get_interview(id).await?))
}

/// `POST /interview/`
pub async fn create<S: RecruitStore>(
  State(registry): State<Registry<S>>,
  Json(body): Json<NewInterview>,
) -> Result<impl IntoResponse, ApiError> {
  let interview = registry.create_interview(body).await?;
  Ok((StatusCode::CREATED, Json(interview)))
}

/// `PUT /interview/{id}`
pub async fn update<S: RecruitStore>(
  State(registry): State<Registry<S>>,
  Path(id): Path<i64>,
  Json(body): Json<NewInterview>,
) -> Result<Json<Detail>, ApiError> {
  registry.update_interview(id, body).await?;
  Ok(updated::<Interview>())
}

/// `DELETE /interview/{id}`
pub async fn delete_one<S: RecruitStore>(
  State(registry): State<Registry<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Detail>, ApiError> {
  let removed = registry.delete_interview(id).await?;
  Ok(deleted::<Interview>(removed))
}
