//! Handlers for candidate endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/candidate/{id}` | 404 if not found |
//! | `GET`    | `/candidates/` | Optional `name`, `email`, `status`, `skip`, `limit`; 404 if empty |
//! | `POST`   | `/candidate/` | Body: [`NewCandidate`]; returns 201 + stored candidate |
//! | `PUT`    | `/candidate/{id}` | Body: [`NewCandidate`]; full replace |
//! | `DELETE` | `/candidate/{id}` | 400 while an interview references it |
//! | `DELETE` | `/candidate/?email=` | Same, addressed by email |

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use recruit_core::{
  Registry,
  model::{Candidate, NewCandidate},
  store::{CandidateFilter, RecruitStore},
};
use serde::Deserialize;

use crate::{Detail, deleted, error::ApiError, non_empty, page, text_filter, updated};

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub name:   Option<String>,
  pub email:  Option<String>,
  /// Hiring status, e.g. `pre-hire`, `active`, `inactive`.
  pub status: Option<String>,
  pub skip:   Option<usize>,
  pub limit:  Option<usize>,
}

/// `GET /candidates/[?name=...][&email=...][&status=...][&skip=..][&limit=..]`
pub async fn list<S: RecruitStore>(
  State(registry): State<Registry<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Candidate>>, ApiError> {
  let filter = CandidateFilter {
    name:   text_filter(params.name),
    email:  text_filter(params.email),
    status: text_filter(params.status),
  };
  let rows = registry
    .list_candidates(&filter, page(params.skip, params.limit))
    .await?;
  non_empty(rows)
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /candidate/{id}`
pub async fn get_one<S: RecruitStore>(
  State(registry): State<Registry<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Candidate>, ApiError> {
  Ok(Json(registry.get_candidate(id).await?))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /candidate/`: returns 201 with the stored [`Candidate`].
pub async fn create<S: RecruitStore>(
  State(registry): State<Registry<S>>,
  Json(body): Json<NewCandidate>,
) -> Result<impl IntoResponse, ApiError> {
  let candidate = registry.create_candidate(body).await?;
  Ok((StatusCode::CREATED, Json(candidate)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /candidate/{id}`
pub async fn update<S: RecruitStore>(
  State(registry): State<Registry<S>>,
  Path(id): Path<i64>,
  Json(body): Json<NewCandidate>,
) -> Result<Json<Detail>, ApiError> {
  registry.update_candidate(id, body).await?;
  Ok(updated::<Candidate>())
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /candidate/{id}`
pub async fn delete_one<S: RecruitStore>(
  State(registry): State<Registry<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Detail>, ApiError> {
  let removed = registry.delete_candidate(id).await?;
  Ok(deleted::<Candidate>(removed))
}

#[derive(Debug, Deserialize)]
pub struct EmailParams {
  pub email: String,
}

/// `DELETE /candidate/?email=<email>`
pub async fn delete_by_email<S: RecruitStore>(
  State(registry): State<Registry<S>>,
  Query(params): Query<EmailParams>,
) -> Result<Json<Detail>, ApiError> {
  let removed = registry.delete_candidate_by_email(&params.email).await?;
  Ok(deleted::<Candidate>(removed))
}
