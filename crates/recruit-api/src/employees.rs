//! Handlers for employee endpoints.
//!
//! Same shape as the candidate endpoints, with `designation` in place of
//! `status`. An employee stays undeletable while it is an interviewer.

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use recruit_core::{
  Registry,
  model::{Employee, NewEmployee},
  store::{EmployeeFilter, RecruitStore},
};
use serde::Deserialize;

use crate::{Detail, deleted, error::ApiError, non_empty, page, text_filter, updated};

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub name:        Option<String>,
  pub email:       Option<String>,
  /// Job title, e.g. `CEO`, `Developer`, `Designer`.
  pub designation: Option<String>,
  pub skip:        Option<usize>,
  pub limit:       Option<usize>,
}

/// `GET /employees/[?name=...][&email=...][&designation=...][&skip=..][&limit=..]`
pub async fn list<S: RecruitStore>(
  State(registry): State<Registry<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Employee>>, ApiError> {
  let filter = EmployeeFilter {
    name:        text_filter(params.name),
    email:       text_filter(params.email),
    designation: text_filter(params.designation),
  };
  let rows = registry
    .list_employees(&filter, page(params.skip, params.limit))
    .await?;
  non_empty(rows)
}

/// `GET /employee/{id}`
pub async fn get_one<S: RecruitStore>(
  State(registry): State<Registry<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Employee>, ApiError> {
  Ok(Json(registry.get_employee(id).await?))
}

/// `POST /employee/`
pub async fn create<S: RecruitStore>(
  State(registry): State<Registry<S>>,
  Json(body): Json<NewEmployee>,
) -> Result<impl IntoResponse, ApiError> {
  let employee = registry.create_employee(body).await?;
  Ok((StatusCode::CREATED, Json(employee)))
}

/// `PUT /employee/{id}`
pub async fn update<S: RecruitStore>(
  State(registry): State<Registry<S>>,
  Path(id): Path<i64>,
  Json(body): Json<NewEmployee>,
) -> Result<Json<Detail>, ApiError> {
  registry.update_employee(id, body).await?;
  Ok(updated::<Employee>())
}

/// `DELETE /employee/{id}`
pub async fn delete_one<S: RecruitStore>(
  State(registry): State<Registry<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Detail>, ApiError> {
  let removed = registry.delete_employee(id).await?;
  Ok(deleted::<Employee>(removed))
}

#[derive(Debug, Deserialize)]
pub struct EmailParams {
  pub email: String,
}

/// `DELETE /employee/?email=<email>`
pub async fn delete_by_email<S: RecruitStore>(
  State(registry): State<Registry<S>>,
  Query(params): Query<EmailParams>,
) -> Result<Json<Detail>, ApiError> {
  let removed = registry.delete_employee_by_email(&params.email).await?;
  Ok(deleted::<Employee>(removed))
}
