//! JSON REST API for the recruiting pipeline.
//!
//! Exposes an axum [`Router`] backed by a [`Registry`] over any
//! [`RecruitStore`]. Handlers only translate between HTTP and registry calls;
//! every rule lives in `recruit-core`.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = recruit_api::api_router(Registry::new(store));
//! ```

pub mod candidates;
pub mod employees;
pub mod error;
pub mod interviews;

use axum::{
  Json, Router,
  routing::{get, post},
};
use recruit_core::{Registry, model::Entity, store::{Page, RecruitStore}};
use serde::Serialize;

pub use error::ApiError;

/// Build the API router for `registry`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(registry: Registry<S>) -> Router<()>
where
  S: RecruitStore + 'static,
{
  Router::new()
    // Candidates
    .route("/candidates/", get(candidates::list::<S>))
    .route(
      "/candidate/",
      post(candidates::create::<S>).delete(candidates::delete_by_email::<S>),
    )
    .route(
      "/candidate/{id}",
      get(candidates::get_one::<S>)
        .put(candidates::update::<S>)
        .delete(candidates::delete_one::<S>),
    )
    // Employees
    .route("/employees/", get(employees::list::<S>))
    .route(
      "/employee/",
      post(employees::create::<S>).delete(employees::delete_by_email::<S>),
    )
    .route(
      "/employee/{id}",
      get(employees::get_one::<S>)
        .put(employees::update::<S>)
        .delete(employees::delete_one::<S>),
    )
    // Interviews
    .route("/interviews/", get(interviews::list::<S>))
    .route("/interview/", post(interviews::create::<S>))
    .route(
      "/interview/{id}",
      get(interviews::get_one::<S>)
        .put(interviews::update::<S>)
        .delete(interviews::delete_one::<S>),
    )
    .with_state(registry)
}

// ─── Shared response and query helpers ───────────────────────────────────────

/// Body of delete and update responses: `{"detail": "..."}`.
#[derive(Debug, Serialize)]
pub struct Detail {
  pub detail: String,
}

fn updated<E: Entity>() -> Json<Detail> {
  Json(Detail { detail: format!("{} Updated Successfully", E::KIND) })
}

/// A zero row count after the existence check passed is reported as an
/// unsuccessful deletion rather than an error.
fn deleted<E: Entity>(removed: usize) -> Json<Detail> {
  let detail = if removed > 0 {
    format!("{} Deleted Successfully", E::KIND)
  } else {
    format!("{} Deletion Unsuccessful", E::KIND)
  };
  Json(Detail { detail })
}

/// Lists answer 404 rather than an empty array.
fn non_empty<E: Entity>(rows: Vec<E>) -> Result<Json<Vec<E>>, ApiError> {
  if rows.is_empty() {
    return Err(ApiError::NotFound(format!("{} not found", E::KIND)));
  }
  Ok(Json(rows))
}

fn page(skip: Option<usize>, limit: Option<usize>) -> Page {
  let default = Page::default();
  Page {
    offset: skip.unwrap_or(default.offset),
    limit:  limit.unwrap_or(default.limit),
  }
}

/// An empty query value places no constraint, same as an absent one.
fn text_filter(v: Option<String>) -> Option<String> {
  v.filter(|s| !s.is_empty())
}

/// Zero is never a valid round or id, so it places no constraint.
fn int_filter(v: Option<i64>) -> Option<i64> { v.filter(|n| *n != 0) }
