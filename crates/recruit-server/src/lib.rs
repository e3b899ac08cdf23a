//! HTTP server assembly for the recruiting pipeline.
//!
//! Holds the runtime configuration and wraps the API router in the
//! server-level layers. The binary in `main.rs` does the process plumbing.

use std::{path::{Path, PathBuf}, sync::Arc};

use axum::Router;
use config::{Config, ConfigError, Environment, File, builder::DefaultState};
use recruit_core::{Registry, store::RecruitStore};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration.
///
/// Sources, lowest precedence first: built-in defaults, the TOML file,
/// `RECRUIT_*` environment variables (e.g. `RECRUIT_PORT=9000`).
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  /// SQLite database file; a leading `~/` is expanded by the binary.
  pub database_path: PathBuf,
}

impl ServerConfig {
  /// Load from `path` (which need not exist) layered under the environment.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    Self::from_builder(
      Config::builder().add_source(File::from(path).required(false)),
    )
  }

  fn from_builder(
    builder: config::ConfigBuilder<DefaultState>,
  ) -> Result<Self, ConfigError> {
    builder
      .set_default("host", "127.0.0.1")?
      .set_default("port", 8000)?
      .set_default("database_path", "recruit.db")?
      .add_source(Environment::with_prefix("RECRUIT"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// The complete application: API routes plus per-request tracing.
pub fn app<S>(store: Arc<S>) -> Router
where
  S: RecruitStore + 'static,
{
  recruit_api::api_router(Registry::new(store)).layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use config::FileFormat;
  use recruit_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;

  #[test]
  fn file_values_override_defaults() {
    let cfg = ServerConfig::from_builder(Config::builder().add_source(
      File::from_str("port = 9100\ndatabase_path = \"/tmp/r.db\"", FileFormat::Toml),
    ))
    .unwrap();
    assert_eq!(cfg.port, 9100);
    assert_eq!(cfg.database_path, PathBuf::from("/tmp/r.db"));
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.address(), "127.0.0.1:9100");
  }

  #[test]
  fn missing_file_is_not_an_error() {
    let cfg = ServerConfig::load(Path::new("/nonexistent/recruit.toml")).unwrap();
    assert!(!cfg.host.is_empty());
  }

  #[tokio::test]
  async fn app_serves_api_routes() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let app = app(Arc::new(store));

    let req = Request::builder()
      .method("POST")
      .uri("/employee/")
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(
        serde_json::json!({
          "name": "anil", "email": "anil@corp.io", "designation": "CEO"
        })
        .to_string(),
      ))
      .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = Request::builder().uri("/employee/1").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
  }
}
