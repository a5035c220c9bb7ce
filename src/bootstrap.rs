//! Startup wiring: configuration to a ready directory.
//!
//! Owns construction of the source adapter, the snapshot cache, and the
//! audit observer, so consumers hold a single [`DirectoryService`] and no
//! globals exist anywhere.

use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::EnvFilter;

use crate::application::services::DirectoryService;
use crate::config::{Config, SourceKind};
use crate::domain::audit::TracingAudit;
use crate::domain::sources::EmployeeSource;
use crate::infrastructure::cache::SnapshotCache;
use crate::infrastructure::persistence::{CsvEmployeeSource, SqlEmployeeSource};

/// Initializes the tracing subscriber per `RUST_LOG` / `LOG_FORMAT`.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Builds the directory for the configured backing store.
///
/// The flat-file variant gets a freshly constructed [`SnapshotCache`] when
/// caching is enabled; the relational variant gets a bounded connection
/// pool. Both are wrapped with the tracing audit observer.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration validation fails (including the identifier whitelist)
/// - The database connection fails (relational source only)
/// - An eager snapshot preload fails (`CACHE_PRELOAD`)
pub async fn build_directory(config: &Config) -> Result<DirectoryService<dyn EmployeeSource>> {
    config.validate()?;

    let source: Arc<dyn EmployeeSource> = match config.source_kind {
        SourceKind::Csv => {
            let source = if config.cache_enabled {
                let cache = Arc::new(SnapshotCache::new());
                tracing::info!(path = %config.data_file, "flat-file source with snapshot cache");
                CsvEmployeeSource::with_cache(&config.data_file, cache)
            } else {
                tracing::info!(path = %config.data_file, "flat-file source, uncached");
                CsvEmployeeSource::new(&config.data_file)
            };

            if config.cache_preload {
                let rows = source
                    .reload()
                    .await
                    .context("Failed to preload the record snapshot")?;
                tracing::info!(rows, "record snapshot preloaded");
            }

            Arc::new(source)
        }
        SourceKind::Database => {
            let pool = SqlitePoolOptions::new()
                .max_connections(config.db_max_connections)
                .connect(&config.database_url)
                .await?;
            tracing::info!("Connected to database");

            Arc::new(SqlEmployeeSource::new(
                pool,
                config.employee_table.clone(),
                config.query_timeout(),
            )?)
        }
    };

    Ok(DirectoryService::new(source).with_audit(Arc::new(TracingAudit)))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Configs are built directly rather than through the environment, so
    // these tests don't contend over process-global state.
    fn base_config() -> Config {
        Config {
            source_kind: SourceKind::Csv,
            data_file: "company_data.csv".to_string(),
            database_url: "sqlite::memory:".to_string(),
            employee_table: "employees".to_string(),
            query_timeout_seconds: 5,
            db_max_connections: 1,
            cache_enabled: true,
            cache_preload: false,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    #[tokio::test]
    async fn test_preload_failure_surfaces_as_startup_error() {
        let dir = tempfile::tempdir().unwrap();

        // A directory at the data-file path is unreadable without being
        // absent, so the eager load fails instead of degrading to empty.
        let mut config = base_config();
        config.data_file = dir.path().to_string_lossy().into_owned();
        config.cache_preload = true;

        let err = build_directory(&config).await.unwrap_err();
        assert!(err.to_string().contains("preload"));
    }

    #[tokio::test]
    async fn test_preload_populates_the_snapshot_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.csv");
        tokio::fs::write(&path, "id,name,clearance_level\n1,Alice,SECRET\n")
            .await
            .unwrap();

        let mut config = base_config();
        config.data_file = path.to_string_lossy().into_owned();
        config.cache_preload = true;

        let directory = build_directory(&config).await.unwrap();

        // The file is gone, so only the preloaded snapshot can answer.
        tokio::fs::remove_file(&path).await.unwrap();

        let records = directory.list_safe_records().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Alice");
    }

    #[tokio::test]
    async fn test_uncached_source_reads_the_file_every_time() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.csv");
        tokio::fs::write(&path, "id,name,clearance_level\n1,Alice,SECRET\n")
            .await
            .unwrap();

        let mut config = base_config();
        config.data_file = path.to_string_lossy().into_owned();
        config.cache_enabled = false;

        let directory = build_directory(&config).await.unwrap();
        assert_eq!(directory.list_safe_records().await.unwrap().len(), 1);

        tokio::fs::write(
            &path,
            "id,name,clearance_level\n1,Alice,SECRET\n2,Bob,CONFIDENTIAL\n",
        )
        .await
        .unwrap();
        assert_eq!(directory.list_safe_records().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_database_source_selected_and_queried() {
        let mut config = base_config();
        config.source_kind = SourceKind::Database;

        let directory = build_directory(&config).await.unwrap();

        // No table exists in the fresh in-memory store, and the relational
        // variant surfaces that instead of degrading to empty.
        let err = directory.list_safe_records().await.unwrap_err();
        assert_eq!(err.kind(), "source_unavailable");
    }

    #[tokio::test]
    async fn test_invalid_config_refused_before_wiring() {
        let mut config = base_config();
        config.employee_table = "employees; DROP TABLE employees;".to_string();

        assert!(build_directory(&config).await.is_err());
    }
}
