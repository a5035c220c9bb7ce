#![allow(dead_code)]

use std::path::PathBuf;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tempfile::TempDir;

/// Writes a data file into `dir` and returns its path.
pub fn write_data_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// In-memory SQLite pool. A single connection keeps every query on the same
/// in-memory database.
pub async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap()
}

/// Creates an employee table that also carries a salary column, so tests can
/// prove the projection never reads it.
pub async fn create_employee_table(pool: &SqlitePool, table: &str) {
    sqlx::query(&format!(
        "CREATE TABLE {table} (id INTEGER PRIMARY KEY, name TEXT, clearance_level TEXT, salary INTEGER)"
    ))
    .execute(pool)
    .await
    .unwrap();
}

pub async fn insert_employee(
    pool: &SqlitePool,
    table: &str,
    id: i64,
    name: &str,
    clearance_level: &str,
    salary: i64,
) {
    sqlx::query(&format!(
        "INSERT INTO {table} (id, name, clearance_level, salary) VALUES (?, ?, ?, ?)"
    ))
    .bind(id)
    .bind(name)
    .bind(clearance_level)
    .bind(salary)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn row_count(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Header plus three clean employees; salary present to prove exclusion.
pub const SAMPLE_CSV: &str = "\
id,name,clearance_level,salary
1,Alice,SECRET,120000
2,Bob,CONFIDENTIAL,90000
3,Carol,TOP_SECRET,150000
";
