//! Helpers for integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tempfile::TempDir;

use promotions_service::db::{DbPool, establish_connection_pool, run_migrations};
use promotions_service::domain::promotion::NewPromotion;

/// Temporary migrated database used in integration tests.
pub struct TestDb {
    // Field order matters: the pool must close before the directory is removed.
    pool: DbPool,
    path: PathBuf,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory.");
        let path = dir.path().join(filename);
        let url = path.to_str().expect("Temporary path is not valid UTF-8.");

        let pool = establish_connection_pool(url).expect("Failed to establish SQLite connection.");
        run_migrations(&pool).expect("Migrations failed");

        TestDb {
            pool,
            path,
            _dir: dir,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn new_promotion(name: &str, products_type: &str, start: NaiveDate, end: NaiveDate) -> NewPromotion {
    NewPromotion::new(name, products_type, start, end)
}
