use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tokio::sync::Mutex;

use crate::domain::entities::ScoreRecord;
use crate::domain::ports::ScoreStore;

// Application state holding the score storage adapter.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ScoreStore>,
}

// PostgreSQL-backed score store for production use.
#[derive(Clone)]
pub struct PostgresScoreStore {
    pub db: PgPool,
}

#[async_trait]
impl ScoreStore for PostgresScoreStore {
    async fn insert(&self, name: &str, time_ms: u64) -> Result<u64, String> {
        let row = sqlx::query("INSERT INTO scores (name, time_ms) VALUES ($1, $2) RETURNING id")
            .bind(name)
            .bind(time_ms as i64)
            .fetch_one(&self.db)
            .await
            .map_err(|e| e.to_string())?;

        let id: i64 = row.try_get("id").map_err(|e| e.to_string())?;
        Ok(id as u64)
    }

    async fn top(&self, limit: u32) -> Result<Vec<ScoreRecord>, String> {
        let rows =
            sqlx::query("SELECT id, name, time_ms FROM scores ORDER BY time_ms ASC, id ASC LIMIT $1")
                .bind(i64::from(limit))
                .fetch_all(&self.db)
                .await
                .map_err(|e| e.to_string())?;

        rows.into_iter()
            .map(|row| {
                let id: i64 = row.try_get("id").map_err(|e| e.to_string())?;
                let name: String = row.try_get("name").map_err(|e| e.to_string())?;
                let time_ms: i64 = row.try_get("time_ms").map_err(|e| e.to_string())?;
                Ok(ScoreRecord {
                    id: id as u64,
                    name,
                    time_ms: time_ms as u64,
                })
            })
            .collect()
    }

    async fn ping(&self) -> Result<(), String> {
        sqlx::query("SELECT 1")
            .execute(&self.db)
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

// In-memory score store adapter for tests and storage-free local runs.
#[derive(Clone)]
pub struct InMemoryScoreStore {
    rows: Arc<Mutex<Vec<ScoreRecord>>>,
    next_id: Arc<AtomicU64>,
}

impl InMemoryScoreStore {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl Default for InMemoryScoreStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScoreStore for InMemoryScoreStore {
    async fn insert(&self, name: &str, time_ms: u64) -> Result<u64, String> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut rows = self.rows.lock().await;
        rows.push(ScoreRecord {
            id,
            name: name.to_string(),
            time_ms,
        });
        Ok(id)
    }

    async fn top(&self, limit: u32) -> Result<Vec<ScoreRecord>, String> {
        let rows = self.rows.lock().await;
        let mut rows = rows.clone();
        rows.sort_by_key(|row| (row.time_ms, row.id));
        rows.truncate(limit as usize);
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), String> {
        Ok(())
    }
}
