use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::entities::ScoreRecord;
use crate::domain::ports::ScoreStore;

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub insert: bool,
    pub top: bool,
    pub ping: bool,
}

// In-memory store with failure injection for deterministic use-case tests.
#[derive(Clone)]
pub(crate) struct RecordingStore {
    rows: Arc<Mutex<Vec<ScoreRecord>>>,
    next_id: Arc<AtomicU64>,
    failures: FailureFlags,
}

impl RecordingStore {
    pub(crate) fn new() -> Self {
        Self {
            rows: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(AtomicU64::new(1)),
            failures: FailureFlags::default(),
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn stored_rows(&self) -> Vec<ScoreRecord> {
        let guard = self.rows.lock().expect("rows mutex poisoned");
        guard.clone()
    }
}

#[async_trait]
impl ScoreStore for RecordingStore {
    async fn insert(&self, name: &str, time_ms: u64) -> Result<u64, String> {
        if self.failures.insert {
            return Err("insert failed".to_string());
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut guard = self.rows.lock().expect("rows mutex poisoned");
        guard.push(ScoreRecord {
            id,
            name: name.to_string(),
            time_ms,
        });
        Ok(id)
    }

    async fn top(&self, limit: u32) -> Result<Vec<ScoreRecord>, String> {
        if self.failures.top {
            return Err("top failed".to_string());
        }

        let guard = self.rows.lock().expect("rows mutex poisoned");
        let mut rows = guard.clone();
        rows.sort_by_key(|row| (row.time_ms, row.id));
        rows.truncate(limit as usize);
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), String> {
        if self.failures.ping {
            return Err("ping failed".to_string());
        }
        Ok(())
    }
}
