use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::ScoreRecord;

// Port for score storage used by leaderboard use cases.
#[async_trait]
pub trait ScoreStore: Send + Sync {
    async fn insert(&self, name: &str, time_ms: u64) -> Result<u64, String>;
    async fn top(&self, limit: u32) -> Result<Vec<ScoreRecord>, String>;
    async fn ping(&self) -> Result<(), String>;
}

#[async_trait]
impl<T: ScoreStore + ?Sized> ScoreStore for Arc<T> {
    async fn insert(&self, name: &str, time_ms: u64) -> Result<u64, String> {
        (**self).insert(name, time_ms).await
    }

    async fn top(&self, limit: u32) -> Result<Vec<ScoreRecord>, String> {
        (**self).top(limit).await
    }

    async fn ping(&self) -> Result<(), String> {
        (**self).ping().await
    }
}
