use crate::domain::entities::ScoreRecord;
use crate::domain::errors::ScoreError;
use crate::domain::ports::ScoreStore;

// Bounds applied to the requested row count.
const MIN_LIMIT: u32 = 1;
const MAX_LIMIT: u32 = 50;
pub const DEFAULT_LIMIT: u32 = 15;

// Leaderboard query use case with injected storage.
pub struct TopScoresUseCase<S> {
    pub store: S,
}

impl<S> TopScoresUseCase<S>
where
    S: ScoreStore,
{
    /// Returns the fastest runs, ascending by time. An out-of-range limit is
    /// clamped rather than rejected.
    pub async fn execute(&self, limit: Option<u32>) -> Result<Vec<ScoreRecord>, ScoreError> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(MIN_LIMIT, MAX_LIMIT);
        self.store
            .top(limit)
            .await
            .map_err(|_| ScoreError::StorageFailure)
    }
}
