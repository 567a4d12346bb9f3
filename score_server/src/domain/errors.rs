// Domain-level errors for leaderboard workflows.
#[derive(Debug)]
pub enum ScoreError {
    InvalidName,
    InvalidTime,
    StorageFailure,
}
