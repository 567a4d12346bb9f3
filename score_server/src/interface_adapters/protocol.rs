use serde::{Deserialize, Serialize};

use crate::domain::entities::ScoreRecord;

// Request payload for score submission.
#[derive(Debug, Deserialize)]
pub struct SubmitScoreRequest {
    pub name: String,
    pub time_ms: u64,
}

// Response payload for score submission.
#[derive(Debug, Serialize)]
pub struct SubmitScoreResponse {
    pub id: u64,
}

// Query parameters for the leaderboard read.
#[derive(Debug, Deserialize)]
pub struct TopScoresQuery {
    pub limit: Option<u32>,
}

// Response payload for the leaderboard read.
#[derive(Debug, Serialize)]
pub struct TopScoresResponse {
    pub items: Vec<ScoreItemDto>,
}

// Flattened leaderboard row for wire transmission.
#[derive(Debug, Serialize)]
pub struct ScoreItemDto {
    pub id: u64,
    pub name: String,
    pub time_ms: u64,
}

impl From<&ScoreRecord> for ScoreItemDto {
    fn from(record: &ScoreRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            time_ms: record.time_ms,
        }
    }
}

// Response payload for the storage health probe.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
