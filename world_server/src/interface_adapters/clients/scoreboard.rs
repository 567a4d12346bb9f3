use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::use_cases::types::ScoreEntry;

#[derive(Debug, Serialize)]
struct SubmitScoreRequest<'a> {
    name: &'a str,
    time_ms: u64,
}

#[derive(Debug, Deserialize)]
struct TopScoresResponse {
    items: Vec<ScoreItem>,
}

#[derive(Debug, Deserialize)]
struct ScoreItem {
    name: String,
    time_ms: u64,
}

#[derive(Debug)]
pub enum ScoreboardError {
    /// The service rejected the payload; retrying the same data is pointless.
    Rejected,
    /// Network or service failure; the next refresh may succeed.
    Unavailable,
}

/// Thin reqwest client for the leaderboard service.
///
/// Callers treat both operations as fire-and-forget: errors are returned for
/// logging, never retried here, and never surface inside the simulation.
#[derive(Clone)]
pub struct ScoreboardClient {
    http: reqwest::Client,
    base_url: String,
}

impl ScoreboardClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub async fn submit(&self, name: &str, time_ms: u64) -> Result<(), ScoreboardError> {
        let url = format!("{}/api/score", self.base_url);
        let response = self
            .http
            .post(url)
            .json(&SubmitScoreRequest { name, time_ms })
            .send()
            .await
            .map_err(|_| ScoreboardError::Unavailable)?;

        if response.status().is_success() {
            return Ok(());
        }
        if response.status() == StatusCode::BAD_REQUEST {
            return Err(ScoreboardError::Rejected);
        }
        Err(ScoreboardError::Unavailable)
    }

    pub async fn top(&self, limit: u8) -> Result<Vec<ScoreEntry>, ScoreboardError> {
        let url = format!("{}/api/score", self.base_url);
        let response = self
            .http
            .get(url)
            .query(&[("limit", limit)])
            .send()
            .await
            .map_err(|_| ScoreboardError::Unavailable)?;

        if !response.status().is_success() {
            return Err(ScoreboardError::Unavailable);
        }

        let body = response
            .json::<TopScoresResponse>()
            .await
            .map_err(|_| ScoreboardError::Unavailable)?;

        Ok(body
            .items
            .into_iter()
            .map(|item| ScoreEntry {
                name: item.name,
                time_ms: item.time_ms,
            })
            .collect())
    }
}
