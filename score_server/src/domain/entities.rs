use serde::{Deserialize, Serialize};

// Leaderboard row, ordered by run time ascending with insertion order as the
// tie-break.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreRecord {
    pub id: u64,
    pub name: String,
    pub time_ms: u64,
}
