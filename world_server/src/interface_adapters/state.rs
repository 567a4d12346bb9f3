use std::sync::Arc;

use crate::interface_adapters::clients::scoreboard::ScoreboardClient;

#[derive(Clone)]
pub struct AppState {
    // Shared outbound client for the leaderboard service.
    pub scoreboard: Arc<ScoreboardClient>,
}
