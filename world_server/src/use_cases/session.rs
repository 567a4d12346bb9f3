// Per-connection world loop: one pilot, one world, one fixed-tick task.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::sync::mpsc::{self, error::TryRecvError};
use tracing::{debug, info, warn};

use crate::domain::mission::MissionPhase;
use crate::domain::state::ControlFrame;
use crate::domain::world::World;
use crate::interface_adapters::clients::scoreboard::ScoreboardClient;
use crate::use_cases::types::{ScoreboardView, SessionEvent, WorldUpdate};

/// Rows requested on every leaderboard refresh.
const SCOREBOARD_LIMIT: u8 = 15;

/// Longest accepted pilot name, matching the leaderboard service contract.
const MAX_PILOT_NAME_LEN: usize = 50;

/// Drives one world at the fixed tick rate until the session channel closes.
///
/// Client events are drained between ticks; edge-triggered control flags
/// survive frame merging and are consumed by the tick that applies them.
/// Score submission is fire-and-forget: failures are logged and dropped, and
/// the next successful refresh repairs the leaderboard view.
pub async fn world_task(
    mut world: World,
    mut events_rx: mpsc::Receiver<SessionEvent>,
    snapshot_tx: watch::Sender<WorldUpdate>,
    scoreboard_tx: watch::Sender<ScoreboardView>,
    scoreboard: Arc<ScoreboardClient>,
    tick_interval: Duration,
) {
    let mut tick: u64 = 0;
    let mut controls = ControlFrame::default();

    // Seed the leaderboard panel for the menu screen.
    spawn_scoreboard_refresh(scoreboard.clone(), scoreboard_tx.clone());

    // Drive the fixed-step session loop at the configured tick rate.
    let mut interval = tokio::time::interval(tick_interval);

    loop {
        interval.tick().await;

        loop {
            match events_rx.try_recv() {
                Ok(SessionEvent::Controls(frame)) => {
                    // Latest axes win; edges accumulate until a tick sees them.
                    let switch_weapon = controls.switch_weapon || frame.switch_weapon;
                    let cycle_target = controls.cycle_target || frame.cycle_target;
                    controls = frame;
                    controls.switch_weapon = switch_weapon;
                    controls.cycle_target = cycle_target;
                }
                Ok(SessionEvent::StartLevel { level }) => {
                    world.start_level(level);
                }
                Ok(SessionEvent::Reset) => {
                    world.reset();
                }
                Ok(SessionEvent::SubmitName { name }) => {
                    handle_name_submission(
                        &mut world,
                        name,
                        &scoreboard,
                        &scoreboard_tx,
                    );
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    info!("session channel closed; world task exiting");
                    return;
                }
            }
        }

        let dt = tick_interval.as_secs_f32();
        world.step(dt, &controls);
        controls.switch_weapon = false;
        controls.cycle_target = false;

        tick += 1;
        let _ = snapshot_tx.send(snapshot_world(&world, tick));
    }
}

fn handle_name_submission(
    world: &mut World,
    name: String,
    scoreboard: &Arc<ScoreboardClient>,
    scoreboard_tx: &watch::Sender<ScoreboardView>,
) {
    if world.mission().phase != MissionPhase::LevelComplete {
        warn!("name submitted outside level completion; ignored");
        return;
    }

    let Some(name) = validate_pilot_name(&name) else {
        warn!("invalid pilot name; submission dropped");
        return;
    };

    let time_ms = world.elapsed_ms();
    info!(name = %name, time_ms, "submitting run score");

    let client = scoreboard.clone();
    let refresh_tx = scoreboard_tx.clone();
    tokio::spawn(async move {
        if let Err(err) = client.submit(&name, time_ms).await {
            warn!(error = ?err, "score submission failed; dropped");
        }
        refresh_scoreboard(&client, &refresh_tx).await;
    });

    world.return_to_menu();
}

/// Boundary validation of a pilot name; trims whitespace and rejects empty or
/// oversized names instead of forwarding them.
fn validate_pilot_name(name: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() || name.chars().count() > MAX_PILOT_NAME_LEN {
        return None;
    }
    Some(name.to_string())
}

fn spawn_scoreboard_refresh(
    scoreboard: Arc<ScoreboardClient>,
    scoreboard_tx: watch::Sender<ScoreboardView>,
) {
    tokio::spawn(async move {
        refresh_scoreboard(&scoreboard, &scoreboard_tx).await;
    });
}

async fn refresh_scoreboard(
    scoreboard: &ScoreboardClient,
    scoreboard_tx: &watch::Sender<ScoreboardView>,
) {
    match scoreboard.top(SCOREBOARD_LIMIT).await {
        Ok(entries) => {
            let _ = scoreboard_tx.send(ScoreboardView { entries });
        }
        Err(err) => {
            // Stale rows stay on screen; the next refresh self-heals.
            debug!(error = ?err, "scoreboard refresh failed");
        }
    }
}

/// Builds the read-only tick snapshot handed to presentation.
pub fn snapshot_world(world: &World, tick: u64) -> WorldUpdate {
    WorldUpdate {
        tick,
        player: world.player().into(),
        enemies: world
            .fleet()
            .deployed()
            .iter()
            .enumerate()
            .map(|(slot, enemy)| crate::domain::EnemySnapshot {
                id: slot as u32,
                position: enemy.position,
                active: enemy.active,
            })
            .collect(),
        gates: world.gates().gates().iter().map(Into::into).collect(),
        projectiles: world
            .volley()
            .iter_live()
            .chain(world.flak().iter_live())
            .map(Into::into)
            .collect(),
        lock: world.lock_snapshot(),
        mission: world.mission_snapshot(),
    }
}
