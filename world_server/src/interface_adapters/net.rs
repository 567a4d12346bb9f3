// WebSocket adapter: each socket owns one private world task.

use axum::{
    extract::{
        State,
        ws::{CloseFrame, Message, WebSocket, WebSocketUpgrade, close_code},
    },
    response::IntoResponse,
};
use futures_util::sink::SinkExt;
use std::{
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::{mpsc, watch};
use tracing::{info, info_span, warn};

use crate::domain::state::ControlFrame;
use crate::domain::tuning::LevelId;
use crate::domain::world::World;
use crate::frameworks::config;
use crate::interface_adapters::protocol::{
    ClientMessage, ControlFrameDto, ScoreboardDto, ServerMessage, WorldUpdateDto,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::session::{snapshot_world, world_task};
use crate::use_cases::types::{ScoreboardView, SessionEvent};

const LOG_THROTTLE: Duration = Duration::from_secs(2);
const MAX_INVALID_JSON: u32 = 10;

#[derive(Debug)]
enum NetError {
    #[allow(dead_code)]
    Ws(axum::Error),
    #[allow(dead_code)]
    Serialization(serde_json::Error),
}

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(mut socket: WebSocket, state: Arc<AppState>) {
    let conn_id: u64 = rand::random();
    let span = info_span!("conn", conn_id);
    let _enter = span.enter();
    info!("client connected");

    // One private world per connection; dropping the event sender on
    // disconnect is what winds the task down.
    let world = World::new();
    let initial = snapshot_world(&world, 0);
    let (events_tx, events_rx) = mpsc::channel::<SessionEvent>(config::EVENT_CHANNEL_CAPACITY);
    let (snapshot_tx, mut snapshot_rx) = watch::channel(initial);
    let (scoreboard_tx, mut scoreboard_rx) = watch::channel(ScoreboardView::default());

    tokio::spawn(world_task(
        world,
        events_rx,
        snapshot_tx,
        scoreboard_tx,
        state.scoreboard.clone(),
        config::TICK_INTERVAL,
    ));

    let mut invalid_json: u32 = 0;
    let mut last_invalid_log = Instant::now() - LOG_THROTTLE;
    let mut close_frame: Option<CloseFrame> = None;

    loop {
        let disconnect = tokio::select! {
            incoming = socket.recv() => match incoming {
                Some(Ok(Message::Text(text))) => match serde_json::from_str::<ClientMessage>(&text) {
                    Ok(message) => match session_event(message) {
                        Some(event) => match events_tx.try_send(event) {
                            Ok(()) => false,
                            Err(mpsc::error::TrySendError::Full(_)) => {
                                if should_log(&mut last_invalid_log) {
                                    warn!("session channel full; dropping event");
                                }
                                false
                            }
                            Err(mpsc::error::TrySendError::Closed(_)) => {
                                warn!("world task gone; disconnecting");
                                true
                            }
                        },
                        None => {
                            if should_log(&mut last_invalid_log) {
                                warn!(bytes = text.len(), "rejected client message; dropping");
                            }
                            false
                        }
                    },
                    Err(parse_err) => {
                        invalid_json += 1;
                        if should_log(&mut last_invalid_log) {
                            warn!(
                                bytes = text.len(),
                                error = %parse_err,
                                "failed to parse client message"
                            );
                        }
                        if invalid_json > MAX_INVALID_JSON {
                            close_frame = Some(CloseFrame {
                                code: close_code::POLICY,
                                reason: "too many invalid messages".into(),
                            });
                            true
                        } else {
                            false
                        }
                    }
                },
                Some(Ok(Message::Binary(_))) => {
                    close_frame = Some(CloseFrame {
                        code: close_code::UNSUPPORTED,
                        reason: "binary messages not supported".into(),
                    });
                    true
                }
                Some(Ok(Message::Ping(_) | Message::Pong(_))) => false,
                Some(Ok(Message::Close(_))) => true,
                Some(Err(e)) => {
                    warn!(error = %e, "websocket recv error");
                    true
                }
                None => {
                    info!("websocket closed");
                    true
                }
            },

            changed = snapshot_rx.changed() => match changed {
                Ok(()) => {
                    let update = snapshot_rx.borrow_and_update().clone();
                    let msg = ServerMessage::Snapshot(WorldUpdateDto::from(update));
                    match send_message(&mut socket, &msg).await {
                        Ok(()) => false,
                        Err(err) => {
                            warn!(error = ?err, "failed to send snapshot");
                            true
                        }
                    }
                }
                Err(_) => {
                    warn!("snapshot channel closed; disconnecting");
                    true
                }
            },

            changed = scoreboard_rx.changed() => match changed {
                Ok(()) => {
                    let view = scoreboard_rx.borrow_and_update().clone();
                    let msg = ServerMessage::Scoreboard(ScoreboardDto::from(view));
                    match send_message(&mut socket, &msg).await {
                        Ok(()) => false,
                        Err(err) => {
                            warn!(error = ?err, "failed to send scoreboard");
                            true
                        }
                    }
                }
                Err(_) => {
                    warn!("scoreboard channel closed; disconnecting");
                    true
                }
            },
        };

        if disconnect {
            if let Some(frame) = close_frame.take() {
                let _ = socket.send(Message::Close(Some(frame))).await;
            }
            let _ = socket.close().await;
            break;
        }
    }

    info!("client disconnected");
}

async fn send_message(socket: &mut WebSocket, msg: &ServerMessage) -> Result<(), NetError> {
    let txt = serde_json::to_string(msg).map_err(NetError::Serialization)?;
    socket
        .send(Message::Text(txt.into()))
        .await
        .map_err(NetError::Ws)
}

fn should_log(last: &mut Instant) -> bool {
    if last.elapsed() >= LOG_THROTTLE {
        *last = Instant::now();
        true
    } else {
        false
    }
}

/// Maps a parsed wire message onto a session event, rejecting anything the
/// simulation must never see.
fn session_event(message: ClientMessage) -> Option<SessionEvent> {
    match message {
        ClientMessage::Controls(dto) => sanitize_controls(dto).map(SessionEvent::Controls),
        ClientMessage::StartLevel(payload) => LevelId::from_index(payload.level)
            .map(|level| SessionEvent::StartLevel { level }),
        ClientMessage::Reset => Some(SessionEvent::Reset),
        ClientMessage::SubmitName(payload) => Some(SessionEvent::SubmitName { name: payload.name }),
    }
}

fn sanitize_controls(dto: ControlFrameDto) -> Option<ControlFrame> {
    let mut frame = ControlFrame::from(dto);

    if !frame.throttle.is_finite()
        || !frame.pitch.is_finite()
        || !frame.yaw.is_finite()
        || !frame.roll.is_finite()
    {
        return None;
    }

    frame.throttle = frame.throttle.clamp(-1.0, 1.0);
    frame.pitch = frame.pitch.clamp(-1.0, 1.0);
    frame.yaw = frame.yaw.clamp(-1.0, 1.0);
    frame.roll = frame.roll.clamp(-1.0, 1.0);

    Some(frame)
}
