//! The persistent connection to the game server.
//!
//! A single task owns the socket and the [`GameView`]. Inbound frames and
//! front-end commands are handled one at a time, so a cell activation is
//! always judged against the state resident when it is dequeued.

use futures::{Sink, Stream, StreamExt};
use shared::{domain::Coord, protocol::decode_server_frame};
use tokio::sync::{broadcast, mpsc};
use tokio_tungstenite::tungstenite::{self, Message};
use tracing::{error, info, info_span, warn, Instrument};
use url::Url;
use uuid::Uuid;

use crate::{
    controller::{activate_cell, MoveDecision},
    error::ClientError,
    session::GameView,
    transport::{connect, WsMoveSink},
    ClientEvent,
};

const EVENT_CHANNEL_CAPACITY: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Connecting,
    Open,
    Closed,
}

/// Lifecycle of the connection. A transport error is recorded for
/// diagnostics without changing whether the socket counts as open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionStatus {
    state: ConnectionState,
    last_error: Option<String>,
}

impl ConnectionStatus {
    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_errored(&self) -> bool {
        self.last_error.is_some()
    }
}

/// Requests from the front-end to the connection task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    ActivateCell(Coord),
    Shutdown,
}

pub struct ProtocolClient {
    session_id: Uuid,
    view: GameView,
    status: ConnectionStatus,
    events: broadcast::Sender<ClientEvent>,
}

impl Default for ProtocolClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtocolClient {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            session_id: Uuid::new_v4(),
            view: GameView::new(),
            status: ConnectionStatus {
                state: ConnectionState::Connecting,
                last_error: None,
            },
            events,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn view(&self) -> &GameView {
        &self.view
    }

    pub fn status(&self) -> &ConnectionStatus {
        &self.status
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ClientEvent> {
        self.events.subscribe()
    }

    /// Connects to `url` and runs the session until the socket closes or the
    /// front-end asks to shut down. No reconnection is attempted.
    pub async fn connect_and_run(
        &mut self,
        url: &Url,
        commands: mpsc::Receiver<ClientCommand>,
    ) -> Result<(), ClientError> {
        self.set_state(ConnectionState::Connecting);
        info!(session_id = %self.session_id, %url, "connecting to game server");
        let socket = match connect(url).await {
            Ok(socket) => socket,
            Err(err) => {
                self.record_transport_error(err.to_string());
                self.set_state(ConnectionState::Closed);
                return Err(err);
            }
        };
        self.run(socket, commands).await;
        Ok(())
    }

    /// Drives an already-established socket.
    pub async fn run<S>(&mut self, socket: S, commands: mpsc::Receiver<ClientCommand>)
    where
        S: Stream<Item = Result<Message, tungstenite::Error>>
            + Sink<Message, Error = tungstenite::Error>
            + Unpin
            + Send,
    {
        let span = info_span!("game_session", session_id = %self.session_id);
        self.event_loop(socket, commands).instrument(span).await;
    }

    async fn event_loop<S>(&mut self, socket: S, mut commands: mpsc::Receiver<ClientCommand>)
    where
        S: Stream<Item = Result<Message, tungstenite::Error>>
            + Sink<Message, Error = tungstenite::Error>
            + Unpin
            + Send,
    {
        let (sink, mut reader) = socket.split();
        let mut transport = WsMoveSink::new(sink);
        self.set_state(ConnectionState::Open);
        info!("websocket connection established");

        loop {
            tokio::select! {
                frame = reader.next() => match frame {
                    Some(Ok(Message::Text(text))) => self.handle_frame(&text),
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        self.record_transport_error(format!("websocket receive failed: {err}"));
                        break;
                    }
                },
                command = commands.recv() => match command {
                    Some(ClientCommand::ActivateCell(coord)) => {
                        match activate_cell(&self.view, coord, &mut transport).await {
                            Ok(MoveDecision::Sent(request)) => {
                                self.emit(ClientEvent::MoveSent(request));
                            }
                            Ok(MoveDecision::Rejected(_)) => {}
                            Err(err) => self.record_transport_error(err.to_string()),
                        }
                    }
                    Some(ClientCommand::Shutdown) | None => {
                        if let Err(err) = transport.close().await {
                            warn!(error = %err, "failed to close websocket cleanly");
                        }
                        break;
                    }
                },
            }
        }

        self.set_state(ConnectionState::Closed);
        info!("websocket connection closed");
    }

    /// Decodes one text frame and applies it to the view. Malformed frames are
    /// reported and leave the view untouched.
    pub fn handle_frame(&mut self, text: &str) {
        match decode_server_frame(text) {
            Ok(message) => {
                for event in self.view.handle_message(message) {
                    self.emit(event);
                }
            }
            Err(err) => {
                warn!(error = %err, "invalid server frame");
                self.emit(ClientEvent::Error(format!("invalid server frame: {err}")));
            }
        }
    }

    fn set_state(&mut self, state: ConnectionState) {
        self.status.state = state;
        self.emit(ClientEvent::ConnectionChanged(state));
    }

    fn record_transport_error(&mut self, message: String) {
        error!(error = %message, "websocket error");
        self.status.last_error = Some(message.clone());
        self.emit(ClientEvent::TransportError(message));
    }

    fn emit(&self, event: ClientEvent) {
        // Fails only when nobody is subscribed.
        let _ = self.events.send(event);
    }
}

#[cfg(test)]
#[path = "tests/protocol_client_tests.rs"]
mod tests;
