//! Client side of the ultimate tic-tac-toe protocol: local board state,
//! its rendered projection, move gating, and the websocket session that keeps
//! them in step with the game server.

use shared::{
    domain::{Coord, Outcome, Player},
    protocol::{MoveRequest, MoveSource},
};

pub mod board;
pub mod controller;
pub mod error;
pub mod protocol_client;
pub mod render;
pub mod session;
pub mod transport;

pub use board::{BoardModel, Cell, CellOwner, Highlight, SubBoard, SubBoardStatus};
pub use controller::{activate_cell, check_move, MoveDecision, RejectReason};
pub use error::ClientError;
pub use protocol_client::{ClientCommand, ConnectionState, ConnectionStatus, ProtocolClient};
pub use render::{render_board, render_cell, BoardView, CellStyle, CellView, SubBoardView};
pub use session::GameView;
pub use transport::{websocket_url, MoveTransport, WsMoveSink};

/// Notifications published by [`ProtocolClient`] for the front-end.
#[derive(Debug, Clone)]
pub enum ClientEvent {
    ConnectionChanged(ConnectionState),
    TransportError(String),
    /// Initial legal moves received. `view` is the board as it stands; init
    /// does not highlight anything.
    Ready {
        current_player: Player,
        legal_moves: Vec<Coord>,
        view: BoardView,
    },
    BoardUpdated {
        view: BoardView,
        source: MoveSource,
        win_chance: Option<f64>,
    },
    GameOver {
        outcome: Outcome,
        banner: &'static str,
    },
    MoveSent(MoveRequest),
    /// Server-side error that should block the user until acknowledged.
    Alert(String),
    Error(String),
}

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;
