use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    domain::{Coord, Outcome, Player},
    error::ProtocolError,
};

/// Which side of the authority produced an action frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveSource {
    Player,
    Computer,
    #[default]
    Unspecified,
}

impl MoveSource {
    fn from_tag(tag: &Value) -> Self {
        match tag.as_str() {
            Some("player_move") => MoveSource::Player,
            Some("computer_move") => MoveSource::Computer,
            _ => MoveSource::Unspecified,
        }
    }
}

/// A finished sub-board, encoded on the wire as `[outcome, board_index]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[i64; 2]", into = "[i64; 2]")]
pub struct CompletedBoard {
    pub outcome: Outcome,
    pub board: u8,
}

impl TryFrom<[i64; 2]> for CompletedBoard {
    type Error = ProtocolError;

    fn try_from([outcome, board]: [i64; 2]) -> Result<Self, Self::Error> {
        let outcome = Outcome::try_from(outcome)?;
        let board = Coord::from_wire(board, 0)?.board();
        Ok(Self { outcome, board })
    }
}

impl From<CompletedBoard> for [i64; 2] {
    fn from(value: CompletedBoard) -> Self {
        [value.outcome.code(), value.board.into()]
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InitMessage {
    #[serde(default)]
    pub player: Option<Player>,
    pub valid_moves: Vec<Coord>,
}

/// Authoritative update pushed after every move, by either side.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawActionFrame")]
pub struct ActionUpdate {
    pub source: MoveSource,
    pub coord: Coord,
    pub player: Player,
    pub valid_moves: Vec<Coord>,
    pub completed_boards: Vec<CompletedBoard>,
    pub locked: bool,
    pub result: Option<Outcome>,
    pub win_chance: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawActionFrame {
    action: Value,
    board: i64,
    pos: i64,
    player: Player,
    valid_moves: Vec<Coord>,
    #[serde(default)]
    completed_boards: Vec<CompletedBoard>,
    #[serde(default)]
    locked: bool,
    #[serde(default)]
    result: Option<Outcome>,
    #[serde(default)]
    win_chance: Option<f64>,
}

impl TryFrom<RawActionFrame> for ActionUpdate {
    type Error = ProtocolError;

    fn try_from(raw: RawActionFrame) -> Result<Self, Self::Error> {
        Ok(Self {
            source: MoveSource::from_tag(&raw.action),
            coord: Coord::from_wire(raw.board, raw.pos)?,
            player: raw.player,
            valid_moves: raw.valid_moves,
            completed_boards: raw.completed_boards,
            locked: raw.locked,
            result: raw.result,
            win_chance: raw.win_chance,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessage {
    pub message: Option<String>,
}

/// Inbound frame after discriminating on the `action` / `init` fields.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerMessage {
    Init(InitMessage),
    Action(ActionUpdate),
    Error(ErrorMessage),
}

/// Decodes one text frame from the game server.
///
/// `action` wins over `init` when both are truthy. Frames carrying neither are
/// reported as [`ServerMessage::Error`] with whatever `error` text they hold.
pub fn decode_server_frame(text: &str) -> Result<ServerMessage, ProtocolError> {
    let frame: Value = serde_json::from_str(text)?;

    if frame.get("action").is_some_and(is_truthy) {
        return Ok(ServerMessage::Action(serde_json::from_value(frame)?));
    }
    if frame.get("init").is_some_and(is_truthy) {
        return Ok(ServerMessage::Init(serde_json::from_value(frame)?));
    }

    let message = frame.get("error").and_then(|value| match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    });
    Ok(ServerMessage::Error(ErrorMessage { message }))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Outbound move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub board: u8,
    pub pos: u8,
    #[serde(rename = "isLocked")]
    pub is_locked: bool,
}

impl MoveRequest {
    pub fn new(coord: Coord, is_locked: bool) -> Self {
        Self {
            board: coord.board(),
            pos: coord.cell(),
            is_locked,
        }
    }

    pub fn coord(&self) -> Result<Coord, ProtocolError> {
        Coord::new(self.board, self.pos)
    }
}

pub fn encode_move(request: &MoveRequest) -> Result<String, ProtocolError> {
    Ok(serde_json::to_string(request)?)
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
