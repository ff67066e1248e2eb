use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// Number of sub-boards in the composite board, and of cells in each sub-board.
pub const BOARD_SIZE: u8 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Player {
    Red,
    Blue,
}

impl Player {
    pub fn code(self) -> i64 {
        match self {
            Player::Red => -1,
            Player::Blue => 1,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }
}

impl TryFrom<i64> for Player {
    type Error = ProtocolError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Player::Red),
            1 => Ok(Player::Blue),
            other => Err(ProtocolError::InvalidPlayer(other)),
        }
    }
}

impl From<Player> for i64 {
    fn from(value: Player) -> Self {
        value.code()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Red => f.write_str("Red"),
            Player::Blue => f.write_str("Blue"),
        }
    }
}

/// Result of a finished sub-board or of the whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Outcome {
    Winner(Player),
    Draw,
}

impl Outcome {
    pub fn code(self) -> i64 {
        match self {
            Outcome::Winner(player) => player.code(),
            Outcome::Draw => 0,
        }
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(player),
            Outcome::Draw => None,
        }
    }
}

impl TryFrom<i64> for Outcome {
    type Error = ProtocolError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Outcome::Draw),
            -1 | 1 => Player::try_from(value).map(Outcome::Winner),
            other => Err(ProtocolError::InvalidOutcome(other)),
        }
    }
}

impl From<Outcome> for i64 {
    fn from(value: Outcome) -> Self {
        value.code()
    }
}

/// A `(sub-board, cell)` pair, encoded on the wire as `[board, cell]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "[i64; 2]", into = "[i64; 2]")]
pub struct Coord {
    board: u8,
    cell: u8,
}

impl Coord {
    pub fn new(board: u8, cell: u8) -> Result<Self, ProtocolError> {
        if board >= BOARD_SIZE || cell >= BOARD_SIZE {
            return Err(ProtocolError::CoordOutOfRange {
                board: board.into(),
                cell: cell.into(),
            });
        }
        Ok(Self { board, cell })
    }

    pub fn from_wire(board: i64, cell: i64) -> Result<Self, ProtocolError> {
        let out_of_range = || ProtocolError::CoordOutOfRange { board, cell };
        let board = u8::try_from(board).map_err(|_| out_of_range())?;
        let cell = u8::try_from(cell).map_err(|_| out_of_range())?;
        Self::new(board, cell).map_err(|_| out_of_range())
    }

    pub fn board(self) -> u8 {
        self.board
    }

    pub fn cell(self) -> u8 {
        self.cell
    }

    /// Every coordinate of the composite board in board-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|board| (0..BOARD_SIZE).map(move |cell| Coord { board, cell }))
    }
}

impl TryFrom<[i64; 2]> for Coord {
    type Error = ProtocolError;

    fn try_from([board, cell]: [i64; 2]) -> Result<Self, Self::Error> {
        Coord::from_wire(board, cell)
    }
}

impl From<Coord> for [i64; 2] {
    fn from(value: Coord) -> Self {
        [value.board.into(), value.cell.into()]
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.board, self.cell)
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
