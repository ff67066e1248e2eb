//! Projection of the board model onto display primitives.
//!
//! Nothing here holds state: every view is recomputed from a [`BoardModel`]
//! after each mutation. Element ids and attribute names follow the markup the
//! web front-end expects (`boardContainer{i}`, `cell{b}{c}`).

use shared::domain::{Coord, Outcome, Player};

use crate::board::{BoardModel, Cell, CellOwner, Highlight, SubBoardStatus};

pub const NEUTRAL_COLOR: &str = "white";
pub const LEGAL_COLOR: &str = "yellow";
pub const BLUE_MOVE_COLOR: &str = "#46d7ff";
pub const RED_MOVE_COLOR: &str = "#ff4646";
pub const BLUE_CLAIM_COLOR: &str = "#85ccff";
pub const RED_CLAIM_COLOR: &str = "#fc9d9d";
/// Draws get their own grey instead of reusing the red claim color, so a
/// drawn sub-board cannot be mistaken for a Red win.
pub const DRAW_CLAIM_COLOR: &str = "#d9d9d9";
pub const LOCKED_OPACITY: f32 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellStyle {
    pub background: &'static str,
    pub opacity: f32,
    pub clickable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CellView {
    pub element_id: String,
    pub coord: Coord,
    pub owner: Option<CellOwner>,
    pub played: bool,
    pub style: CellStyle,
}

impl CellView {
    /// Markup attributes in the form the front-end reads them back.
    pub fn attributes(&self) -> [(&'static str, String); 4] {
        [
            ("board", self.coord.board().to_string()),
            ("cell", self.coord.cell().to_string()),
            ("clickable", attribute_flag(self.style.clickable).to_string()),
            ("played", attribute_flag(self.played).to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubBoardView {
    pub element_id: String,
    pub index: u8,
    pub status: SubBoardStatus,
    pub class: Option<&'static str>,
    pub cells: Vec<CellView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardView {
    pub sub_boards: Vec<SubBoardView>,
    pub result: Option<Outcome>,
}

impl BoardView {
    pub fn cell(&self, coord: Coord) -> &CellView {
        &self.sub_boards[usize::from(coord.board())].cells[usize::from(coord.cell())]
    }

    pub fn cells(&self) -> impl Iterator<Item = &CellView> {
        self.sub_boards.iter().flat_map(|sub_board| sub_board.cells.iter())
    }
}

fn attribute_flag(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

pub fn move_color(player: Player) -> &'static str {
    match player {
        Player::Blue => BLUE_MOVE_COLOR,
        Player::Red => RED_MOVE_COLOR,
    }
}

pub fn claim_color(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Winner(Player::Blue) => BLUE_CLAIM_COLOR,
        Outcome::Winner(Player::Red) => RED_CLAIM_COLOR,
        Outcome::Draw => DRAW_CLAIM_COLOR,
    }
}

pub fn render_cell(cell: &Cell) -> CellStyle {
    match (cell.owner(), cell.highlight()) {
        (Some(CellOwner::Player(player)), _) => CellStyle {
            background: move_color(player),
            opacity: 1.0,
            clickable: false,
        },
        (Some(CellOwner::Claimed(outcome)), _) => CellStyle {
            background: claim_color(outcome),
            opacity: 1.0,
            clickable: false,
        },
        (None, Highlight::Legal) => CellStyle {
            background: LEGAL_COLOR,
            opacity: 1.0,
            clickable: true,
        },
        (None, Highlight::LegalLocked) => CellStyle {
            background: LEGAL_COLOR,
            opacity: LOCKED_OPACITY,
            clickable: false,
        },
        (None, Highlight::Neutral) => CellStyle {
            background: NEUTRAL_COLOR,
            opacity: 1.0,
            clickable: false,
        },
    }
}

fn sub_board_class(status: SubBoardStatus) -> Option<&'static str> {
    match status {
        SubBoardStatus::Won(Player::Blue) => Some("blueWin"),
        SubBoardStatus::Won(Player::Red) => Some("redWin"),
        // Not `redWin`: draws are styled apart from Red wins.
        SubBoardStatus::Drawn => Some("drawn"),
        SubBoardStatus::Open | SubBoardStatus::Locked => None,
    }
}

pub fn render_board(board: &BoardModel) -> BoardView {
    let sub_boards = board
        .sub_boards()
        .iter()
        .zip(0u8..)
        .map(|(sub_board, index)| {
            let status = sub_board.status();
            let cells = sub_board
                .cells()
                .iter()
                .zip(0u8..)
                .filter_map(|(cell, cell_index)| {
                    let coord = Coord::new(index, cell_index).ok()?;
                    Some(CellView {
                        element_id: format!("cell{index}{cell_index}"),
                        coord,
                        owner: cell.owner(),
                        played: cell.played(),
                        style: render_cell(cell),
                    })
                })
                .collect();
            SubBoardView {
                element_id: format!("boardContainer{index}"),
                index,
                status,
                class: sub_board_class(status),
                cells,
            }
        })
        .collect();

    BoardView {
        sub_boards,
        result: board.result(),
    }
}

pub fn outcome_banner(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Winner(Player::Red) => "Red has won",
        Outcome::Winner(Player::Blue) => "Blue has won",
        Outcome::Draw => "The game is a draw",
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
