//! Local copy of the 9x9 composite board as last reported by the game server.

use shared::{
    domain::{Coord, Outcome, Player, BOARD_SIZE},
    protocol::ActionUpdate,
};
use tracing::debug;

const SIZE: usize = BOARD_SIZE as usize;

/// Who filled a cell: the player who moved there, or the result of the
/// sub-board it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellOwner {
    Player(Player),
    Claimed(Outcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    Neutral,
    Legal,
    /// Legal, but the server is busy computing its reply.
    LegalLocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    owner: Option<CellOwner>,
    highlight: Highlight,
}

impl Cell {
    pub fn owner(&self) -> Option<CellOwner> {
        self.owner
    }

    pub fn highlight(&self) -> Highlight {
        self.highlight
    }

    pub fn played(&self) -> bool {
        self.owner.is_some()
    }

    pub fn clickable(&self) -> bool {
        self.highlight == Highlight::Legal && self.owner.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubBoardStatus {
    Open,
    Locked,
    Won(Player),
    Drawn,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubBoard {
    cells: [Cell; SIZE],
    completion: Option<Outcome>,
}

impl SubBoard {
    pub fn cells(&self) -> &[Cell; SIZE] {
        &self.cells
    }

    pub fn completion(&self) -> Option<Outcome> {
        self.completion
    }

    pub fn status(&self) -> SubBoardStatus {
        match self.completion {
            Some(Outcome::Winner(player)) => SubBoardStatus::Won(player),
            Some(Outcome::Draw) => SubBoardStatus::Drawn,
            None if self.cells.iter().any(|cell| cell.highlight != Highlight::Neutral) => {
                SubBoardStatus::Open
            }
            None => SubBoardStatus::Locked,
        }
    }

    /// Fills every still-empty cell with `outcome`. Only the first completion
    /// reported for a sub-board takes effect.
    fn complete(&mut self, outcome: Outcome) -> bool {
        if self.completion.is_some() {
            return false;
        }
        self.completion = Some(outcome);
        for cell in self.cells.iter_mut().filter(|cell| !cell.played()) {
            cell.owner = Some(CellOwner::Claimed(outcome));
            cell.highlight = Highlight::Neutral;
        }
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardModel {
    sub_boards: [SubBoard; SIZE],
    result: Option<Outcome>,
}

impl BoardModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(&self, coord: Coord) -> &Cell {
        &self.sub_boards[usize::from(coord.board())].cells[usize::from(coord.cell())]
    }

    fn cell_mut(&mut self, coord: Coord) -> &mut Cell {
        &mut self.sub_boards[usize::from(coord.board())].cells[usize::from(coord.cell())]
    }

    pub fn sub_boards(&self) -> &[SubBoard; SIZE] {
        &self.sub_boards
    }

    pub fn sub_board(&self, index: u8) -> Option<&SubBoard> {
        self.sub_boards.get(usize::from(index))
    }

    pub fn sub_board_status(&self, index: u8) -> Option<SubBoardStatus> {
        self.sub_board(index).map(SubBoard::status)
    }

    pub fn result(&self) -> Option<Outcome> {
        self.result
    }

    pub fn is_terminal(&self) -> bool {
        self.result.is_some()
    }

    pub fn cells(&self) -> impl Iterator<Item = (Coord, &Cell)> + '_ {
        Coord::all().map(move |coord| (coord, self.cell(coord)))
    }

    pub fn clickable_coords(&self) -> Vec<Coord> {
        self.cells()
            .filter(|(_, cell)| cell.clickable())
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Folds one authoritative action into the board.
    ///
    /// Completions are painted before the neutral reset so that the cells they
    /// fill are already played and survive it. The moved cell is recorded last,
    /// even when the update ends the game.
    pub fn apply_update(&mut self, update: &ActionUpdate) {
        for completed in &update.completed_boards {
            if let Some(sub_board) = self.sub_boards.get_mut(usize::from(completed.board)) {
                if sub_board.complete(completed.outcome) {
                    debug!(
                        board = completed.board,
                        outcome = completed.outcome.code(),
                        "sub-board completed"
                    );
                }
            }
        }

        for sub_board in &mut self.sub_boards {
            for cell in sub_board.cells.iter_mut().filter(|cell| !cell.played()) {
                cell.highlight = Highlight::Neutral;
            }
        }

        if update.result.is_none() {
            let highlight = if update.locked {
                Highlight::LegalLocked
            } else {
                Highlight::Legal
            };
            // Claimed cells stay inert even if the server still lists them.
            for coord in &update.valid_moves {
                let cell = self.cell_mut(*coord);
                if !cell.played() {
                    cell.highlight = highlight;
                }
            }
        }

        let moved = self.cell_mut(update.coord);
        moved.owner = Some(CellOwner::Player(update.player));
        moved.highlight = Highlight::Neutral;

        if let Some(result) = update.result {
            self.result = Some(result);
        }
    }
}

#[cfg(test)]
#[path = "tests/board_tests.rs"]
mod tests;
