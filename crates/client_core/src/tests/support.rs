use shared::{
    domain::{Coord, Outcome, Player},
    protocol::{ActionUpdate, CompletedBoard, MoveSource},
};

pub fn coord(board: u8, cell: u8) -> Coord {
    Coord::new(board, cell).expect("coord in range")
}

pub fn coords(pairs: &[(u8, u8)]) -> Vec<Coord> {
    pairs.iter().map(|&(board, cell)| coord(board, cell)).collect()
}

pub fn completed(outcome: Outcome, board: u8) -> CompletedBoard {
    CompletedBoard { outcome, board }
}

/// An unlocked, in-progress player move with no completions.
pub fn action(board: u8, cell: u8, player: Player, valid_moves: &[(u8, u8)]) -> ActionUpdate {
    ActionUpdate {
        source: MoveSource::Player,
        coord: coord(board, cell),
        player,
        valid_moves: coords(valid_moves),
        completed_boards: Vec::new(),
        locked: false,
        result: None,
        win_chance: None,
    }
}
