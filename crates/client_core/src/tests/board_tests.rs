use super::*;
use crate::test_support::{action, completed, coord, coords};

#[test]
fn fresh_board_has_no_played_or_clickable_cells() {
    let board = BoardModel::new();

    assert_eq!(board.cells().count(), 81);
    assert!(board
        .cells()
        .all(|(_, cell)| !cell.played() && !cell.clickable() && cell.owner().is_none()));
    assert_eq!(board.result(), None);
    assert_eq!(board.sub_board_status(0), Some(SubBoardStatus::Locked));
}

#[test]
fn completion_cascade_fills_only_unplayed_cells() {
    let mut board = BoardModel::new();
    board.apply_update(&action(0, 0, Player::Red, &[(0, 1)]));

    let mut finishing = action(0, 4, Player::Blue, &[(1, 0), (1, 1)]);
    finishing.completed_boards = vec![completed(Outcome::Winner(Player::Blue), 0)];
    board.apply_update(&finishing);

    assert_eq!(
        board.cell(coord(0, 0)).owner(),
        Some(CellOwner::Player(Player::Red))
    );
    assert_eq!(
        board.cell(coord(0, 4)).owner(),
        Some(CellOwner::Player(Player::Blue))
    );
    for cell_index in [1, 2, 3, 5, 6, 7, 8] {
        let cell = board.cell(coord(0, cell_index));
        assert_eq!(
            cell.owner(),
            Some(CellOwner::Claimed(Outcome::Winner(Player::Blue)))
        );
        assert!(!cell.clickable());
    }
    assert_eq!(
        board.sub_board_status(0),
        Some(SubBoardStatus::Won(Player::Blue))
    );
    assert_eq!(board.clickable_coords(), coords(&[(1, 0), (1, 1)]));
}

#[test]
fn reapplying_a_completion_is_a_no_op() {
    let mut first = action(2, 2, Player::Red, &[(5, 0)]);
    first.completed_boards = vec![completed(Outcome::Draw, 2)];

    let mut once = BoardModel::new();
    once.apply_update(&first);

    let mut twice = once.clone();
    let mut repeat = action(5, 0, Player::Blue, &[(0, 0)]);
    repeat.completed_boards = vec![
        completed(Outcome::Draw, 2),
        completed(Outcome::Winner(Player::Blue), 2),
    ];
    twice.apply_update(&repeat);

    assert_eq!(once.sub_board(2), twice.sub_board(2));
    assert_eq!(twice.sub_board_status(2), Some(SubBoardStatus::Drawn));
}

#[test]
fn played_cells_never_revert() {
    let mut board = BoardModel::new();
    board.apply_update(&action(4, 4, Player::Blue, &[(4, 0), (4, 1)]));
    board.apply_update(&action(4, 0, Player::Red, &[(0, 0)]));
    board.apply_update(&action(0, 0, Player::Blue, &[(4, 4), (4, 1)]));

    assert!(board.cell(coord(4, 4)).played());
    assert!(board.cell(coord(4, 0)).played());
    assert!(board.cell(coord(0, 0)).played());
    assert_eq!(
        board.cell(coord(4, 4)).owner(),
        Some(CellOwner::Player(Player::Blue))
    );
}

#[test]
fn only_current_legal_moves_stay_highlighted() {
    let mut board = BoardModel::new();
    board.apply_update(&action(0, 3, Player::Blue, &[(3, 0), (3, 1), (3, 2)]));
    board.apply_update(&action(3, 1, Player::Red, &[(1, 5), (1, 6)]));

    assert_eq!(board.clickable_coords(), coords(&[(1, 5), (1, 6)]));
    assert_eq!(board.cell(coord(3, 0)).highlight(), Highlight::Neutral);
    assert_eq!(board.sub_board_status(1), Some(SubBoardStatus::Open));
    assert_eq!(board.sub_board_status(3), Some(SubBoardStatus::Locked));
}

#[test]
fn locked_updates_highlight_without_clickability() {
    let mut board = BoardModel::new();
    let mut update = action(0, 0, Player::Blue, &[(0, 1), (0, 2)]);
    update.locked = true;
    board.apply_update(&update);

    for legal in coords(&[(0, 1), (0, 2)]) {
        assert_eq!(board.cell(legal).highlight(), Highlight::LegalLocked);
        assert!(!board.cell(legal).clickable());
    }
    assert!(board.clickable_coords().is_empty());
    assert_eq!(board.sub_board_status(0), Some(SubBoardStatus::Open));
}

#[test]
fn terminal_update_records_move_and_completion_but_offers_nothing() {
    let mut board = BoardModel::new();
    board.apply_update(&action(6, 6, Player::Red, &[(6, 0), (6, 1)]));

    let mut last = action(6, 0, Player::Blue, &[(2, 2), (2, 3)]);
    last.completed_boards = vec![completed(Outcome::Winner(Player::Blue), 6)];
    last.result = Some(Outcome::Winner(Player::Blue));
    board.apply_update(&last);

    assert_eq!(board.result(), Some(Outcome::Winner(Player::Blue)));
    assert!(board.is_terminal());
    assert!(board.clickable_coords().is_empty());
    assert_eq!(board.cell(coord(2, 2)).highlight(), Highlight::Neutral);
    assert_eq!(
        board.cell(coord(6, 0)).owner(),
        Some(CellOwner::Player(Player::Blue))
    );
    assert_eq!(
        board.cell(coord(6, 1)).owner(),
        Some(CellOwner::Claimed(Outcome::Winner(Player::Blue)))
    );
}

#[test]
fn legal_moves_inside_a_completing_sub_board_stay_unclickable() {
    let mut board = BoardModel::new();
    let mut finishing = action(0, 4, Player::Blue, &[(0, 1), (1, 0)]);
    finishing.completed_boards = vec![completed(Outcome::Winner(Player::Blue), 0)];
    board.apply_update(&finishing);

    let claimed = board.cell(coord(0, 1));
    assert!(claimed.played());
    assert!(!claimed.clickable());
    assert_eq!(claimed.highlight(), Highlight::Neutral);
    assert_eq!(
        claimed.clickable(),
        crate::render::render_cell(claimed).clickable
    );
    assert_eq!(board.clickable_coords(), coords(&[(1, 0)]));
}
