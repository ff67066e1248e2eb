use super::*;
use crate::test_support::{action, completed, coord, coords};
use shared::protocol::MoveSource;

fn init(valid_moves: &[(u8, u8)]) -> ServerMessage {
    ServerMessage::Init(InitMessage {
        player: Some(Player::Blue),
        valid_moves: coords(valid_moves),
    })
}

#[test]
fn init_replaces_legal_moves_without_repaint() {
    let mut view = GameView::new();
    let events = view.handle_message(init(&[(0, 1), (0, 0)]));

    let [ClientEvent::Ready {
        current_player,
        legal_moves,
        view: board_view,
    }] = events.as_slice()
    else {
        panic!("expected a single Ready event, got {events:?}");
    };
    assert_eq!(*current_player, Player::Blue);
    assert_eq!(legal_moves, &coords(&[(0, 0), (0, 1)]));
    assert!(board_view.cells().all(|cell| !cell.played && !cell.style.clickable));
    assert!(view.is_legal(coord(0, 1)));
    assert!(!view.is_legal(coord(1, 0)));
    assert_eq!(view.board(), &BoardModel::new());
}

#[test]
fn action_replaces_state_wholesale_and_flips_turn() {
    let mut view = GameView::new();
    view.handle_message(init(&[(4, 4)]));

    let mut update = action(4, 4, Player::Blue, &[(4, 0), (4, 8)]);
    update.locked = true;
    update.source = MoveSource::Player;
    let events = view.handle_message(ServerMessage::Action(update));

    assert_eq!(view.legal_moves().len(), 2);
    assert!(!view.is_legal(coord(4, 4)));
    assert!(view.locked());
    assert_eq!(view.current_player(), Player::Red);
    let [ClientEvent::BoardUpdated { view: board_view, source, win_chance }] = events.as_slice()
    else {
        panic!("expected a single repaint, got {events:?}");
    };
    assert_eq!(*source, MoveSource::Player);
    assert_eq!(*win_chance, None);
    assert!(board_view.cell(coord(4, 4)).played);
}

#[test]
fn computer_move_records_win_chance() {
    let mut view = GameView::new();
    let mut update = action(1, 1, Player::Red, &[(1, 0)]);
    update.source = MoveSource::Computer;
    update.win_chance = Some(0.25);
    view.handle_message(ServerMessage::Action(update));

    assert_eq!(view.last_win_chance(), Some(0.25));

    view.handle_message(ServerMessage::Action(action(1, 0, Player::Blue, &[(0, 0)])));
    assert_eq!(view.last_win_chance(), Some(0.25));
}

#[test]
fn terminal_result_freezes_banner_and_clickability() {
    let mut view = GameView::new();
    view.handle_message(ServerMessage::Action(action(0, 0, Player::Blue, &[(0, 1)])));

    let mut last = action(0, 1, Player::Red, &[(3, 3)]);
    last.completed_boards = vec![completed(Outcome::Winner(Player::Red), 0)];
    last.result = Some(Outcome::Winner(Player::Red));
    let events = view.handle_message(ServerMessage::Action(last));

    assert!(matches!(
        events.last(),
        Some(ClientEvent::GameOver {
            outcome: Outcome::Winner(Player::Red),
            banner: "Red has won"
        })
    ));
    assert!(view.is_terminal());
    assert_eq!(view.outcome_banner(), Some("Red has won"));

    let frozen = view.board().clone();
    let mut late = action(3, 3, Player::Blue, &[(5, 5), (5, 6)]);
    late.result = Some(Outcome::Draw);
    let events = view.handle_message(ServerMessage::Action(late));

    assert!(events.is_empty());
    assert_eq!(view.board(), &frozen);
    assert_eq!(view.outcome_banner(), Some("Red has won"));
    assert_eq!(view.result(), Some(Outcome::Winner(Player::Red)));
    assert!(view.board().clickable_coords().is_empty());
}

#[test]
fn draw_result_uses_draw_banner() {
    let mut view = GameView::new();
    let mut last = action(8, 8, Player::Blue, &[]);
    last.result = Some(Outcome::Draw);
    view.handle_message(ServerMessage::Action(last));

    assert_eq!(view.outcome_banner(), Some("The game is a draw"));
}

#[test]
fn error_frames_alert_without_mutation() {
    let mut view = GameView::new();
    view.handle_message(init(&[(2, 2)]));
    let before = view.clone();

    let events = view.handle_message(ServerMessage::Error(ErrorMessage {
        message: Some("game not found".to_string()),
    }));

    assert!(matches!(
        events.as_slice(),
        [ClientEvent::Alert(text)] if text == "Unknown error: game not found"
    ));
    assert_eq!(view.legal_moves(), before.legal_moves());
    assert_eq!(view.board(), before.board());
}
