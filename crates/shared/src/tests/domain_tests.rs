use super::*;

#[test]
fn player_codes_follow_wire_encoding() {
    assert_eq!(Player::try_from(-1).expect("red"), Player::Red);
    assert_eq!(Player::try_from(1).expect("blue"), Player::Blue);
    assert!(matches!(
        Player::try_from(0),
        Err(ProtocolError::InvalidPlayer(0))
    ));
    assert_eq!(Player::Red.opponent(), Player::Blue);
}

#[test]
fn outcome_zero_is_draw() {
    assert_eq!(Outcome::try_from(0).expect("draw"), Outcome::Draw);
    assert_eq!(
        Outcome::try_from(1).expect("blue"),
        Outcome::Winner(Player::Blue)
    );
    assert!(Outcome::try_from(3).is_err());
    assert_eq!(Outcome::Draw.winner(), None);
}

#[test]
fn coords_cover_the_composite_board_once() {
    let all: Vec<Coord> = Coord::all().collect();
    assert_eq!(all.len(), 81);
    assert_eq!(all[0], Coord::new(0, 0).expect("origin"));
    assert_eq!(all[80], Coord::new(8, 8).expect("last"));
    assert!(Coord::new(9, 0).is_err());
    assert!(Coord::from_wire(-1, 3).is_err());
}
