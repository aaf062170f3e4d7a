use super::*;
use crate::types::Player;

#[test]
fn knight_has_eight_moves_from_center() {
    let mut board = Board::new(7, 7);
    board.place_player(Player::One, 3, 3);
    let moves = board.legal_moves(Player::One);
    assert_eq!(moves.len(), 8);
}

#[test]
fn knight_has_two_moves_from_corner() {
    let mut board = Board::new(7, 7);
    board.place_player(Player::One, 0, 0);
    let moves = board.legal_moves(Player::One);
    assert_eq!(moves, vec![Move::new(1, 2), Move::new(2, 1)]);
}

#[test]
fn blocked_cells_are_excluded() {
    let mut board = Board::new(7, 7);
    board.place_player(Player::One, 0, 0);
    board.block(1, 2);
    assert_eq!(board.legal_moves(Player::One), vec![Move::new(2, 1)]);
}

#[test]
fn unplaced_player_opens_anywhere_blank() {
    let mut board = Board::new(3, 3);
    board.place_player(Player::One, 1, 1);
    let moves = board.legal_moves(Player::Two);
    assert_eq!(moves.len(), 8); // 9 cells minus the occupied one
    // Row-major order, skipping (1, 1).
    assert_eq!(moves[0], Move::new(0, 0));
    assert_eq!(moves[3], Move::new(1, 0));
    assert_eq!(moves[4], Move::new(1, 2));
}

#[test]
fn enumeration_order_is_stable() {
    let mut board = Board::new(7, 7);
    board.place_player(Player::One, 3, 3);
    let first = board.legal_moves(Player::One);
    let second = board.legal_moves(Player::One);
    assert_eq!(first, second);
    // Matches KNIGHT_OFFSETS order.
    assert_eq!(first[0], Move::new(1, 2));
    assert_eq!(first[7], Move::new(5, 4));
}
