use super::*;

fn s(row: u8, col: u8) -> Square {
    Square::new(row, col)
}

#[test]
fn test_startpos_moves() {
    let b = Board::startpos();
    // Each side has 7 quiet moves from its front row and nothing to capture
    let white = color_moves(&b, Color::White);
    let black = color_moves(&b, Color::Black);
    assert_eq!(white.len(), 7);
    assert_eq!(black.len(), 7);
    assert!(!white.has_captures);
    assert!(!black.has_captures);
}

#[test]
fn test_single_capture_example() {
    let mut b = Board::empty();
    b.set(s(2, 3), Cell::Man(Color::White));
    b.set(s(3, 4), Cell::Man(Color::Black));

    let set = color_moves(&b, Color::White);
    assert!(set.has_captures);
    assert_eq!(set.moves.len(), 1);
    let mv = set.moves[0];
    assert_eq!(mv.from, s(2, 3));
    assert_eq!(mv.to, s(4, 5));
    assert_eq!(mv.captured, Some(s(3, 4)));
}

#[test]
fn test_man_captures_backwards() {
    let b = Board::from_ascii(
        "
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . w . . . .
        . . b . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        ",
    );
    let set = piece_moves(&b, s(3, 3));
    assert!(set.has_captures);
    assert_eq!(set.moves, vec![Move::new(s(3, 3), s(5, 1))]);
    assert_eq!(set.moves[0].captured, Some(s(4, 2)));
}

#[test]
fn test_man_quiet_moves_only_forward() {
    let mut b = Board::empty();
    b.set(s(4, 3), Cell::Man(Color::White));
    b.set(s(1, 2), Cell::Man(Color::Black));

    let white = piece_moves(&b, s(4, 3));
    assert!(!white.has_captures);
    assert_eq!(white.len(), 2);
    assert!(white.moves.iter().all(|m| m.to.row == 3));

    let black = piece_moves(&b, s(1, 2));
    assert_eq!(black.len(), 2);
    assert!(black.moves.iter().all(|m| m.to.row == 2));
}

#[test]
fn test_man_blocked_by_edge_and_pieces() {
    let b = Board::from_ascii(
        "
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . w . . . . . .
        w . . . . . . .
        . . . . . . . .
        . . . . . . . .
        ",
    );
    let set = piece_moves(&b, s(5, 0));
    assert!(set.is_empty());
}

#[test]
fn test_capture_suppresses_quiet_moves_of_other_pieces() {
    // The man on (6,1) could step quietly, but (2,3) has a capture
    let b = Board::from_ascii(
        "
        . . . . . . . .
        . . . . . . . .
        . . . w . . . .
        . . . . b . . .
        . . . . . . . .
        . . . . . . . .
        . w . . . . . .
        . . . . . . . .
        ",
    );
    let set = color_moves(&b, Color::White);
    assert!(set.has_captures);
    assert_eq!(set.len(), 1);
    assert!(set.moves.iter().all(Move::is_capture));
}

#[test]
fn test_capture_found_late_discards_earlier_quiet_moves() {
    // Scan reaches the quiet piece on row 1 before the capturing piece on row 5
    let b = Board::from_ascii(
        "
        . . . . . . . .
        . . w . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . b . . .
        . . . w . . . .
        . . . . . . . .
        . . . . . . . .
        ",
    );
    let set = color_moves(&b, Color::White);
    assert!(set.has_captures);
    assert_eq!(set.moves, vec![Move::new(s(5, 3), s(3, 5))]);
}

#[test]
fn test_no_capture_over_friendly_piece() {
    let b = Board::from_ascii(
        "
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . w . . .
        . . . w . . . .
        . . . . . . . .
        . . . . . . . .
        ",
    );
    let set = piece_moves(&b, s(5, 3));
    assert!(!set.has_captures);
}

#[test]
fn test_king_slides_whole_diagonal() {
    let mut b = Board::empty();
    b.set(s(7, 0), Cell::King(Color::White));
    let set = piece_moves(&b, s(7, 0));
    assert!(!set.has_captures);
    assert_eq!(set.len(), 7);
}

#[test]
fn test_king_slide_stops_before_piece() {
    let b = Board::from_ascii(
        "
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . w . . .
        . . . . . . . .
        . . . . . . . .
        . W . . . . . .
        . . . . . . . .
        ",
    );
    let set = piece_moves(&b, s(6, 1));
    // up-right stops at (4,3); plus (5,0), (7,0) and (7,2)
    assert_eq!(set.len(), 5);
    assert!(!set.contains(&Move::new(s(6, 1), s(3, 4))));
}

#[test]
fn test_king_flying_capture_lands_beyond_victim() {
    let b = Board::from_ascii(
        "
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . b . . . . .
        . . . . . . . .
        W . . . . . . .
        ",
    );
    let set = piece_moves(&b, s(7, 0));
    assert!(set.has_captures);
    // Every empty square behind the victim is a landing square
    let landings: Vec<Square> = set.moves.iter().map(|m| m.to).collect();
    assert_eq!(landings, vec![s(4, 3), s(3, 4), s(2, 5), s(1, 6), s(0, 7)]);
    assert!(set.moves.iter().all(|m| m.captured == Some(s(5, 2))));
}

#[test]
fn test_king_never_jumps_two_pieces() {
    let b = Board::from_ascii(
        "
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . b . . . .
        . . b . . . . .
        . . . . . . . .
        W . . . . . . .
        ",
    );
    let set = piece_moves(&b, s(7, 0));
    assert!(!set.has_captures);
}

#[test]
fn test_king_stops_at_piece_behind_victim() {
    let b = Board::from_ascii(
        "
        . . . . . . . .
        . . . . . . . .
        . . . . . b . .
        . . . . . . . .
        . . . . . . . .
        . . b . . . . .
        . . . . . . . .
        W . . . . . . .
        ",
    );
    let set = piece_moves(&b, s(7, 0));
    let landings: Vec<Square> = set.moves.iter().map(|m| m.to).collect();
    assert_eq!(landings, vec![s(4, 3), s(3, 4)]);
}

#[test]
fn test_king_never_captures_friendly_piece() {
    let b = Board::from_ascii(
        "
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . w . . . . .
        . . . . . . . .
        W . . . . . . .
        ",
    );
    let set = piece_moves(&b, s(7, 0));
    assert!(!set.has_captures);
    assert_eq!(set.moves, vec![Move::new(s(7, 0), s(6, 1))]);
}

#[test]
fn test_apply_capture_removes_victim() {
    let mut b = Board::empty();
    b.set(s(2, 3), Cell::Man(Color::White));
    b.set(s(3, 4), Cell::Man(Color::Black));
    let next = apply(&b, Move::capture(s(2, 3), s(4, 5), s(3, 4)));
    assert_eq!(next.get(s(2, 3)), Cell::Empty);
    assert_eq!(next.get(s(3, 4)), Cell::Empty);
    assert_eq!(next.get(s(4, 5)), Cell::Man(Color::White));
}

#[test]
fn test_apply_promotes_on_far_row() {
    let mut b = Board::empty();
    b.set(s(1, 2), Cell::Man(Color::White));
    b.set(s(6, 5), Cell::Man(Color::Black));

    let next = apply(&b, Move::new(s(1, 2), s(0, 1)));
    assert_eq!(next.get(s(0, 1)), Cell::King(Color::White));

    let next = apply(&b, Move::new(s(6, 5), s(7, 4)));
    assert_eq!(next.get(s(7, 4)), Cell::King(Color::Black));
}

#[test]
fn test_apply_keeps_kind_elsewhere() {
    let mut b = Board::empty();
    b.set(s(5, 2), Cell::Man(Color::White));
    b.set(s(3, 4), Cell::King(Color::Black));

    assert_eq!(
        apply(&b, Move::new(s(5, 2), s(4, 3))).get(s(4, 3)),
        Cell::Man(Color::White)
    );
    assert_eq!(
        apply(&b, Move::new(s(3, 4), s(7, 0))).get(s(7, 0)),
        Cell::King(Color::Black)
    );
}

#[test]
fn test_apply_leaves_input_untouched() {
    let b = Board::startpos();
    let before = b;
    let a = apply(&b, Move::new(s(5, 0), s(4, 1)));
    let c = apply(&b, Move::new(s(5, 2), s(4, 3)));
    assert_eq!(b, before);
    assert_ne!(a, c);
    assert_eq!(a.get(s(5, 2)), Cell::Man(Color::White));
    assert_eq!(c.get(s(5, 0)), Cell::Man(Color::White));
}

#[test]
fn test_move_equality_ignores_capture_tag() {
    let quiet = Move::new(s(2, 3), s(4, 5));
    let jump = Move::capture(s(2, 3), s(4, 5), s(3, 4));
    assert_eq!(quiet, jump);
    assert_ne!(quiet, Move::new(s(4, 5), s(2, 3)));
}
