use super::*;
use checkers_core::Square;

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::with_seed(1);
    let board = Board::startpos();

    let result = engine.find_best_turns(&board, Color::White);

    assert_eq!(result.turns.len(), 1);
    assert!(color_moves(&board, Color::White).contains(&result.turns[0]));
}

#[test]
fn random_engine_finishes_capture_chain() {
    let board = Board::from_ascii(
        "
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . b . . .
        . . . . . . . .
        . . b . . . . .
        . w . . . . . .
        . . . . . . . .
        ",
    );
    let mut engine = RandomEngine::with_seed(3);

    let result = engine.find_best_turns(&board, Color::White);

    assert_eq!(result.turns.len(), 2);
    assert_eq!(result.turns[0].from, Square::new(6, 1));
    assert_eq!(result.turns[1].from, result.turns[0].to);
    assert_eq!(result.turns[1].to, Square::new(2, 5));
}

#[test]
fn random_engine_handles_blocked_side() {
    let board = Board::from_ascii(
        "
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . b .
        . . . . . w . w
        . . . . w . . .
        ",
    );
    let mut engine = RandomEngine::with_seed(5);

    let result = engine.find_best_turns(&board, Color::Black);

    assert!(result.turns.is_empty());
}
