use crate::{board::Board, types::*};

/// Generate every move available to `color`, in row-major scan order.
///
/// Captures are mandatory: as soon as one piece can capture, quiet moves
/// collected so far are dropped and only captures are gathered from then on.
pub fn color_moves(board: &Board, color: Color) -> MoveSet {
    let mut out = MoveSet::default();
    for (from, cell) in board.pieces() {
        if cell.color() != Some(color) {
            continue;
        }
        let piece = piece_moves(board, from);
        if piece.has_captures && !out.has_captures {
            out.has_captures = true;
            out.moves.clear();
        }
        if piece.has_captures || !out.has_captures {
            out.moves.extend(piece.moves);
        }
    }
    out
}

/// Generate the moves of the piece standing on `from`.
///
/// If the piece has any capture, only its captures are returned.
pub fn piece_moves(board: &Board, from: Square) -> MoveSet {
    let cell = board.get(from);
    debug_assert!(!cell.is_empty(), "no piece on {from}");

    let mut out = MoveSet::default();
    match cell {
        Cell::Empty => return out,
        Cell::Man(c) => gen_man_captures(board, from, c, &mut out.moves),
        Cell::King(c) => gen_king_captures(board, from, c, &mut out.moves),
    }
    if !out.moves.is_empty() {
        out.has_captures = true;
        return out;
    }
    match cell {
        Cell::Man(c) => gen_man_steps(board, from, c, &mut out.moves),
        Cell::King(_) => gen_king_slides(board, from, &mut out.moves),
        Cell::Empty => {}
    }
    out
}

/// Play `mv` on a copy of `board` and return the copy.
///
/// Clears the captured square, then the origin, then writes the piece on the
/// destination, crowning a man that reaches its promotion row.
pub fn apply(board: &Board, mv: Move) -> Board {
    let mut next = *board;
    if let Some(victim) = mv.captured {
        next.set(victim, Cell::Empty);
    }
    let piece = match next.get(mv.from) {
        Cell::Man(c) if mv.to.row == c.promotion_row() => Cell::King(c),
        other => other,
    };
    next.set(mv.from, Cell::Empty);
    next.set(mv.to, piece);
    next
}

fn gen_man_captures(board: &Board, from: Square, c: Color, out: &mut Vec<Move>) {
    // men capture in all four directions
    for (dr, dc) in DIAGONALS {
        let (Some(over), Some(to)) = (from.offset(dr, dc, 1), from.offset(dr, dc, 2)) else {
            continue;
        };
        if board.get(to).is_empty() && board.get(over).is_enemy_of(c) {
            out.push(Move::capture(from, to, over));
        }
    }
}

fn gen_man_steps(board: &Board, from: Square, c: Color, out: &mut Vec<Move>) {
    for dc in [-1, 1] {
        if let Some(to) = from.offset(c.forward(), dc, 1) {
            if board.get(to).is_empty() {
                out.push(Move::new(from, to));
            }
        }
    }
}

fn gen_king_captures(board: &Board, from: Square, c: Color, out: &mut Vec<Move>) {
    for (dr, dc) in DIAGONALS {
        let mut victim: Option<Square> = None;
        let mut steps = 1;
        while let Some(to) = from.offset(dr, dc, steps) {
            steps += 1;
            let cell = board.get(to);
            if !cell.is_empty() {
                // a friendly piece, or a second piece behind the victim, ends the ray
                if !cell.is_enemy_of(c) || victim.is_some() {
                    break;
                }
                victim = Some(to);
                continue;
            }
            if let Some(v) = victim {
                out.push(Move::capture(from, to, v));
            }
        }
    }
}

fn gen_king_slides(board: &Board, from: Square, out: &mut Vec<Move>) {
    for (dr, dc) in DIAGONALS {
        let mut steps = 1;
        while let Some(to) = from.offset(dr, dc, steps) {
            if !board.get(to).is_empty() {
                break;
            }
            out.push(Move::new(from, to));
            steps += 1;
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
