use crate::{
    board::Board,
    movegen::{apply, color_moves, piece_moves},
    types::{Color, Move},
};

/// Every complete turn available to `side`, with capture chains expanded
/// into one sequence per distinct path.
pub fn full_turns(board: &Board, side: Color) -> Vec<Vec<Move>> {
    let set = color_moves(board, side);
    let mut out = Vec::with_capacity(set.len());
    for mv in set.moves {
        if set.has_captures {
            extend_chain(&apply(board, mv), vec![mv], &mut out);
        } else {
            out.push(vec![mv]);
        }
    }
    out
}

fn extend_chain(board: &Board, turn: Vec<Move>, out: &mut Vec<Vec<Move>>) {
    let at = turn[turn.len() - 1].to;
    let cont = piece_moves(board, at);
    if !cont.has_captures {
        out.push(turn);
        return;
    }
    for mv in cont.moves {
        let mut next = turn.clone();
        next.push(mv);
        extend_chain(&apply(board, mv), next, out);
    }
}

/// Pure perft node count.
/// Counts all positions reachable in exactly `depth` full turns.
pub fn perft(board: &Board, side: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    full_turns(board, side)
        .iter()
        .map(|turn| {
            let next = turn.iter().fold(*board, |b, mv| apply(&b, *mv));
            perft(&next, side.other(), depth - 1)
        })
        .sum()
}
