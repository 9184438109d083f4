//! Game record: current board, side to move, and snapshots for undo.

use crate::{board::Board, movegen::*, types::*};

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The side to move has no legal move and loses.
    Win(Color),
    /// Turn limit reached.
    Draw,
}

#[derive(Clone, Debug)]
struct Snapshot {
    board: Board,
    side_to_move: Color,
}

#[derive(Clone, Debug)]
pub struct Game {
    pub board: Board,
    pub side_to_move: Color,
    history: Vec<Snapshot>,
    turns_played: u32,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// New game from the standard opening, white to move.
    pub fn new() -> Self {
        Self::from_board(Board::startpos(), Color::White)
    }

    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
            history: Vec::new(),
            turns_played: 0,
        }
    }

    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }

    /// True when there is a completed turn to roll back.
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Apply one step of the current turn without passing the move.
    ///
    /// Used by interactive callers that feed a capture chain jump by jump;
    /// call [`Game::end_turn`] once the chain is complete.
    pub fn apply_move(&mut self, mv: Move) {
        debug_assert_eq!(
            self.board.get(mv.from).color(),
            Some(self.side_to_move),
            "moving a piece that does not belong to the side to move"
        );
        self.board = apply(&self.board, mv);
    }

    /// Record the position before a turn starts so it can be undone.
    pub fn begin_turn(&mut self) {
        self.history.push(Snapshot {
            board: self.board,
            side_to_move: self.side_to_move,
        });
    }

    pub fn end_turn(&mut self) {
        self.side_to_move = self.side_to_move.other();
        self.turns_played += 1;
    }

    /// Apply a whole turn sequence and pass the move to the opponent.
    pub fn play_turn(&mut self, turns: &[Move]) {
        self.begin_turn();
        for &mv in turns {
            self.apply_move(mv);
        }
        self.end_turn();
    }

    /// Roll back the last completed turn. Returns false if nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(snap) => {
                self.board = snap.board;
                self.side_to_move = snap.side_to_move;
                self.turns_played = self.turns_played.saturating_sub(1);
                true
            }
            None => false,
        }
    }

    /// Legal moves for the side to move, in scan order.
    pub fn legal_moves(&self) -> MoveSet {
        color_moves(&self.board, self.side_to_move)
    }

    /// `Some(Win(..))` once the side to move is stuck, `None` while play goes on.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.legal_moves().is_empty() {
            Some(Outcome::Win(self.side_to_move.other()))
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
