use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
    /// Row delta of a man's forward step.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
    /// Row on which a man of this color is crowned.
    pub fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Content of a single board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Man(Color),
    King(Color),
}

impl Cell {
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Man(c) | Cell::King(c) => Some(c),
        }
    }
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
    pub fn is_king(self) -> bool {
        matches!(self, Cell::King(_))
    }
    pub fn is_enemy_of(self, color: Color) -> bool {
        self.color() == Some(color.other())
    }

    /// Integer encoding used by board snapshots from the UI layer:
    /// 0 empty, 1/2 white/black man, 3/4 white/black king.
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Man(Color::White) => 1,
            Cell::Man(Color::Black) => 2,
            Cell::King(Color::White) => 3,
            Cell::King(Color::Black) => 4,
        }
    }
    pub fn from_code(code: u8) -> Option<Cell> {
        match code {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Man(Color::White)),
            2 => Some(Cell::Man(Color::Black)),
            3 => Some(Cell::King(Color::White)),
            4 => Some(Cell::King(Color::Black)),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Man(Color::White) => 'w',
            Cell::Man(Color::Black) => 'b',
            Cell::King(Color::White) => 'W',
            Cell::King(Color::Black) => 'B',
        }
    }
    pub fn from_char(ch: char) -> Option<Cell> {
        match ch {
            '.' | '_' => Some(Cell::Empty),
            'w' => Some(Cell::Man(Color::White)),
            'b' => Some(Cell::Man(Color::Black)),
            'W' => Some(Cell::King(Color::White)),
            'B' => Some(Cell::King(Color::Black)),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8, // 0..8
    pub col: u8, // 0..8
}

impl Square {
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8, "square ({row}, {col}) off the board");
        Self { row, col }
    }

    /// Neighbouring square `steps` cells away along the diagonal (dr, dc).
    pub fn offset(self, dr: i8, dc: i8, steps: i8) -> Option<Square> {
        sq(self.row as i8 + dr * steps, self.col as i8 + dc * steps)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four diagonal directions as (row delta, col delta).
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// A single step of a turn: a quiet move or one jump of a capture chain.
///
/// Two moves compare equal when they connect the same squares, whether or not
/// one of them is tagged with a captured square.
#[derive(Clone, Copy, Debug)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub captured: Option<Square>,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            captured: None,
        }
    }

    pub fn capture(from: Square, to: Square, captured: Square) -> Self {
        Self {
            from,
            to,
            captured: Some(captured),
        }
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}
impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}

/// Moves available to a color or a single piece, plus whether they are captures.
///
/// When `has_captures` is set every move in `moves` is a capture.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MoveSet {
    pub moves: Vec<Move>,
    pub has_captures: bool,
}

impl MoveSet {
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
    pub fn len(&self) -> usize {
        self.moves.len()
    }
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }
}

// Helpers
pub fn sq(row: i8, col: i8) -> Option<Square> {
    if (0..8).contains(&row) && (0..8).contains(&col) {
        Some(Square {
            row: row as u8,
            col: col as u8,
        })
    } else {
        None
    }
}

/// Dark squares are the only ones pieces ever stand on.
pub fn is_dark(square: Square) -> bool {
    (square.row + square.col) % 2 == 1
}
