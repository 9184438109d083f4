use std::fmt;

use crate::types::*;

/// 8x8 draughts board. Row 0 is black's home edge and white's crowning row.
///
/// `Board` is `Copy`: every search step and every transition works on its own
/// value, the caller's board is never touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub cells: [[Cell; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; 8]; 8],
        }
    }

    /// Standard opening: three rows of men per side on the dark squares.
    pub fn startpos() -> Self {
        let mut b = Board::empty();
        for row in 0..8u8 {
            for col in 0..8u8 {
                let s = Square::new(row, col);
                if !is_dark(s) {
                    continue;
                }
                if row < 3 {
                    b.set(s, Cell::Man(Color::Black));
                } else if row > 4 {
                    b.set(s, Cell::Man(Color::White));
                }
            }
        }
        b
    }

    /// Parses eight lines of eight cells (`.` empty, `w`/`b` men, `W`/`B` kings),
    /// row 0 first. Whitespace between cells is ignored. Used by tests and setup.
    pub fn from_ascii(text: &str) -> Self {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        assert!(rows.len() == 8, "Invalid board: expected 8 rows, got {}", rows.len());

        let mut b = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<Cell> = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| Cell::from_char(c).unwrap_or_else(|| panic!("Invalid cell char: {c}")))
                .collect();
            assert!(cells.len() == 8, "Invalid board row {row}: {line:?}");
            for (col, cell) in cells.into_iter().enumerate() {
                b.cells[row][col] = cell;
            }
        }
        b
    }

    /// Builds a board from the integer cell encoding. Returns `None` on unknown codes.
    pub fn from_codes(codes: &[[u8; 8]; 8]) -> Option<Self> {
        let mut b = Board::empty();
        for (row, line) in codes.iter().enumerate() {
            for (col, &code) in line.iter().enumerate() {
                b.cells[row][col] = Cell::from_code(code)?;
            }
        }
        Some(b)
    }

    pub fn to_codes(&self) -> [[u8; 8]; 8] {
        let mut out = [[0u8; 8]; 8];
        for (row, line) in self.cells.iter().enumerate() {
            for (col, cell) in line.iter().enumerate() {
                out[row][col] = cell.code();
            }
        }
        out
    }

    #[inline]
    pub fn get(&self, s: Square) -> Cell {
        self.cells[s.row as usize][s.col as usize]
    }

    #[inline]
    pub fn set(&mut self, s: Square, cell: Cell) {
        self.cells[s.row as usize][s.col as usize] = cell;
    }

    /// All occupied squares with their pieces, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Cell)> + '_ {
        (0..8u8)
            .flat_map(|row| (0..8u8).map(move |col| Square::new(row, col)))
            .map(|s| (s, self.get(s)))
            .filter(|(_, c)| !c.is_empty())
    }

    /// Number of (men, kings) of the given color.
    pub fn count(&self, color: Color) -> (u32, u32) {
        let mut men = 0;
        let mut kings = 0;
        for (_, cell) in self.pieces() {
            match cell {
                Cell::Man(c) if c == color => men += 1,
                Cell::King(c) if c == color => kings += 1,
                _ => {}
            }
        }
        (men, kings)
    }

    /// FNV-1a hash over the cells. Stable for a given position, used to key
    /// per-node move ordering.
    pub fn key(&self) -> u64 {
        fn mix(mut h: u64, x: u64) -> u64 {
            h ^= x;
            h = h.wrapping_mul(0x100000001b3);
            h
        }

        let mut h = 0xcbf29ce484222325u64;
        for (i, cell) in self.cells.iter().flatten().enumerate() {
            h = mix(h, (i as u64) ^ ((cell.code() as u64) << 6));
        }
        h
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   0 1 2 3 4 5 6 7")?;
        for (row, line) in self.cells.iter().enumerate() {
            write!(f, "{row} ")?;
            for cell in line {
                write!(f, " {}", cell.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
