//! Piece shapes and the active falling piece

use brickfall_types::{PieceKind, COLS};

use crate::matrix::Matrix;

/// The canonical spawn matrix for a piece kind.
///
/// The I piece lives in a 4×4 grid (second row filled), J/L/S/Z/T in 3×3,
/// O in 2×2 and the brick in 1×1.
pub fn spawn_matrix(kind: PieceKind) -> Matrix {
    match kind {
        PieceKind::I => Matrix::from_rows(&[
            &[0, 0, 0, 0],
            &[1, 1, 1, 1],
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
        ]),
        PieceKind::J => Matrix::from_rows(&[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]]),
        PieceKind::L => Matrix::from_rows(&[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]]),
        PieceKind::O => Matrix::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::S => Matrix::from_rows(&[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]]),
        PieceKind::Z => Matrix::from_rows(&[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]]),
        PieceKind::T => Matrix::from_rows(&[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]]),
        PieceKind::Brick => Matrix::from_rows(&[&[1]]),
    }
}

/// Active falling piece
///
/// `row` may be negative while the piece is still entering the field from
/// above; only cells with resulting row ≥ 0 count for overlap and merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub matrix: Matrix,
    pub row: i8,
    pub col: i8,
}

impl Piece {
    /// Create a piece at its spawn position.
    ///
    /// The brick spawns at row −1 in the middle column. Tetrominoes spawn at
    /// row −2 (two rows of buffer so a 4-tall shape never collides on
    /// spawn), horizontally centered.
    pub fn spawn(kind: PieceKind) -> Self {
        let matrix = spawn_matrix(kind);
        let (row, col) = if kind.is_brick() {
            (-1, (COLS / 2) as i8)
        } else {
            (-2, (COLS as i8 - matrix.size() as i8) / 2)
        };
        Self {
            kind,
            matrix,
            row,
            col,
        }
    }

    /// Copy of this piece shifted by (`dr`, `dc`).
    pub fn moved(&self, dr: i8, dc: i8) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
            ..*self
        }
    }

    /// Copy of this piece rotated 90° clockwise in place.
    pub fn rotated(&self) -> Self {
        Self {
            matrix: self.matrix.rotated(),
            ..*self
        }
    }

    /// Iterate the absolute (row, col) of all occupied cells.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.matrix
            .occupied()
            .map(move |(r, c)| (self.row + r as i8, self.col + c as i8))
    }
}
