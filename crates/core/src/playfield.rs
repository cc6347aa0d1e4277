//! Playfield - the 10x20 settled-cell grid
//!
//! Flat row-major array for cache locality. Coordinates are (row, col) with
//! row 0 at the top. Pieces enter from negative rows; those cells are never
//! stored, only the visible 20 rows exist.
//!
//! Line clearing is two-phase: `clear_lines` only marks full rows as
//! [`Cell::Burning`] and reports their indices; `remove_rows` physically
//! deletes them later (the loop owns the delay between the two). Rows
//! containing a settled brick are never marked.

use arrayvec::ArrayVec;

use brickfall_types::{Cell, COLS, ROWS};

use crate::piece::Piece;

/// Visible rows as usize, for indexing.
pub const FIELD_ROWS: usize = ROWS as usize;

/// Visible columns as usize, for indexing.
pub const FIELD_COLS: usize = COLS as usize;

/// Total number of cells on the field
const FIELD_SIZE: usize = FIELD_ROWS * FIELD_COLS;

/// The playfield - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playfield {
    /// Flat array of cells, row-major order (row * COLS + col)
    cells: [Cell; FIELD_SIZE],
}

impl Playfield {
    /// Create a new empty playfield
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; FIELD_SIZE],
        }
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= ROWS as i8 || col < 0 || col >= COLS as i8 {
            return None;
        }
        Some((row as usize) * FIELD_COLS + (col as usize))
    }

    /// Get cell at (row, col); `None` if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col); returns false if out of bounds
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check a piece against walls, floor and settled cells.
    ///
    /// For every occupied cell of the piece: a column outside the field is a
    /// collision; a negative row is the spawn buffer and exempt from overlap
    /// (but still wall-checked); a row past the floor or a non-empty cell is
    /// a collision. Burning cells count as solid. Pure; call before
    /// committing any move or rotation.
    pub fn has_collision(&self, piece: &Piece) -> bool {
        for (row, col) in piece.cells() {
            if col < 0 || col >= COLS as i8 {
                return true;
            }
            if row < 0 {
                continue;
            }
            if row >= ROWS as i8 {
                return true;
            }
            match self.get(row, col) {
                Some(cell) if cell.is_solid() => return true,
                _ => {}
            }
        }
        false
    }

    /// Stamp a piece's occupied cells onto the field.
    ///
    /// Cells with a negative resulting row are dropped silently; this is how
    /// a piece that never fully entered the field merges on an immediate
    /// top-out.
    pub fn merge_piece(&mut self, piece: &Piece) {
        for (row, col) in piece.cells() {
            if row >= 0 {
                self.set(row, col, Cell::Filled(piece.kind));
            }
        }
    }

    /// Mark full rows as burning and return their indices (top to bottom).
    ///
    /// A row qualifies when every cell is non-empty and none is a brick; a
    /// brick blocks its row from ever clearing. Marked rows stay on the
    /// field (and collide as solid) until `remove_rows`; they are still
    /// full, so a later call reports them again until they are removed.
    pub fn clear_lines(&mut self) -> ArrayVec<usize, FIELD_ROWS> {
        let mut burning = ArrayVec::new();

        for row in 0..FIELD_ROWS {
            let start = row * FIELD_COLS;
            let cells = &self.cells[start..start + FIELD_COLS];
            if cells.iter().all(|c| c.is_solid()) && !cells.iter().any(|c| c.is_brick()) {
                self.cells[start..start + FIELD_COLS].fill(Cell::Burning);
                burning.push(row);
            }
        }

        burning
    }

    /// Physically delete the listed rows, inserting empty rows at the top.
    ///
    /// Row count is preserved; surviving rows keep their order and settle
    /// toward the bottom. Indices not in range are ignored.
    pub fn remove_rows(&mut self, rows: &[usize]) {
        let mut write_row = FIELD_ROWS;

        // Compact surviving rows toward the bottom.
        for read_row in (0..FIELD_ROWS).rev() {
            if rows.contains(&read_row) {
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let src = read_row * FIELD_COLS;
                let dst = write_row * FIELD_COLS;
                self.cells.copy_within(src..src + FIELD_COLS, dst);
            }
        }

        // Blank whatever is left above.
        self.cells[..write_row * FIELD_COLS].fill(Cell::Empty);
    }

    /// Number of settled brick cells on the field
    pub fn brick_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_brick()).count()
    }

    /// Copy the grid into a 2D array (for snapshots)
    pub fn write_cells(&self, out: &mut [[Cell; FIELD_COLS]; FIELD_ROWS]) {
        for (row, out_row) in out.iter_mut().enumerate() {
            let start = row * FIELD_COLS;
            out_row.copy_from_slice(&self.cells[start..start + FIELD_COLS]);
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new()
    }
}
