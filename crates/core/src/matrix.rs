//! Square occupancy matrices and 90° rotation
//!
//! Every piece shape is a square N×N grid of occupied/empty cells (N from 1
//! for the brick up to 4 for the I piece). Rotation is computed at runtime:
//! `new[i][j] = old[n-1-j][i]` is a clockwise quarter turn. There are no wall
//! kicks anywhere in this game; a rotation that would collide is discarded
//! whole by the caller.

/// Largest supported matrix side (the I piece).
pub const MAX_MATRIX_SIZE: usize = 4;

/// A square 0/1 occupancy grid, at most 4×4.
///
/// Stored inline so pieces stay `Copy`; cells outside `n` are always false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix {
    n: usize,
    cells: [[bool; MAX_MATRIX_SIZE]; MAX_MATRIX_SIZE],
}

impl Matrix {
    /// Build a matrix from row slices of 0/1 values.
    ///
    /// Panics if the row count is outside 1..=4 or any row has a different
    /// length (non-square input is a programming error).
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let n = rows.len();
        assert!(
            (1..=MAX_MATRIX_SIZE).contains(&n),
            "matrix size must be 1..=4, got {n}"
        );

        let mut cells = [[false; MAX_MATRIX_SIZE]; MAX_MATRIX_SIZE];
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), n, "matrix must be square");
            for (j, &v) in row.iter().enumerate() {
                cells[i][j] = v != 0;
            }
        }
        Self { n, cells }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Occupancy at (row, col). Out-of-range is a programming error.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        debug_assert!(row < self.n && col < self.n);
        self.cells[row][col]
    }

    /// The clockwise 90° rotation of this matrix.
    ///
    /// Applying this four times yields the original matrix; the 1×1 brick is
    /// rotation-invariant.
    pub fn rotated(&self) -> Self {
        let n = self.n;
        let mut cells = [[false; MAX_MATRIX_SIZE]; MAX_MATRIX_SIZE];
        for (i, row) in cells.iter_mut().enumerate().take(n) {
            for (j, cell) in row.iter_mut().enumerate().take(n) {
                *cell = self.cells[n - 1 - j][i];
            }
        }
        Self { n, cells }
    }

    /// Iterate the (row, col) offsets of all occupied cells.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.n;
        (0..n).flat_map(move |i| (0..n).filter(move |&j| self.cells[i][j]).map(move |j| (i, j)))
    }
}
