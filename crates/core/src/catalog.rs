//! Shape catalog - the seven tetromino matrices and their colors.
//!
//! Pure data. Each shape is an immutable boolean matrix in its spawn
//! orientation, bound one-to-one to a fixed color; rotation produces new
//! matrices at runtime (see [`Shape::rotated_cw`]). The catalog is static
//! and trusted, so malformed matrices are programmer errors and assert.

use retris_types::{Rgb, ShapeId, MAX_SHAPE_DIM};

use crate::rng::SimpleRng;

pub const CYAN: Rgb = Rgb::new(0, 255, 255);
pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
pub const MAGENTA: Rgb = Rgb::new(255, 0, 255);
pub const BLUE: Rgb = Rgb::new(0, 0, 255);
pub const RED: Rgb = Rgb::new(255, 0, 0);
pub const GREEN: Rgb = Rgb::new(0, 255, 0);

/// Color per catalog index. J and Z sharing red is the classic palette.
const SHAPE_COLORS: [Rgb; 7] = [CYAN, YELLOW, MAGENTA, BLUE, RED, GREEN, RED];

/// A shape matrix: a `rows x cols` boolean grid inside a fixed-size
/// bounding array. Rotation swaps the declared dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    rows: u8,
    cols: u8,
    grid: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from literal matrix rows (0 = empty, nonzero = filled).
    ///
    /// Panics on empty, oversized, or ragged input, and on matrices with a
    /// fully empty declared row or column.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Self {
        assert!(
            !rows.is_empty() && rows.len() <= MAX_SHAPE_DIM,
            "shape must have 1..={} rows",
            MAX_SHAPE_DIM
        );
        let cols = rows[0].as_ref().len();
        assert!(
            cols >= 1 && cols <= MAX_SHAPE_DIM,
            "shape must have 1..={} cols",
            MAX_SHAPE_DIM
        );

        let mut grid = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            assert_eq!(row.len(), cols, "ragged shape matrix");
            for (c, &v) in row.iter().enumerate() {
                grid[r][c] = v != 0;
            }
        }

        let shape = Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            grid,
        };
        assert!(shape.has_no_empty_lines(), "shape declares an empty row or column");
        shape
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the cell at `(row, col)` is occupied.
    pub fn filled(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.grid[row][col]
    }

    /// Iterate the occupied `(row, col)` cells in row-major order.
    pub fn cells(self) -> impl Iterator<Item = (u8, u8)> {
        (0..self.rows).flat_map(move |r| {
            (0..self.cols).filter_map(move |c| {
                self.grid[r as usize][c as usize].then_some((r, c))
            })
        })
    }

    /// Number of occupied cells.
    pub fn cell_count(&self) -> usize {
        self.cells().count()
    }

    /// 90-degree clockwise rotation via transpose-and-reverse: for an
    /// `R x C` matrix the result is `C x R` with
    /// `rotated[c][R-1-r] = original[r][c]`. Pure.
    pub fn rotated_cw(&self) -> Shape {
        let (r_max, c_max) = (self.rows as usize, self.cols as usize);
        let mut grid = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for r in 0..r_max {
            for c in 0..c_max {
                grid[c][r_max - 1 - r] = self.grid[r][c];
            }
        }
        Shape {
            rows: self.cols,
            cols: self.rows,
            grid,
        }
    }

    fn has_no_empty_lines(&self) -> bool {
        let rows_ok = (0..self.rows as usize)
            .all(|r| (0..self.cols as usize).any(|c| self.grid[r][c]));
        let cols_ok = (0..self.cols as usize)
            .all(|c| (0..self.rows as usize).any(|r| self.grid[r][c]));
        rows_ok && cols_ok
    }
}

/// Look up the spawn-orientation matrix for a shape.
pub fn shape(id: ShapeId) -> Shape {
    match id {
        ShapeId::I => Shape::from_rows(&[[1, 1, 1, 1]]),
        ShapeId::O => Shape::from_rows(&[[1, 1], [1, 1]]),
        ShapeId::T => Shape::from_rows(&[[1, 1, 1], [0, 1, 0]]),
        ShapeId::L => Shape::from_rows(&[[1, 1, 1], [1, 0, 0]]),
        ShapeId::J => Shape::from_rows(&[[1, 1, 1], [0, 0, 1]]),
        ShapeId::S => Shape::from_rows(&[[1, 1, 0], [0, 1, 1]]),
        ShapeId::Z => Shape::from_rows(&[[0, 1, 1], [1, 1, 0]]),
    }
}

/// The color bound to a shape.
pub fn color(id: ShapeId) -> Rgb {
    SHAPE_COLORS[id.index()]
}

/// Pick a shape uniformly at random.
pub fn random(rng: &mut SimpleRng) -> ShapeId {
    ShapeId::from_index(rng.next_range(ShapeId::ALL.len() as u32) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_dimensions() {
        assert_eq!((shape(ShapeId::I).rows(), shape(ShapeId::I).cols()), (1, 4));
        assert_eq!((shape(ShapeId::O).rows(), shape(ShapeId::O).cols()), (2, 2));
        for id in [ShapeId::T, ShapeId::L, ShapeId::J, ShapeId::S, ShapeId::Z] {
            assert_eq!((shape(id).rows(), shape(id).cols()), (2, 3));
        }
    }

    #[test]
    fn every_shape_has_four_cells() {
        for id in ShapeId::ALL {
            assert_eq!(shape(id).cell_count(), 4, "{:?}", id);
        }
    }

    #[test]
    fn colors_are_bound_in_catalog_order() {
        assert_eq!(color(ShapeId::I), CYAN);
        assert_eq!(color(ShapeId::O), YELLOW);
        assert_eq!(color(ShapeId::T), MAGENTA);
        assert_eq!(color(ShapeId::L), BLUE);
        assert_eq!(color(ShapeId::J), RED);
        assert_eq!(color(ShapeId::S), GREEN);
        assert_eq!(color(ShapeId::Z), RED);
    }

    #[test]
    fn rotation_transposes_and_reverses() {
        // T: [[1,1,1],[0,1,0]] rotated clockwise points left.
        let t = shape(ShapeId::T).rotated_cw();
        assert_eq!((t.rows(), t.cols()), (3, 2));
        assert!(t.filled(0, 1) && t.filled(1, 0) && t.filled(1, 1) && t.filled(2, 1));
        assert!(!t.filled(0, 0) && !t.filled(2, 0));
    }

    #[test]
    fn rotation_is_cyclic_of_order_four() {
        for id in ShapeId::ALL {
            let original = shape(id);
            let mut rotated = original;
            for _ in 0..4 {
                rotated = rotated.rotated_cw();
            }
            assert_eq!(rotated, original, "{:?}", id);
        }
    }

    #[test]
    fn random_pick_covers_all_shapes() {
        let mut rng = SimpleRng::new(99);
        let mut seen = [false; 7];
        for _ in 0..500 {
            seen[random(&mut rng).index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    #[should_panic(expected = "ragged")]
    fn ragged_matrix_is_rejected() {
        let _ = Shape::from_rows(&[vec![1u8, 1], vec![1]]);
    }

    #[test]
    #[should_panic(expected = "empty row or column")]
    fn empty_column_is_rejected() {
        let _ = Shape::from_rows(&[[1, 0], [1, 0]]);
    }
}
