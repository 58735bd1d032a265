//! Tetromino - a positioned, rotatable instance of a catalog shape.

use retris_types::{Rgb, ShapeId};

use crate::catalog::{self, Shape};

/// Active falling piece.
///
/// The origin `(x, y)` is the top-left of the shape's bounding box in
/// grid coordinates; `x` may be transiently negative while centering on
/// narrow boards, never at rest. The color is bound from the catalog at
/// construction and survives rotation unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tetromino {
    pub x: i16,
    pub y: i16,
    pub shape: Shape,
    pub color: Rgb,
}

impl Tetromino {
    /// Create a piece centered horizontally on a board of the given width,
    /// with its top row at the top of the field.
    pub fn spawn(id: ShapeId, board_width: u8) -> Self {
        let shape = catalog::shape(id);
        let x = (board_width / 2) as i16 - (shape.cols() / 2) as i16;
        Self {
            x,
            y: 0,
            shape,
            color: catalog::color(id),
        }
    }

    /// Clockwise rotation candidate.
    ///
    /// Pure: the piece itself is unchanged. The engine validates the
    /// candidate against the board and either commits it or keeps the
    /// prior orientation; there is no wall-kick correction.
    pub fn rotated(&self) -> Shape {
        self.shape.rotated_cw()
    }
}
