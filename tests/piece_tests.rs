//! Piece and catalog tests - shape data, spawning, and rotation.

use retris::core::{catalog, Tetromino};
use retris::types::{ShapeId, BOARD_WIDTH};

#[test]
fn catalog_has_seven_four_cell_shapes() {
    assert_eq!(ShapeId::ALL.len(), 7);
    for id in ShapeId::ALL {
        assert_eq!(catalog::shape(id).cell_count(), 4, "{:?}", id);
    }
}

#[test]
fn no_shape_declares_an_empty_row_or_column() {
    for id in ShapeId::ALL {
        let shape = catalog::shape(id);
        for r in 0..shape.rows() {
            assert!(
                shape.cells().any(|(sr, _)| sr == r),
                "{:?} row {} is empty",
                id,
                r
            );
        }
        for c in 0..shape.cols() {
            assert!(
                shape.cells().any(|(_, sc)| sc == c),
                "{:?} col {} is empty",
                id,
                c
            );
        }
    }
}

#[test]
fn every_shape_is_bound_to_a_color() {
    for id in ShapeId::ALL {
        let color = catalog::color(id);
        assert_ne!(color, retris::types::Rgb::default(), "{:?}", id);
    }
    // Distinct shapes may share a color (J and Z are both red).
    assert_eq!(catalog::color(ShapeId::J), catalog::color(ShapeId::Z));
}

#[test]
fn spawn_positions_are_centered() {
    // floor(10/2) - floor(cols/2)
    assert_eq!(Tetromino::spawn(ShapeId::I, BOARD_WIDTH).x, 3);
    assert_eq!(Tetromino::spawn(ShapeId::O, BOARD_WIDTH).x, 4);
    assert_eq!(Tetromino::spawn(ShapeId::T, BOARD_WIDTH).x, 4);
    assert_eq!(Tetromino::spawn(ShapeId::S, BOARD_WIDTH).x, 4);
    assert_eq!(Tetromino::spawn(ShapeId::Z, BOARD_WIDTH).x, 4);
}

#[test]
fn rotation_swaps_the_bounding_box() {
    let flat = catalog::shape(ShapeId::I);
    assert_eq!((flat.rows(), flat.cols()), (1, 4));

    let upright = flat.rotated_cw();
    assert_eq!((upright.rows(), upright.cols()), (4, 1));
    assert_eq!(upright.cell_count(), 4);
}

#[test]
fn four_rotations_return_the_original_matrix() {
    for id in ShapeId::ALL {
        let original = catalog::shape(id);
        let mut shape = original;
        for _ in 0..4 {
            shape = shape.rotated_cw();
        }
        assert_eq!(shape, original, "{:?}", id);
    }
}

#[test]
fn rotation_preserves_cell_count() {
    for id in ShapeId::ALL {
        let shape = catalog::shape(id);
        assert_eq!(shape.rotated_cw().cell_count(), shape.cell_count());
    }
}

#[test]
fn rotating_a_piece_twice_flips_the_matrix() {
    // L: [[1,1,1],[1,0,0]] flipped 180 degrees is [[0,0,1],[1,1,1]].
    let piece = Tetromino::spawn(ShapeId::L, BOARD_WIDTH);
    let flipped = piece.rotated().rotated_cw();
    assert!(flipped.filled(0, 2));
    assert!(!flipped.filled(0, 0));
    assert!(flipped.filled(1, 0) && flipped.filled(1, 1) && flipped.filled(1, 2));
}
