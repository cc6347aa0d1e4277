//! Playfield tests - TDD for Playfield module

use brickfall::core::{Piece, Playfield};
use brickfall::types::{Cell, PieceKind, COLS, ROWS};

fn fill_row(pf: &mut Playfield, row: i8, kind: PieceKind) {
    for col in 0..COLS as i8 {
        pf.set(row, col, Cell::Filled(kind));
    }
}

#[test]
fn test_new_playfield_is_empty() {
    let pf = Playfield::new();
    for row in 0..ROWS as i8 {
        for col in 0..COLS as i8 {
            assert_eq!(pf.get(row, col), Some(Cell::Empty), "({}, {})", row, col);
        }
    }
}

#[test]
fn test_get_out_of_bounds() {
    let pf = Playfield::new();
    assert_eq!(pf.get(-1, 0), None);
    assert_eq!(pf.get(0, -1), None);
    assert_eq!(pf.get(ROWS as i8, 0), None);
    assert_eq!(pf.get(0, COLS as i8), None);
}

#[test]
fn test_set_out_of_bounds_is_rejected() {
    let mut pf = Playfield::new();
    assert!(!pf.set(-1, 0, Cell::Filled(PieceKind::T)));
    assert!(!pf.set(ROWS as i8, 0, Cell::Filled(PieceKind::T)));
    assert!(pf.set(5, 5, Cell::Filled(PieceKind::T)));
    assert_eq!(pf.get(5, 5), Some(Cell::Filled(PieceKind::T)));
}

#[test]
fn test_spawn_buffer_rows_do_not_collide() {
    let pf = Playfield::new();
    // Fresh tetromino spawns partially above the visible field.
    let piece = Piece::spawn(PieceKind::T);
    assert!(piece.row < 0);
    assert!(!pf.has_collision(&piece));
}

#[test]
fn test_wall_collisions_apply_in_the_spawn_buffer() {
    let pf = Playfield::new();
    let piece = Piece::spawn(PieceKind::I);

    // Push far past the left wall: the columns are out of range even though
    // the rows are still negative.
    let hugging = piece.moved(0, -6);
    assert!(pf.has_collision(&hugging));
}

#[test]
fn test_floor_collision() {
    let pf = Playfield::new();
    let mut piece = Piece::spawn(PieceKind::O);
    // Walk down until the floor stops it.
    while !pf.has_collision(&piece.moved(1, 0)) {
        piece = piece.moved(1, 0);
    }
    assert!(piece.cells().all(|(row, _)| row < ROWS as i8));
    assert!(piece.cells().any(|(row, _)| row == ROWS as i8 - 1));
}

#[test]
fn test_settled_cells_collide() {
    let mut pf = Playfield::new();
    pf.set(10, 4, Cell::Filled(PieceKind::Z));

    let mut piece = Piece::spawn(PieceKind::Brick);
    piece.row = 10;
    piece.col = 4;
    assert!(pf.has_collision(&piece));

    piece.col = 5;
    assert!(!pf.has_collision(&piece));
}

#[test]
fn test_burning_cells_collide_as_solid() {
    let mut pf = Playfield::new();
    fill_row(&mut pf, 19, PieceKind::T);
    assert_eq!(pf.clear_lines().as_slice(), &[19]);

    let mut piece = Piece::spawn(PieceKind::Brick);
    piece.row = 19;
    piece.col = 3;
    assert!(pf.has_collision(&piece));
}

#[test]
fn test_merge_drops_negative_rows() {
    let mut pf = Playfield::new();
    let piece = Piece::spawn(PieceKind::T);
    assert_eq!(piece.row, -2);
    pf.merge_piece(&piece);
    // Only the part inside the visible field is stored.
    let stored = pf.cells().iter().filter(|c| c.is_solid()).count();
    assert!(stored < 4);
}

#[test]
fn test_floored_o_piece_merges_as_a_2x2_block() {
    let mut pf = Playfield::new();
    let mut piece = Piece::spawn(PieceKind::O);
    while !pf.has_collision(&piece.moved(1, 0)) {
        piece = piece.moved(1, 0);
    }
    pf.merge_piece(&piece);

    for (row, col) in [(18, 4), (18, 5), (19, 4), (19, 5)] {
        assert_eq!(pf.get(row, col), Some(Cell::Filled(PieceKind::O)));
    }
    let solid = pf.cells().iter().filter(|c| c.is_solid()).count();
    assert_eq!(solid, 4);
}

#[test]
fn test_clear_lines_marks_burning_and_reports_indices() {
    let mut pf = Playfield::new();
    fill_row(&mut pf, 19, PieceKind::T);
    fill_row(&mut pf, 16, PieceKind::J);
    pf.set(18, 2, Cell::Filled(PieceKind::L));

    let burned = pf.clear_lines();
    assert_eq!(burned.as_slice(), &[16, 19]);
    for col in 0..COLS as i8 {
        assert_eq!(pf.get(16, col), Some(Cell::Burning));
        assert_eq!(pf.get(19, col), Some(Cell::Burning));
    }
    // Partial row untouched.
    assert_eq!(pf.get(18, 2), Some(Cell::Filled(PieceKind::L)));
}

#[test]
fn test_brick_blocks_row_from_clearing() {
    let mut pf = Playfield::new();
    fill_row(&mut pf, 19, PieceKind::S);
    pf.set(19, 7, Cell::Filled(PieceKind::Brick));
    fill_row(&mut pf, 18, PieceKind::S);

    let burned = pf.clear_lines();
    assert_eq!(burned.as_slice(), &[18]);
    // The brick row stays settled.
    assert_eq!(pf.get(19, 7), Some(Cell::Filled(PieceKind::Brick)));
    assert_eq!(pf.get(19, 0), Some(Cell::Filled(PieceKind::S)));
}

#[test]
fn test_remove_rows_compacts_downward() {
    let mut pf = Playfield::new();
    fill_row(&mut pf, 19, PieceKind::T);
    fill_row(&mut pf, 18, PieceKind::T);
    pf.set(15, 0, Cell::Filled(PieceKind::Brick));
    pf.set(17, 9, Cell::Filled(PieceKind::I));

    let burned = pf.clear_lines();
    pf.remove_rows(&burned);

    // Survivors shift down by the number of removed rows below them.
    assert_eq!(pf.get(17, 0), Some(Cell::Filled(PieceKind::Brick)));
    assert_eq!(pf.get(19, 9), Some(Cell::Filled(PieceKind::I)));
    assert_eq!(pf.get(15, 0), Some(Cell::Empty));
    assert_eq!(pf.get(18, 9), Some(Cell::Empty));
}

#[test]
fn test_brick_count() {
    let mut pf = Playfield::new();
    assert_eq!(pf.brick_count(), 0);
    pf.set(19, 0, Cell::Filled(PieceKind::Brick));
    pf.set(12, 5, Cell::Filled(PieceKind::Brick));
    pf.set(19, 1, Cell::Filled(PieceKind::L));
    assert_eq!(pf.brick_count(), 2);
}
