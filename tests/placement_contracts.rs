// tests/placement_contracts.rs

/**
 * Placement contract tests.
 *
 * Purpose:
 * - Lock the observable carve rules: strict all-or-nothing commits, the
 *   floored decrement, and the lenient hover preview.
 *
 * What is tested:
 * - A full-footprint commit lowers exactly the covered cells by one.
 * - Overhanging or zero-covering placements are rejected wholesale and
 *   leave the grid deep-equal to its prior state.
 * - The preview keeps whatever portion of the shape lands on the board,
 *   including for placements the commit would reject.
 * - Direct grid access outside the board always errors.
 * - Catalogue integrity: seven shapes, exact masks, unique hotkeys,
 *   case-insensitive lookup.
 */
use carve::{
    affected_cells, by_hotkey, catalogue, try_commit, Grid, GridError, Placement, Shape,
};

fn fresh_grid() -> Grid {
    Grid::new(4, 4, 10)
}

fn shape(key: char) -> &'static Shape {
    by_hotkey(key).expect("catalogue hotkey")
}

/// Drive a cell down to `target` through the one legal mutation path.
fn wear_down(grid: &mut Grid, row: usize, col: usize, target: u8) {
    while grid.get(row, col).expect("in bounds") > target {
        grid.decrement_cell(row, col).expect("in bounds");
    }
}

fn values(grid: &Grid) -> Vec<Vec<u8>> {
    let (rows, cols) = grid.dimensions();
    (0..rows)
        .map(|r| (0..cols).map(|c| grid.get(r, c).expect("in bounds")).collect())
        .collect()
}

#[test]
fn line_at_origin_carves_the_top_row() {
    let mut grid = fresh_grid();
    let line = shape('Q');

    let result = try_commit(&mut grid, line, (0, 0));

    assert_eq!(
        result,
        Placement::Applied(vec![(0, 0), (0, 1), (0, 2), (0, 3)])
    );
    assert_eq!(
        values(&grid),
        vec![
            vec![9, 9, 9, 9],
            vec![10, 10, 10, 10],
            vec![10, 10, 10, 10],
            vec![10, 10, 10, 10],
        ]
    );
}

#[test]
fn overhanging_square_is_rejected_wholesale() {
    let mut grid = fresh_grid();
    let square = shape('W');
    let before = grid.clone();

    // Only one of the four cells fits at the bottom-right corner.
    assert_eq!(try_commit(&mut grid, square, (3, 3)), Placement::Rejected);
    assert_eq!(grid, before);

    // The preview still shows the in-bounds portion.
    assert_eq!(affected_cells(&grid, square, (3, 3)), vec![(3, 3)]);
}

#[test]
fn zero_cell_blocks_the_whole_footprint() {
    let mut grid = fresh_grid();
    wear_down(&mut grid, 0, 0, 0);
    let square = shape('W');
    let before = grid.clone();

    assert_eq!(try_commit(&mut grid, square, (0, 0)), Placement::Rejected);
    assert_eq!(grid, before);
}

#[test]
fn carving_to_zero_then_repeating_is_rejected() {
    let mut grid = fresh_grid();
    wear_down(&mut grid, 0, 0, 1);
    let line = shape('Q');

    let result = try_commit(&mut grid, line, (0, 0));
    assert!(matches!(result, Placement::Applied(_)));
    assert_eq!(grid.get(0, 0), Ok(0));
    assert_eq!(grid.get(0, 1), Ok(9));

    // The carved-out cell now blocks the identical placement.
    let before = grid.clone();
    assert_eq!(try_commit(&mut grid, line, (0, 0)), Placement::Rejected);
    assert_eq!(grid, before);
}

#[test]
fn preview_drops_cells_past_the_edge() {
    let grid = fresh_grid();
    let line = shape('Q');

    assert_eq!(affected_cells(&grid, line, (0, 2)), vec![(0, 2), (0, 3)]);
    assert_eq!(affected_cells(&grid, line, (0, -2)), vec![(0, 0), (0, 1)]);
    assert_eq!(affected_cells(&grid, line, (5, 0)), Vec::new());
}

#[test]
fn negative_anchor_is_previewed_but_never_committed() {
    let mut grid = fresh_grid();
    let square = shape('W');
    let before = grid.clone();

    assert_eq!(affected_cells(&grid, square, (-1, 0)), vec![(0, 0), (0, 1)]);
    assert_eq!(try_commit(&mut grid, square, (-1, 0)), Placement::Rejected);
    assert_eq!(grid, before);
}

#[test]
fn out_of_bounds_access_errors() {
    let mut grid = fresh_grid();

    assert!(matches!(
        grid.get(4, 0),
        Err(GridError::OutOfBounds { row: 4, col: 0, .. })
    ));
    assert!(matches!(
        grid.get(0, 4),
        Err(GridError::OutOfBounds { .. })
    ));
    assert!(matches!(
        grid.decrement_cell(4, 4),
        Err(GridError::OutOfBounds { .. })
    ));
    assert_eq!(grid.dimensions(), (4, 4));
}

#[test]
fn decrement_floors_at_zero() {
    let mut grid = Grid::new(2, 2, 1);
    assert_eq!(grid.decrement_cell(0, 0), Ok(0));
    assert_eq!(grid.decrement_cell(0, 0), Ok(0));
    assert_eq!(grid.get(0, 0), Ok(0));
}

#[test]
fn catalogue_masks_match_the_classic_seven() {
    let expected: [&[&[u8]]; 7] = [
        &[&[1, 1, 1, 1]],
        &[&[1, 1], &[1, 1]],
        &[&[1, 1, 0], &[0, 1, 1]],
        &[&[0, 1, 1], &[1, 1, 0]],
        &[&[1, 1, 1], &[0, 1, 0]],
        &[&[1, 1], &[0, 1], &[0, 1]],
        &[&[0, 1], &[1, 1], &[1, 0]],
    ];
    let shapes = catalogue();
    assert_eq!(shapes.len(), expected.len());
    for (shape, mask) in shapes.iter().zip(expected) {
        assert_eq!(shape.mask, mask);
    }
}

#[test]
fn catalogue_shapes_are_well_formed() {
    let mut hotkeys = Vec::new();
    for shape in catalogue() {
        assert!(!shape.cells().is_empty());
        for row in shape.mask.iter() {
            assert_eq!(row.len(), shape.cols());
        }
        if let Some(key) = shape.hotkey {
            let folded = key.to_ascii_uppercase();
            assert!(!hotkeys.contains(&folded));
            hotkeys.push(folded);
        }
    }
}

#[test]
fn hotkey_lookup_ignores_case() {
    for key in ['Q', 'W', 'E', 'R', 'A', 'S', 'D'] {
        let upper = by_hotkey(key).expect("known hotkey");
        let lower = by_hotkey(key.to_ascii_lowercase()).expect("known hotkey");
        assert!(std::ptr::eq(upper, lower));
    }
    assert!(by_hotkey('x').is_none());
    assert!(by_hotkey('1').is_none());
}
