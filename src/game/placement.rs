use crate::game::grid::Grid;
use crate::game::shape::Shape;

/// Outcome of an all-or-nothing placement attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// Every covered cell was carved down by one; lists the cells touched.
    Applied(Vec<(usize, usize)>),
    /// Some covered cell was out of bounds or already at 0. Grid untouched.
    Rejected,
}

/// Cells a placement at `anchor` would touch, for the hover preview.
/// Lenient: out-of-bounds mask cells are dropped, so the preview shows
/// whatever portion of the shape lands on the board even when the commit
/// would be rejected.
pub fn affected_cells(grid: &Grid, shape: &Shape, anchor: (i32, i32)) -> Vec<(usize, usize)> {
    let (rows, cols) = grid.dimensions();
    let mut cells = Vec::new();
    for (mr, mc) in shape.cells() {
        let r = anchor.0 + mr as i32;
        let c = anchor.1 + mc as i32;
        if r >= 0 && c >= 0 && (r as usize) < rows && (c as usize) < cols {
            cells.push((r as usize, c as usize));
        }
    }
    cells
}

/// Strict commit: the whole footprint must be in bounds and positive, else
/// nothing is written. Validation runs against the pre-mutation grid; only a
/// fully valid footprint is applied.
pub fn try_commit(grid: &mut Grid, shape: &Shape, anchor: (i32, i32)) -> Placement {
    let (rows, cols) = grid.dimensions();
    let mut targets = Vec::new();
    for (mr, mc) in shape.cells() {
        let r = anchor.0 + mr as i32;
        let c = anchor.1 + mc as i32;
        if r < 0 || c < 0 || r as usize >= rows || c as usize >= cols {
            return Placement::Rejected;
        }
        let (ru, cu) = (r as usize, c as usize);
        match grid.get(ru, cu) {
            Ok(v) if v > 0 => targets.push((ru, cu)),
            _ => return Placement::Rejected,
        }
    }
    for &(r, c) in &targets {
        // Targets were bounds-checked above.
        let _ = grid.decrement_cell(r, c);
    }
    Placement::Applied(targets)
}
