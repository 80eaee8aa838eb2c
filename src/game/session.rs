use crate::game::placement::{affected_cells, try_commit, Placement};
use crate::game::shape::{by_hotkey, Shape};
use crate::game::Grid;
use crate::{GRID_COLS, GRID_ROWS, START_VALUE};

/// What the last drop did, for the status panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Placed(usize),
    Rejected,
}

/// One play session: the grid plus the transient interaction state the UI
/// reads back (selection, anchor cursor, preview highlight). The placement
/// rules themselves live in `placement`; this only drives them.
pub struct Game {
    pub grid: Grid,
    pub selected: Option<&'static Shape>,
    pub cursor: (usize, usize),
    pub highlight: Vec<(usize, usize)>,
    pub last_drop: Option<DropOutcome>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            grid: Grid::new(GRID_ROWS, GRID_COLS, START_VALUE),
            selected: None,
            cursor: (0, 0),
            highlight: Vec::new(),
            last_drop: None,
        }
    }

    /// Fresh grid, everything else back to idle.
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    pub fn select(&mut self, shape: &'static Shape) {
        self.selected = Some(shape);
        self.refresh_highlight();
    }

    pub fn select_by_hotkey(&mut self, key: char) -> bool {
        match by_hotkey(key) {
            Some(shape) => {
                self.select(shape);
                true
            }
            None => false,
        }
    }

    pub fn move_cursor(&mut self, dr: i32, dc: i32) {
        let (rows, cols) = self.grid.dimensions();
        let r = (self.cursor.0 as i32 + dr).clamp(0, rows as i32 - 1);
        let c = (self.cursor.1 as i32 + dc).clamp(0, cols as i32 - 1);
        self.cursor = (r as usize, c as usize);
        self.refresh_highlight();
    }

    /// Attempt the placement under the cursor. Selection and highlight clear
    /// whether or not the drop lands; a failed drop still deselects.
    pub fn drop_at_cursor(&mut self) {
        let Some(shape) = self.selected else {
            return;
        };
        let anchor = (self.cursor.0 as i32, self.cursor.1 as i32);
        self.last_drop = Some(match try_commit(&mut self.grid, shape, anchor) {
            Placement::Applied(cells) => DropOutcome::Placed(cells.len()),
            Placement::Rejected => DropOutcome::Rejected,
        });
        self.selected = None;
        self.highlight.clear();
    }

    pub fn is_highlighted(&self, row: usize, col: usize) -> bool {
        self.highlight.contains(&(row, col))
    }

    fn refresh_highlight(&mut self) {
        self.highlight = match self.selected {
            Some(shape) => affected_cells(
                &self.grid,
                shape,
                (self.cursor.0 as i32, self.cursor.1 as i32),
            ),
            None => Vec::new(),
        };
    }
}
