// Shared board/UI constants.
pub const GRID_ROWS: usize = 4;
pub const GRID_COLS: usize = 4;
pub const START_VALUE: u8 = 10;
pub const CELL_W: usize = 6; // render each grid cell this many characters wide
pub const CELL_H: usize = 3; // and this many rows tall
pub const BOARD_W: usize = GRID_COLS * CELL_W + 2; // inner cells plus border
pub const BOARD_H: usize = GRID_ROWS * CELL_H + 2;
pub const SIDEBAR_W: u16 = 26;
// Minimal pane width to fit the board, sidebar and cabinet border.
pub const MIN_PANE_WIDTH: u16 = (BOARD_W as u16) + SIDEBAR_W + 4;
