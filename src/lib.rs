pub mod app;
pub mod config;
pub mod game;
pub mod ui;

pub use config::{
    BOARD_H, BOARD_W, CELL_H, CELL_W, GRID_COLS, GRID_ROWS, MIN_PANE_WIDTH, SIDEBAR_W, START_VALUE,
};
pub use game::{
    affected_cells, by_hotkey, catalogue, try_commit, DropOutcome, Game, Grid, GridError,
    Placement, Shape, CATALOGUE,
};
