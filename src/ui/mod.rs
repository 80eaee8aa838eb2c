use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::game::{catalogue, DropOutcome, Shape};
use crate::{Game, BOARD_H, BOARD_W, CELL_H, CELL_W, MIN_PANE_WIDTH, SIDEBAR_W, START_VALUE};

// Preview tint for cells the selected block would carve.
const HIGHLIGHT_BG: Color = Color::Rgb(0x48, 0x72, 0xF4);

pub fn draw_game(frame: &mut Frame, game: &Game) {
    let area = frame.size();

    if area.width < MIN_PANE_WIDTH {
        let msg = Paragraph::new(format!("RESIZE PANE (min width: {})", MIN_PANE_WIDTH))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("CARVE"));
        frame.render_widget(msg, area);
        return;
    }

    // Outer "cabinet" frame.
    let cabinet = Block::default()
        .title("CARVE")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    let cabinet_inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    // Split into board area (left) and sidebar (right).
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min((BOARD_W as u16 + 6).max(30)), // padding left of board
            Constraint::Length(SIDEBAR_W),
        ])
        .split(cabinet_inner);

    // Center the fixed-size board within the left column.
    let v_center = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(BOARD_H as u16),
            Constraint::Min(1),
        ])
        .split(cols[0]);
    let h_center = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(BOARD_W as u16),
            Constraint::Min(1),
        ])
        .split(v_center[1]);
    let board_rect = h_center[1];

    draw_board(frame, game, board_rect);
    draw_sidebar(frame, game, cols[1]);
}

fn draw_board(frame: &mut Frame, game: &Game, board_rect: Rect) {
    let border = Block::default().borders(Borders::ALL);
    let inner = border.inner(board_rect);
    frame.render_widget(border, board_rect);

    let (rows, cols) = game.grid.dimensions();
    let mut lines: Vec<Line> = Vec::with_capacity(rows * CELL_H);
    for r in 0..rows {
        for sub in 0..CELL_H {
            let mut spans = Vec::with_capacity(cols);
            for c in 0..cols {
                let value = game.grid.get(r, c).unwrap_or(0);
                let mut style = Style::default().fg(Color::White).bg(if game.is_highlighted(r, c) {
                    HIGHLIGHT_BG
                } else {
                    value_color(value)
                });
                if game.cursor == (r, c) {
                    style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                }
                // Value sits on the middle row of the cell.
                let text = if sub == CELL_H / 2 {
                    format!("{:^width$}", value, width = CELL_W)
                } else {
                    " ".repeat(CELL_W)
                };
                spans.push(Span::styled(text, style));
            }
            lines.push(Line::from(spans));
        }
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), inner);
}

fn draw_sidebar(frame: &mut Frame, game: &Game, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(5), Constraint::Length(7)].as_ref())
        .split(area);

    let selected = match game.selected.and_then(|s| s.hotkey) {
        Some(key) => key.to_string(),
        None => "-".to_string(),
    };
    let last = match game.last_drop {
        Some(DropOutcome::Placed(n)) => format!("PLACED ({n})"),
        Some(DropOutcome::Rejected) => "REJECTED".to_string(),
        None => String::new(),
    };
    let info = Paragraph::new(format!("BLOCK\n{selected}\n\nLAST DROP\n{last}"))
        .block(Block::default().title("INFO").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(info, chunks[0]);

    draw_palette(frame, game, chunks[1]);

    let controls = Paragraph::new(
        "q/w/e/r/a/s/d block\n←↑↓→ aim\nenter/space drop\nn new board\nesc quit",
    )
    .block(Block::default().title("CONTROLS").borders(Borders::ALL))
    .wrap(Wrap { trim: true });
    frame.render_widget(controls, chunks[2]);
}

fn draw_palette(frame: &mut Frame, game: &Game, area: Rect) {
    let block = Block::default().title("BLOCKS").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for shape in catalogue() {
        let chosen = game.selected.is_some_and(|s| std::ptr::eq(s, shape));
        for (i, row) in shape.mask.iter().enumerate() {
            let mut spans = Vec::new();
            if i == 0 {
                let marker = if chosen { '▶' } else { ' ' };
                spans.push(Span::raw(format!(
                    "{marker} {} ",
                    shape.hotkey.unwrap_or(' ')
                )));
            } else {
                spans.push(Span::raw("    "));
            }
            for &v in row.iter() {
                if v == 1 {
                    spans.push(Span::styled("██", Style::default().fg(shape_color(shape))));
                } else {
                    spans.push(Span::raw("  "));
                }
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::raw(""));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), inner);
}

fn shape_color(shape: &Shape) -> Color {
    let (r, g, b) = shape.color;
    Color::Rgb(r, g, b)
}

// Red ramps up as a cell wears down; green/blue stay pinned at 100.
fn value_color(value: u8) -> Color {
    let red = (f32::from(START_VALUE.saturating_sub(value)) * 25.5).round() as u8;
    Color::Rgb(red, 100, 100)
}
