use ratatui::prelude::*;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::config::{min_pane_size, CELL_W, CONTROLS_H, INFO_H, PANEL_W};
use crate::game::{Game, Status};
use crate::maze::CellKind;

pub fn draw_game(frame: &mut Frame, game: &Game) {
    let area = frame.size();
    let grid = game.grid();

    let (min_w, min_h) = min_pane_size(grid.width(), grid.height());
    if area.width < min_w || area.height < min_h {
        let msg = Paragraph::new(format!("RESIZE PANE (min: {}x{})", min_w, min_h))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("MAZE"));
        frame.render_widget(msg, area);
        return;
    }

    // Outer "cabinet" frame.
    let cabinet = Block::default()
        .title(format!("MAZE {}x{}", grid.width(), grid.height()))
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    let cabinet_inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    let maze_w = (grid.width() * CELL_W) as u16;
    let maze_h = grid.height() as u16;

    let col_rect = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(maze_w),
            Constraint::Min(0),
        ])
        .split(cabinet_inner)[1];

    let stack = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(INFO_H),
            Constraint::Length(maze_h),
            Constraint::Length(CONTROLS_H),
            Constraint::Min(0),
        ])
        .split(col_rect);

    let mut info_rect = stack[1];
    let maze_rect = stack[2];
    let mut controls_rect = stack[3];
    // Panels are at least PANEL_W wide, centred on the cabinet.
    let panel_w = maze_w.max(PANEL_W).min(cabinet_inner.width);
    let panel_x = cabinet_inner.x + (cabinet_inner.width - panel_w) / 2;
    info_rect.x = panel_x;
    info_rect.width = panel_w;
    controls_rect.x = panel_x;
    controls_rect.width = panel_w;

    draw_info(frame, game, info_rect);
    draw_maze(frame, game, maze_rect);
    draw_controls(frame, controls_rect);

    if game.won {
        draw_win_overlay(frame, maze_rect);
    }
}

fn cell_pair(kind: CellKind) -> (char, char) {
    match kind {
        CellKind::Wall => ('█', '█'),
        CellKind::Passage => (' ', ' '),
        CellKind::Start => ('S', ' '),
        CellKind::End => ('E', ' '),
    }
}

fn draw_maze(frame: &mut Frame, game: &Game, maze_rect: Rect) {
    let grid = game.grid();
    let mut canvas = vec![vec![' '; grid.width() * CELL_W]; grid.height()];

    for (y, row) in grid.rows().enumerate() {
        for (x, kind) in row.iter().enumerate() {
            let (left, right) = cell_pair(*kind);
            canvas[y][x * CELL_W] = left;
            canvas[y][x * CELL_W + 1] = right;
        }
    }

    // The cursor always sits on a passable cell inside the grid.
    let (cx, cy) = (game.cursor.0 as usize, game.cursor.1 as usize);
    if cy < canvas.len() && cx * CELL_W + 1 < canvas[cy].len() {
        canvas[cy][cx * CELL_W] = '[';
        canvas[cy][cx * CELL_W + 1] = ']';
    }

    let lines: Vec<Line> = canvas
        .iter()
        .map(|row| Line::raw(row.iter().collect::<String>()))
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(paragraph, maze_rect);
}

fn draw_win_overlay(frame: &mut Frame, maze_rect: Rect) {
    let overlay_w = 26u16;
    let overlay_h = 4u16;
    let popup = Rect {
        x: (maze_rect.x + maze_rect.width / 2).saturating_sub(overlay_w / 2),
        y: (maze_rect.y + maze_rect.height / 2).saturating_sub(overlay_h / 2),
        width: overlay_w,
        height: overlay_h,
    }
    .intersection(frame.size());
    let overlay = Paragraph::new("YOU REACHED THE END!\nPress q")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(Clear, popup);
    frame.render_widget(overlay, popup);
}

fn draw_info(frame: &mut Frame, game: &Game, area: Rect) {
    let status = match game.status() {
        Status::Exploring => "EXPLORING",
        Status::Solved => "SOLVED",
    };

    let block = Block::default().title("INFO").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let header = Paragraph::new(vec![
        Line::raw(format!("{:<7} {}", "SEED:", game.seed)),
        Line::raw(format!("{:<7} {}", "STATUS:", status)),
    ]);
    frame.render_widget(header, rows[0]);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let left = Paragraph::new(Line::raw(format!("{:<7} {}", "MOVES:", game.moves)))
        .alignment(Alignment::Left);
    frame.render_widget(left, cols[0]);

    let right = Paragraph::new(Line::raw(format!(
        "{:<5} {},{}",
        "POS:", game.cursor.0, game.cursor.1
    )))
    .alignment(Alignment::Left);
    frame.render_widget(right, cols[1]);
}

fn draw_controls(frame: &mut Frame, area: Rect) {
    let block = Block::default().title("CONTROLS").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let left = Paragraph::new(vec![Line::raw("←↑↓→ move"), Line::raw("wasd move")])
        .alignment(Alignment::Left);
    frame.render_widget(left, cols[0]);

    let right = Paragraph::new(vec![Line::raw("q/esc quit"), Line::raw("")])
        .alignment(Alignment::Left);
    frame.render_widget(right, cols[1]);
}
