use crate::config::TEXT_CELL_W;
use crate::maze::Grid;

/// Renders the grid as text, three characters per cell and one line per row.
/// The cursor cell, if any, is drawn as `[*]`.
pub fn render_text(grid: &Grid, cursor: Option<(i32, i32)>) -> String {
    let mut out = String::with_capacity(grid.height() * (grid.width() * TEXT_CELL_W + 1));
    for (y, row) in grid.rows().enumerate() {
        for (x, kind) in row.iter().enumerate() {
            if cursor == Some((x as i32, y as i32)) {
                out.push_str("[*]");
            } else {
                out.push(' ');
                out.push(kind.glyph());
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out
}
