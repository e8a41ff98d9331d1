use tracing::{info, warn};

use crate::maze::{CellKind, Grid};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Exploring,
    Solved,
}

/// Player state on top of a finished maze. The grid is only ever read.
pub struct Game {
    grid: Grid,
    pub seed: u64,
    pub cursor: (i32, i32),
    pub moves: u64,
    pub won: bool,
}

impl Game {
    pub fn new(grid: Grid, seed: u64) -> Self {
        let (sx, sy) = grid.start();
        // Grid::new guarantees the sides fit in i32.
        let cursor = (sx as i32, sy as i32);
        let won = grid.cell_kind(cursor.0, cursor.1) == Ok(CellKind::End);
        Self {
            grid,
            seed,
            cursor,
            moves: 0,
            won,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> Status {
        if self.won {
            Status::Solved
        } else {
            Status::Exploring
        }
    }

    /// Steps the cursor by one cell. Returns false when the move is refused.
    pub fn move_cursor(&mut self, dx: i32, dy: i32) -> bool {
        if self.won {
            return false;
        }
        let (nx, ny) = (self.cursor.0 + dx, self.cursor.1 + dy);
        match self.grid.cell_kind(nx, ny) {
            Ok(kind) if kind.is_passable() => {
                self.cursor = (nx, ny);
                self.moves += 1;
                if kind == CellKind::End {
                    self.won = true;
                    info!(moves = self.moves, seed = self.seed, "maze solved");
                }
                true
            }
            Ok(_) => false,
            Err(err) => {
                // The wall ring should make this unreachable.
                warn!(%err, "move left the grid");
                false
            }
        }
    }
}
