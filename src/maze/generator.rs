//! Randomized backtracking maze carver.
//!
//! The classic recursive formulation is unrolled onto an explicit frontier
//! stack: peek the top cell, carve into a random unvisited neighbour two steps
//! away, or pop when there is none. Every odd interior cell is visited exactly
//! once, which makes the passage graph a spanning tree.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::grid::{CellKind, Grid, GridError};

pub type Coord = (usize, usize);

// Two cells per step: one wall, one room.
const STEPS: [(isize, isize); 4] = [(0, 2), (0, -2), (2, 0), (-2, 0)];

/// Outcome of a single [`Backtracker::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Carved { from: Coord, to: Coord },
    Backtracked(Coord),
    Done,
}

/// Generates a maze. `None` seeds from the clock, so the result is not
/// reproducible; pass a seed for deterministic output.
pub fn generate(width: usize, height: usize, seed: Option<u64>) -> Result<Grid, GridError> {
    let seed = seed.unwrap_or_else(time_seed);
    let mut rng = StdRng::seed_from_u64(seed);
    debug!(width, height, seed, "generating maze");
    generate_with_rng(width, height, &mut rng)
}

pub fn generate_with_rng<R: Rng>(
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<Grid, GridError> {
    Ok(Backtracker::new(width, height, rng)?.finish())
}

/// Seed derived from the wall clock.
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// In-progress generation. The grid stays private until [`finish`](Self::finish)
/// hands it out fully carved and tagged.
pub struct Backtracker<'r, R> {
    grid: Grid,
    frontier: Vec<Coord>,
    rng: &'r mut R,
    visited: usize,
}

impl<'r, R: Rng> Backtracker<'r, R> {
    pub fn new(width: usize, height: usize, rng: &'r mut R) -> Result<Self, GridError> {
        let mut grid = Grid::new(width, height)?;
        let start = grid.start();
        grid.set(start.0, start.1, CellKind::Passage);
        Ok(Self {
            grid,
            frontier: vec![start],
            rng,
            visited: 1,
        })
    }

    /// Current backtracking path, bottom first.
    pub fn frontier(&self) -> &[Coord] {
        &self.frontier
    }

    /// Rooms opened so far, including the start.
    pub fn visited(&self) -> usize {
        self.visited
    }

    pub fn is_done(&self) -> bool {
        self.frontier.is_empty()
    }

    pub fn step(&mut self) -> Step {
        let Some(&current) = self.frontier.last() else {
            return Step::Done;
        };

        let (candidates, count) = self.unvisited_neighbors(current);
        match candidates[..count].choose(&mut *self.rng) {
            Some(&next) => {
                let wall = ((current.0 + next.0) / 2, (current.1 + next.1) / 2);
                self.grid.set(wall.0, wall.1, CellKind::Passage);
                self.grid.set(next.0, next.1, CellKind::Passage);
                self.frontier.push(next);
                self.visited += 1;
                Step::Carved {
                    from: current,
                    to: next,
                }
            }
            None => {
                self.frontier.pop();
                Step::Backtracked(current)
            }
        }
    }

    /// Runs to completion and tags the start and end cells. When they
    /// coincide (3x3) the cell ends up as `End`.
    pub fn finish(mut self) -> Grid {
        while self.step() != Step::Done {}

        let (sx, sy) = self.grid.start();
        let (ex, ey) = self.grid.end();
        self.grid.set(sx, sy, CellKind::Start);
        self.grid.set(ex, ey, CellKind::End);
        debug!(rooms = self.visited, "maze carved");
        self.grid
    }

    fn unvisited_neighbors(&self, (x, y): Coord) -> ([Coord; 4], usize) {
        let mut found = [(0, 0); 4];
        let mut count = 0;
        for (dx, dy) in STEPS {
            let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy))
            else {
                continue;
            };
            if self.grid.in_interior(nx, ny) && self.grid.get(nx, ny) == CellKind::Wall {
                found[count] = (nx, ny);
                count += 1;
            }
        }
        (found, count)
    }
}
