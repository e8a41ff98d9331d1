pub mod generator;
pub mod grid;

pub use generator::{generate, generate_with_rng, time_seed, Backtracker, Coord, Step};
pub use grid::{CellKind, Grid, GridError};
