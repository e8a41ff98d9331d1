pub mod app;
pub mod config;
pub mod game;
pub mod maze;
pub mod ui;

pub use config::Config;
pub use game::{Game, Status};
pub use maze::{generate, CellKind, Grid, GridError};
