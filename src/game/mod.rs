pub mod state;

pub use state::{Game, Status};
