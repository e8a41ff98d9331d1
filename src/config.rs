use std::path::PathBuf;

use clap::Parser;

// Shared maze UI/constants.
pub const DEFAULT_WIDTH: usize = 31;
pub const DEFAULT_HEIGHT: usize = 31;
pub const CELL_W: usize = 2; // each maze cell is two terminal columns so rooms look square
pub const TEXT_CELL_W: usize = 3; // plain-text dump uses " # " per cell
pub const INFO_H: u16 = 5;
pub const CONTROLS_H: u16 = 4;
pub const PANEL_W: u16 = 32; // info/controls boxes never get narrower than this
// Cabinet border plus a little breathing room around the maze.
pub const FRAME_PAD: u16 = 2;
pub const POLL_MS: u64 = 50;

/// Terminal maze: walk from S to E.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Maze width in cells (odd, at least 3)
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Maze height in cells (odd, at least 3)
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Random seed; the clock is used when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the maze as text and exit instead of starting the game
    #[arg(long)]
    pub print: bool,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Smallest terminal that fits a `width` x `height` maze plus panels.
pub fn min_pane_size(width: usize, height: usize) -> (u16, u16) {
    let to_u16 = |n: usize| u16::try_from(n).unwrap_or(u16::MAX);
    let w = to_u16(width.saturating_mul(CELL_W))
        .max(PANEL_W)
        .saturating_add(FRAME_PAD * 2);
    let h = to_u16(height).saturating_add(INFO_H + CONTROLS_H + FRAME_PAD);
    (w, h)
}
