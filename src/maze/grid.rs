use std::slice::ChunksExact;

use thiserror::Error;

/// Tag stored in every grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    Wall,
    Passage,
    Start,
    End,
}

impl CellKind {
    pub fn is_passable(self) -> bool {
        !matches!(self, CellKind::Wall)
    }

    /// Single-character glyph used by the plain-text renderer.
    pub fn glyph(self) -> char {
        match self {
            CellKind::Wall => '#',
            CellKind::Passage => ' ',
            CellKind::Start => 'S',
            CellKind::End => 'E',
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid maze dimensions {width}x{height}: {reason}")]
    InvalidDimension {
        width: usize,
        height: usize,
        reason: &'static str,
    },
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
}

/// Row-major cell matrix. Walls sit on even coordinates and rooms on odd ones,
/// so both dimensions must be odd.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellKind>,
}

impl Grid {
    pub const MIN_SIDE: usize = 3;

    /// Builds an all-wall grid after validating the dimensions.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let invalid = |reason| GridError::InvalidDimension {
            width,
            height,
            reason,
        };

        if width < Self::MIN_SIDE || height < Self::MIN_SIDE {
            return Err(invalid("both sides must be at least 3"));
        }
        if width % 2 == 0 || height % 2 == 0 {
            return Err(invalid("both sides must be odd"));
        }
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(invalid("sides must fit in signed 32-bit coordinates"));
        }
        let len = width
            .checked_mul(height)
            .ok_or_else(|| invalid("cell count overflows"))?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| invalid("not enough memory for the cell buffer"))?;
        cells.resize(len, CellKind::Wall);

        let grid = Self {
            width,
            height,
            cells,
        };

        let (sx, sy) = grid.start();
        let (ex, ey) = grid.end();
        for (x, y) in [(sx, sy), (ex, ey)] {
            if !grid.in_interior(x, y) || x % 2 == 0 || y % 2 == 0 {
                return Err(invalid("start and end must be odd interior cells"));
            }
        }

        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> (usize, usize) {
        (1, 1)
    }

    pub fn end(&self) -> (usize, usize) {
        (self.width - 2, self.height - 2)
    }

    pub fn cell_kind(&self, x: i32, y: i32) -> Result<CellKind, GridError> {
        let (xu, yu) = self.checked(x, y)?;
        Ok(self.get(xu, yu))
    }

    pub fn is_passable(&self, x: i32, y: i32) -> Result<bool, GridError> {
        self.cell_kind(x, y).map(CellKind::is_passable)
    }

    /// Rows top to bottom, each `width` cells long.
    pub fn rows(&self) -> ChunksExact<'_, CellKind> {
        self.cells.chunks_exact(self.width)
    }

    pub(super) fn get(&self, x: usize, y: usize) -> CellKind {
        self.cells[self.idx(x, y)]
    }

    pub(super) fn set(&mut self, x: usize, y: usize, value: CellKind) {
        let idx = self.idx(x, y);
        self.cells[idx] = value;
    }

    /// Inside the permanent wall ring.
    pub(super) fn in_interior(&self, x: usize, y: usize) -> bool {
        x > 0 && x < self.width - 1 && y > 0 && y < self.height - 1
    }

    fn checked(&self, x: i32, y: i32) -> Result<(usize, usize), GridError> {
        let out = || GridError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        };
        let xu = usize::try_from(x).map_err(|_| out())?;
        let yu = usize::try_from(y).map_err(|_| out())?;
        if xu >= self.width || yu >= self.height {
            return Err(out());
        }
        Ok((xu, yu))
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }
}
