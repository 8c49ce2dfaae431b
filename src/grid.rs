use crate::config::INITIAL_SNAKE_LENGTH;
use crate::error::GameError;
use crate::random::RandomSource;

/// Grid-aligned position in pixel coordinates.
///
/// Valid cells have both coordinates as multiples of the cell size; a
/// proposed head may temporarily lie outside the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this cell shifted by `(dx, dy)`.
    #[must_use]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Immutable board geometry.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    width: u16,
    height: u16,
    cell_size: u16,
}

impl Grid {
    /// Validates and creates a board geometry.
    ///
    /// Both dimensions must be positive multiples of `cell_size`, and the
    /// board must be at least as wide as the starting snake.
    pub fn new(width: u16, height: u16, cell_size: u16) -> Result<Self, GameError> {
        let valid = cell_size > 0
            && width > 0
            && height > 0
            && width % cell_size == 0
            && height % cell_size == 0
            && width / cell_size >= INITIAL_SNAKE_LENGTH;

        if !valid {
            return Err(GameError::OutOfBoundsConfiguration {
                width,
                height,
                cell_size,
            });
        }

        Ok(Self {
            width,
            height,
            cell_size,
        })
    }

    #[must_use]
    pub fn width(self) -> u16 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> u16 {
        self.height
    }

    #[must_use]
    pub fn cell_size(self) -> u16 {
        self.cell_size
    }

    /// Number of cell columns.
    #[must_use]
    pub fn columns(self) -> u16 {
        self.width / self.cell_size
    }

    /// Number of cell rows.
    #[must_use]
    pub fn rows(self) -> u16 {
        self.height / self.cell_size
    }

    /// Returns the cell at column `col`, row `row`.
    #[must_use]
    pub fn cell_at(self, col: u16, row: u16) -> Cell {
        let size = i32::from(self.cell_size);
        Cell::new(i32::from(col) * size, i32::from(row) * size)
    }

    /// Converts a cell back to `(column, row)`, or `None` off the board.
    #[must_use]
    pub fn column_row(self, cell: Cell) -> Option<(u16, u16)> {
        if !self.contains(cell) {
            return None;
        }

        let size = i32::from(self.cell_size);
        let col = u16::try_from(cell.x / size).ok()?;
        let row = u16::try_from(cell.y / size).ok()?;
        Some((col, row))
    }

    /// Returns true when `cell` lies inside `[0, width) x [0, height)`.
    #[must_use]
    pub fn contains(self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && cell.x < i32::from(self.width)
            && cell.y < i32::from(self.height)
    }

    /// Draws a cell uniformly over every column and row, edges included.
    pub fn random_cell<R: RandomSource + ?Sized>(self, random: &mut R) -> Cell {
        let col = random.next(u32::from(self.columns()));
        let row = random.next(u32::from(self.rows()));

        // Out-of-range draws are clamped onto the last column/row.
        self.cell_at(
            u16::try_from(col).map_or(self.columns() - 1, |col| col.min(self.columns() - 1)),
            u16::try_from(row).map_or(self.rows() - 1, |row| row.min(self.rows() - 1)),
        )
    }
}
