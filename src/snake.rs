use std::collections::VecDeque;

use crate::grid::{Cell, Grid};
use crate::input::{Direction, direction_change_is_valid};

/// Snake body and heading.
///
/// Segments are stored tail first, head last. The body is never empty.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    cell_size: i32,
}

impl Snake {
    /// Creates a straight snake of `length` cells whose tail sits at
    /// `(tail_col, row)` and whose head points right.
    #[must_use]
    pub fn straight(grid: Grid, tail_col: u16, row: u16, length: u16) -> Self {
        let body = (0..length.max(1))
            .map(|offset| grid.cell_at(tail_col + offset, row))
            .collect();

        Self {
            body,
            direction: Direction::Right,
            cell_size: i32::from(grid.cell_size()),
        }
    }

    /// Creates a snake from explicit segments, ordered tail to head.
    ///
    /// Returns `None` for an empty segment list.
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, direction: Direction, grid: Grid) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }

        Some(Self {
            body: VecDeque::from(segments),
            direction,
            cell_size: i32::from(grid.cell_size()),
        })
    }

    /// Returns the head position reached by one step in `direction`.
    #[must_use]
    pub fn propose_next_head(&self, direction: Direction) -> Cell {
        let (dx, dy) = direction.unit();
        self.head().offset(dx * self.cell_size, dy * self.cell_size)
    }

    /// Appends `new_head`; drops the tail unless the snake grew.
    pub fn advance(&mut self, new_head: Cell, grew: bool) {
        self.body.push_back(new_head);
        if !grew {
            let _ = self.body.pop_front();
        }
    }

    /// Turns towards `requested` unless it reverses the current heading.
    ///
    /// Returns whether the change was accepted.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if !direction_change_is_valid(self.direction, requested) {
            return false;
        }

        self.direction = requested;
        true
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment, head included, occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Copies the body, tail first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Cell> {
        self.body.iter().copied().collect()
    }
}
