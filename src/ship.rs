//! Ship geometry and damage tracking.

use alloc::collections::BTreeSet;
use core::fmt;

use crate::common::{are_near, BoardError, Cell};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A ship spanning the cells between two endpoints, with damage tracked per cell.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    start: Cell,
    end: Cell,
    damaged: BTreeSet<Cell>,
}

impl Ship {
    /// Build a ship from two endpoints in any order.
    /// Fails unless the endpoints share a row or a column.
    pub fn new(start: Cell, end: Cell) -> Result<Self, BoardError> {
        Self::with_validation(start, end, true)
    }

    /// Build a ship, optionally skipping the up-front straightness check.
    ///
    /// Without validation a bent segment is still rejected, but only once its
    /// cells are derived: a ship always lies on a single row or column.
    pub fn with_validation(start: Cell, end: Cell, validate: bool) -> Result<Self, BoardError> {
        let ship = Self::unchecked(start, end);
        let straight = ship.is_horizontal() || ship.is_vertical();
        if validate && !straight {
            return Err(BoardError::NotStraight { start, end });
        }
        ship.into_segment()
    }

    /// Check that the normalized endpoints describe a run of cells.
    fn into_segment(self) -> Result<Self, BoardError> {
        if self.is_horizontal() || self.is_vertical() {
            Ok(self)
        } else {
            Err(BoardError::NotStraight {
                start: self.start,
                end: self.end,
            })
        }
    }

    /// Place a ship of `length` cells from `origin` towards larger coordinates.
    pub fn placed(origin: Cell, orientation: Orientation, length: usize) -> Self {
        let span = length.saturating_sub(1);
        let end = match orientation {
            Orientation::Horizontal => (origin.0 + span, origin.1),
            Orientation::Vertical => (origin.0, origin.1 + span),
        };
        Self::unchecked(origin, end)
    }

    pub(crate) fn unchecked(a: Cell, b: Cell) -> Self {
        Ship {
            start: (a.0.min(b.0), a.1.min(b.1)),
            end: (a.0.max(b.0), a.1.max(b.1)),
            damaged: BTreeSet::new(),
        }
    }

    /// Top-left endpoint after normalization.
    pub fn start(&self) -> Cell {
        self.start
    }

    /// Bottom-right endpoint after normalization.
    pub fn end(&self) -> Cell {
        self.end
    }

    /// All endpoints on one row. A single-cell ship is both horizontal and vertical.
    pub fn is_horizontal(&self) -> bool {
        self.start.1 == self.end.1
    }

    pub fn is_vertical(&self) -> bool {
        self.start.0 == self.end.0
    }

    /// Orientation, treating single-cell ships as horizontal.
    pub fn orientation(&self) -> Orientation {
        if self.is_horizontal() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// Occupied cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (self.start.1..=self.end.1)
            .flat_map(move |y| (self.start.0..=self.end.0).map(move |x| (x, y)))
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        (self.end.0 - self.start.0 + 1) * (self.end.1 - self.start.1 + 1)
    }

    /// Ships always cover at least one cell.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        (self.start.0..=self.end.0).contains(&cell.0)
            && (self.start.1..=self.end.1).contains(&cell.1)
    }

    /// Register an attack at `cell`. Returns `true` if the ship occupies it.
    /// Repeated hits on the same cell are recorded once.
    pub fn receive_damage(&mut self, cell: Cell) -> bool {
        if self.occupies(cell) {
            self.damaged.insert(cell);
            true
        } else {
            false
        }
    }

    pub fn damaged_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.damaged.iter().copied()
    }

    pub fn damage_count(&self) -> usize {
        self.damaged.len()
    }

    /// Check if the ship is sunk (all cells damaged).
    pub fn is_sunk(&self) -> bool {
        self.damaged.len() == self.len()
    }

    /// Whether `cell` is a distinct cell within one step (diagonals included)
    /// of any cell of this ship.
    pub fn is_near_cell(&self, cell: Cell) -> bool {
        // Cheap bounding-box reject before walking the cells.
        if cell.0 + 1 < self.start.0
            || cell.0 > self.end.0 + 1
            || cell.1 + 1 < self.start.1
            || cell.1 > self.end.1 + 1
        {
            return false;
        }
        self.cells().any(|own| are_near(own, cell))
    }

    /// Whether any cell of `other` is near this ship.
    pub fn is_near_ship(&self, other: &Ship) -> bool {
        other.cells().any(|cell| self.is_near_cell(cell))
    }

    /// Whether the two ships share at least one cell.
    pub fn overlaps(&self, other: &Ship) -> bool {
        self.start.0 <= other.end.0
            && other.start.0 <= self.end.0
            && self.start.1 <= other.end.1
            && other.start.1 <= self.end.1
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ start: {:?}, end: {:?}, damaged: {}/{} }}",
            self.start,
            self.end,
            self.damaged.len(),
            self.len(),
        )
    }
}
