//! Common types for the naval battle core: cells, attack results and errors.

use core::fmt;

/// A board cell as `(column, row)`, both 1-indexed.
pub type Cell = (usize, usize);

/// Result of an attack against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackResult {
    /// Attack missed all ships.
    Miss,
    /// Attack hit a ship that is still afloat (or was already sunk).
    Hit,
    /// Attack sank the ship it hit.
    Sunk,
}

impl AttackResult {
    /// Build a result from the `(hit, sunk)` pair used by game drivers.
    pub fn from_flags(hit: bool, sunk: bool) -> Self {
        match (hit, sunk) {
            (true, true) => AttackResult::Sunk,
            (true, false) => AttackResult::Hit,
            (false, _) => AttackResult::Miss,
        }
    }

    /// Whether any ship was hit.
    pub fn is_hit(self) -> bool {
        !matches!(self, AttackResult::Miss)
    }

    /// Whether the hit ship went down because of this attack.
    pub fn is_sunk(self) -> bool {
        matches!(self, AttackResult::Sunk)
    }
}

/// Configuration errors raised while building ships, fleets and boards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board width or height is zero.
    InvalidDimensions { width: usize, height: usize },
    /// Ship endpoints are neither on one row nor on one column.
    NotStraight { start: Cell, end: Cell },
    /// Ship at `index` has a cell outside the board.
    ShipOutOfBounds { index: usize },
    /// Two ships share at least one cell.
    ShipsOverlap { first: usize, second: usize },
    /// Two ships touch, diagonals included.
    ShipsTooClose { first: usize, second: usize },
    /// Requested ship length is zero or cannot fit the board.
    InvalidShipLength { length: usize },
    /// Fleet needs more cells than the board has.
    FleetTooLarge { cells: usize, capacity: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidDimensions { width, height } => {
                write!(f, "Invalid board dimensions {}x{}", width, height)
            }
            BoardError::NotStraight { start, end } => write!(
                f,
                "Ship from {:?} to {:?} is neither horizontal nor vertical",
                start, end
            ),
            BoardError::ShipOutOfBounds { index } => {
                write!(f, "Ship #{} is out of bounds", index)
            }
            BoardError::ShipsOverlap { first, second } => {
                write!(f, "Ships #{} and #{} overlap", first, second)
            }
            BoardError::ShipsTooClose { first, second } => {
                write!(f, "Ships #{} and #{} are too close", first, second)
            }
            BoardError::InvalidShipLength { length } => {
                write!(f, "Ship length {} does not fit the board", length)
            }
            BoardError::FleetTooLarge { cells, capacity } => write!(
                f,
                "Fleet needs {} cells but the board only has {}",
                cells, capacity
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Contradictions detected by the targeting engine.
///
/// Neither can happen against a legal board; both indicate a defect in the
/// feedback the engine was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetingError {
    /// Every remaining cell was filtered out.
    NoCandidates,
    /// Open hits do not lie on a single row or column.
    ScatteredHits,
}

impl fmt::Display for TargetingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetingError::NoCandidates => write!(f, "No legal target cell remains"),
            TargetingError::ScatteredHits => {
                write!(f, "Open hits are not on a single line")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TargetingError {}

/// Two distinct cells are near each other when both coordinate deltas are at
/// most one.
pub fn are_near(a: Cell, b: Cell) -> bool {
    a != b && a.0.abs_diff(b.0) <= 1 && a.1.abs_diff(b.1) <= 1
}

/// The four orthogonal neighbours of `cell`, skipping those that would fall
/// below 1. Upper bounds are left to the caller.
pub fn orthogonal_neighbours(cell: Cell) -> impl Iterator<Item = Cell> {
    let (x, y) = cell;
    [
        x.checked_sub(1).map(|x| (x, y)),
        Some((x + 1, y)),
        y.checked_sub(1).map(|y| (x, y)),
        Some((x, y + 1)),
    ]
    .into_iter()
    .flatten()
    .filter(|&(x, y)| x >= 1 && y >= 1)
}
