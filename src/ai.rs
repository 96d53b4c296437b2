// Hunt/search targeting for the automated attacker.
// Keeps its own memory of the opponent grid; never looks at the opponent board.

use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;
use log::{debug, trace, warn};
use rand::Rng;

use crate::common::{orthogonal_neighbours, AttackResult, Cell, TargetingError};
use crate::ship::Ship;

/// Current behaviour of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetingMode {
    /// No open hits: fire at random untried cells.
    Search,
    /// At least one hit is not yet part of a sunk ship.
    Hunt,
}

/// Per-game memory of one attacking side.
#[derive(Debug, Clone)]
pub struct TargetingEngine {
    width: usize,
    height: usize,
    tried: BTreeSet<Cell>,
    open_hits: Vec<Cell>,
    sunk: Vec<Ship>,
}

impl TargetingEngine {
    /// Fresh engine for a `width`×`height` opponent board.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tried: BTreeSet::new(),
            open_hits: Vec::new(),
            sunk: Vec::new(),
        }
    }

    pub fn mode(&self) -> TargetingMode {
        if self.open_hits.is_empty() {
            TargetingMode::Search
        } else {
            TargetingMode::Hunt
        }
    }

    /// Hits not yet attributed to a sunk ship, in the order they landed.
    pub fn open_hits(&self) -> &[Cell] {
        &self.open_hits
    }

    /// Segments of the ships this engine has sunk.
    pub fn sunk_ships(&self) -> &[Ship] {
        &self.sunk
    }

    pub fn has_tried(&self, cell: Cell) -> bool {
        self.tried.contains(&cell)
    }

    /// Whether `cell` borders a ship this engine has already sunk.
    pub fn in_dead_zone(&self, cell: Cell) -> bool {
        self.sunk.iter().any(|ship| ship.is_near_cell(cell))
    }

    /// Whether `cell` passes every global filter: on the board, untried and
    /// outside the dead zone.
    pub fn is_candidate(&self, cell: Cell) -> bool {
        (1..=self.width).contains(&cell.0)
            && (1..=self.height).contains(&cell.1)
            && !self.has_tried(cell)
            && !self.in_dead_zone(cell)
    }

    /// Pick the next cell to attack and remember it as tried.
    pub fn select_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Cell, TargetingError> {
        let candidates = match self.open_hits.len() {
            0 => self.search_candidates(),
            1 => self.neighbour_candidates(self.open_hits[0]),
            _ => self.line_candidates()?,
        };
        if candidates.is_empty() {
            return Err(TargetingError::NoCandidates);
        }
        let target = candidates[rng.random_range(0..candidates.len())];
        trace!("{:?} mode targets {:?}", self.mode(), target);
        self.tried.insert(target);
        Ok(target)
    }

    /// Fold the result of attacking `cell` into the engine memory.
    ///
    /// On a sink the connected open hits around `cell` are rebuilt into the
    /// sunk ship and removed from the open hits.
    pub fn receive_result(&mut self, cell: Cell, result: AttackResult) -> Result<(), TargetingError> {
        self.tried.insert(cell);
        if !result.is_hit() {
            return Ok(());
        }
        if self.open_hits.contains(&cell) || self.sunk.iter().any(|s| s.occupies(cell)) {
            warn!("duplicate hit reported at {:?}", cell);
            return Ok(());
        }
        if self.open_hits.is_empty() {
            debug!("hit at {:?}, entering hunt mode", cell);
        }
        self.open_hits.push(cell);
        if result.is_sunk() {
            let wreck = self.reconstruct_sunk(cell)?;
            debug!("sunk {:?}, {} open hit(s) remain", wreck, self.open_hits.len());
            self.sunk.push(wreck);
        }
        Ok(())
    }

    fn search_candidates(&self) -> Vec<Cell> {
        (1..=self.height)
            .flat_map(|y| (1..=self.width).map(move |x| (x, y)))
            .filter(|&cell| self.is_candidate(cell))
            .collect()
    }

    fn neighbour_candidates(&self, hit: Cell) -> Vec<Cell> {
        orthogonal_neighbours(hit)
            .filter(|&cell| self.is_candidate(cell))
            .collect()
    }

    /// The two cells just beyond the ends of the collinear open hits.
    fn line_candidates(&self) -> Result<Vec<Cell>, TargetingError> {
        let (first, end) = line_extent(&self.open_hits)?;
        let ends = if first.0 == end.0 {
            [first.1.checked_sub(1).map(|y| (first.0, y)), Some((end.0, end.1 + 1))]
        } else {
            [first.0.checked_sub(1).map(|x| (x, first.1)), Some((end.0 + 1, end.1))]
        };
        Ok(ends
            .into_iter()
            .flatten()
            .filter(|&cell| self.is_candidate(cell))
            .collect())
    }

    fn reconstruct_sunk(&mut self, from: Cell) -> Result<Ship, TargetingError> {
        let component = connected_hits(&self.open_hits, from);
        self.open_hits.retain(|cell| !component.contains(cell));
        let cells: Vec<Cell> = component.into_iter().collect();
        let (start, end) = line_extent(&cells)?;
        Ship::new(start, end).map_err(|_| TargetingError::ScatteredHits)
    }
}

/// Smallest and largest cell of a set of hits lying on one row or column.
fn line_extent(cells: &[Cell]) -> Result<(Cell, Cell), TargetingError> {
    let first = *cells.first().ok_or(TargetingError::ScatteredHits)?;
    let vertical = cells.iter().all(|c| c.0 == first.0);
    let horizontal = cells.iter().all(|c| c.1 == first.1);
    if !vertical && !horizontal {
        return Err(TargetingError::ScatteredHits);
    }
    let min = cells.iter().copied().min().unwrap_or(first);
    let max = cells.iter().copied().max().unwrap_or(first);
    Ok((min, max))
}

/// Breadth-first walk over orthogonally adjacent hits, starting at `from`.
fn connected_hits(hits: &[Cell], from: Cell) -> BTreeSet<Cell> {
    let pool: BTreeSet<Cell> = hits.iter().copied().collect();
    let mut seen = BTreeSet::new();
    let mut queue = VecDeque::new();
    if pool.contains(&from) {
        seen.insert(from);
        queue.push_back(from);
    }
    while let Some(cell) = queue.pop_front() {
        for next in orthogonal_neighbours(cell) {
            if pool.contains(&next) && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connected_hits_stops_at_gaps() {
        let hits = [(2, 2), (3, 2), (4, 2), (6, 2), (3, 3)];
        let component = connected_hits(&hits, (2, 2));
        let expected: BTreeSet<Cell> = [(2, 2), (3, 2), (4, 2), (3, 3)].into_iter().collect();
        assert_eq!(component, expected);
    }

    #[test]
    fn line_extent_orders_cells() {
        assert_eq!(line_extent(&[(5, 4), (5, 2), (5, 3)]), Ok(((5, 2), (5, 4))));
        assert_eq!(line_extent(&[(7, 1), (6, 1)]), Ok(((6, 1), (7, 1))));
        assert_eq!(line_extent(&[(7, 1)]), Ok(((7, 1), (7, 1))));
        assert_eq!(
            line_extent(&[(1, 1), (2, 2)]),
            Err(TargetingError::ScatteredHits)
        );
    }

    #[test]
    fn line_candidates_skip_board_edge() {
        let mut engine = TargetingEngine::new(10, 10);
        engine.receive_result((1, 4), AttackResult::Hit).unwrap();
        engine.receive_result((2, 4), AttackResult::Hit).unwrap();
        assert_eq!(engine.line_candidates(), Ok(vec![(3, 4)]));
    }
}
