//! Random fleet placement and the legality rules shared with [`Board`](crate::Board).

use alloc::vec::Vec;
use log::debug;
use rand::Rng;

use crate::common::BoardError;
use crate::config::{FleetConfig, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, Ship};

/// Returns `true` if every cell of `ship` lies on a `width`×`height` board.
pub fn is_in_bounds(ship: &Ship, width: usize, height: usize) -> bool {
    let (start, end) = (ship.start(), ship.end());
    start.0 >= 1 && start.1 >= 1 && end.0 <= width && end.1 <= height
}

/// Returns `true` if the ships share at least one cell.
pub fn are_overlapping(a: &Ship, b: &Ship) -> bool {
    a.overlaps(b)
}

/// Returns `true` if `candidate` neither overlaps nor touches any accepted ship.
pub fn fits(accepted: &[Ship], candidate: &Ship) -> bool {
    accepted
        .iter()
        .all(|ship| !are_overlapping(ship, candidate) && !ship.is_near_ship(candidate))
}

/// Check a complete fleet against a board: straight, in bounds, no overlap,
/// no contact.
pub fn check_fleet(ships: &[Ship], width: usize, height: usize) -> Result<(), BoardError> {
    if width == 0 || height == 0 {
        return Err(BoardError::InvalidDimensions { width, height });
    }
    if let Some(ship) = ships.iter().find(|s| !s.is_horizontal() && !s.is_vertical()) {
        return Err(BoardError::NotStraight {
            start: ship.start(),
            end: ship.end(),
        });
    }
    if let Some(index) = ships.iter().position(|s| !is_in_bounds(s, width, height)) {
        return Err(BoardError::ShipOutOfBounds { index });
    }
    for (first, a) in ships.iter().enumerate() {
        for (offset, b) in ships[first + 1..].iter().enumerate() {
            let second = first + 1 + offset;
            if are_overlapping(a, b) {
                return Err(BoardError::ShipsOverlap { first, second });
            }
            if a.is_near_ship(b) {
                return Err(BoardError::ShipsTooClose { first, second });
            }
        }
    }
    Ok(())
}

/// Generates random legal fleets for a validated [`FleetConfig`].
#[derive(Debug, Clone)]
pub struct FleetGenerator {
    config: FleetConfig,
    max_attempts: usize,
}

impl FleetGenerator {
    /// Validate `config` and build a generator for it.
    ///
    /// Rejects empty boards, zero-length ships, ships longer than both board
    /// sides and fleets needing more cells than the board has.
    pub fn new(config: FleetConfig) -> Result<Self, BoardError> {
        let (width, height) = (config.width, config.height);
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        for &length in config.ships_per_length.keys() {
            if length == 0 || (length > width && length > height) {
                return Err(BoardError::InvalidShipLength { length });
            }
        }
        let cells = config.total_cells();
        let capacity = width * height;
        if cells > capacity {
            return Err(BoardError::FleetTooLarge { cells, capacity });
        }
        Ok(Self {
            config,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        })
    }

    /// Override the per-ship attempt budget before a full restart.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn config(&self) -> &FleetConfig {
        &self.config
    }

    /// Produce a legal fleet, restarting from an empty fleet whenever a single
    /// ship exhausts its attempt budget.
    ///
    /// Does not return for fleets that cannot be packed without contact.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Ship> {
        self.generate_with_restarts(rng).0
    }

    /// Like [`generate`](Self::generate), also reporting how many times the
    /// fleet was started over.
    fn generate_with_restarts<R: Rng + ?Sized>(&self, rng: &mut R) -> (Vec<Ship>, usize) {
        let mut restarts = 0usize;
        loop {
            if let Some(ships) = self.try_generate(rng) {
                if restarts > 0 {
                    debug!("fleet generated after {} restart(s)", restarts);
                }
                return (ships, restarts);
            }
            restarts += 1;
            debug!("placement budget exhausted, restarting fleet (#{})", restarts);
        }
    }

    fn try_generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Vec<Ship>> {
        let mut ships = Vec::with_capacity(self.config.ship_count());
        for (&length, &count) in self.config.ships_per_length.iter() {
            for _ in 0..count {
                let ship = (0..self.max_attempts)
                    .map(|_| self.random_ship(rng, length))
                    .find(|candidate| fits(&ships, candidate))?;
                ships.push(ship);
            }
        }
        Some(ships)
    }

    /// Random in-bounds ship of `length`; orientation is uniform among the
    /// orientations that fit the board.
    fn random_ship<R: Rng + ?Sized>(&self, rng: &mut R, length: usize) -> Ship {
        let (width, height) = (self.config.width, self.config.height);
        let orientation = match (length <= width, length <= height) {
            (true, true) => {
                if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                }
            }
            (true, false) => Orientation::Horizontal,
            _ => Orientation::Vertical,
        };
        let (max_x, max_y) = match orientation {
            Orientation::Horizontal => (width - length + 1, height),
            Orientation::Vertical => (width, height - length + 1),
        };
        let x = rng.random_range(1..=max_x);
        let y = rng.random_range(1..=max_y);
        Ship::placed((x, y), orientation, length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn rejects_impossible_configs() {
        assert_eq!(
            FleetGenerator::new(FleetConfig::new(0, 10)).unwrap_err(),
            BoardError::InvalidDimensions { width: 0, height: 10 }
        );
        assert_eq!(
            FleetGenerator::new(FleetConfig::new(4, 4).with_ships(5, 1)).unwrap_err(),
            BoardError::InvalidShipLength { length: 5 }
        );
        assert_eq!(
            FleetGenerator::new(FleetConfig::new(3, 3).with_ships(3, 4)).unwrap_err(),
            BoardError::FleetTooLarge { cells: 12, capacity: 9 }
        );
    }

    #[test]
    fn long_ship_on_narrow_board_is_vertical() {
        let generator = FleetGenerator::new(FleetConfig::new(2, 6).with_ships(5, 1)).unwrap();
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            let ships = generator.generate(&mut rng);
            assert_eq!(ships.len(), 1);
            assert!(ships[0].is_vertical());
            assert!(is_in_bounds(&ships[0], 2, 6));
        }
    }

    #[test]
    fn exhausted_budget_restarts_whole_fleet() {
        let generator = FleetGenerator::new(FleetConfig::default())
            .unwrap()
            .with_max_attempts(1);
        let seed = (0..500u64)
            .find(|&seed| {
                generator
                    .try_generate(&mut SmallRng::seed_from_u64(seed))
                    .is_none()
            })
            .expect("a single attempt per ship should fail for some seed");

        let mut rng = SmallRng::seed_from_u64(seed);
        let (ships, restarts) = generator.generate_with_restarts(&mut rng);
        assert!(restarts >= 1);
        assert_eq!(ships.len(), 5);
        assert!(check_fleet(&ships, 10, 10).is_ok());
    }

    #[test]
    fn bent_ship_never_reaches_a_board() {
        let bent = Ship::unchecked((2, 2), (4, 4));
        assert_eq!(
            check_fleet(&[bent], 10, 10).unwrap_err(),
            BoardError::NotStraight {
                start: (2, 2),
                end: (4, 4)
            }
        );
    }
}
