//! A player's board: a legal fleet on a fixed-size grid.

use alloc::vec::Vec;
use core::fmt;
use log::debug;
use rand::Rng;

use crate::common::{AttackResult, BoardError, Cell};
use crate::config::FleetConfig;
use crate::fleet::{check_fleet, FleetGenerator};
use crate::ship::Ship;

pub struct Board {
    width: usize,
    height: usize,
    ships: Vec<Ship>,
}

impl Board {
    /// Build a board, rejecting fleets that leave the grid, overlap or touch.
    pub fn new(ships: Vec<Ship>, width: usize, height: usize) -> Result<Self, BoardError> {
        check_fleet(&ships, width, height)?;
        Ok(Board {
            width,
            height,
            ships,
        })
    }

    /// Build a board holding a freshly generated random fleet.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, config: &FleetConfig) -> Result<Self, BoardError> {
        let generator = FleetGenerator::new(config.clone())?;
        let ships = generator.generate(rng);
        Board::new(ships, config.width, config.height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Ships in the order they were supplied.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Whether `cell` lies on the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        (1..=self.width).contains(&cell.0) && (1..=self.height).contains(&cell.1)
    }

    /// Resolve an attack at `cell`. `Sunk` is reported only by the attack
    /// that completes a ship; hitting a wreck again is a plain `Hit`.
    pub fn attack(&mut self, cell: Cell) -> AttackResult {
        let Some(ship) = self.ships.iter_mut().find(|s| s.occupies(cell)) else {
            return AttackResult::Miss;
        };
        let was_sunk = ship.is_sunk();
        ship.receive_damage(cell);
        if !was_sunk && ship.is_sunk() {
            debug!("ship {:?} sunk at {:?}", ship, cell);
            AttackResult::Sunk
        } else {
            AttackResult::Hit
        }
    }

    /// Returns `true` when all ships are sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board {{ size: {}x{}, ships: {:?} }}",
            self.width, self.height, self.ships
        )
    }
}
