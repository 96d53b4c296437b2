//! Player trait and implementations
//!
//! - RandomPlayer: fires at uniformly random untried cells
//! - AiPlayer: hunt/search targeting engine

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::ai::TargetingEngine;
use crate::common::{AttackResult, Cell, TargetingError};

/// Interface implemented by the attacking side of a game.
///
/// A Player is responsible for:
/// - Selecting targets to attack
/// - Handling feedback from its attacks
pub trait Player {
    /// Choose the next cell to attack.
    fn select_target(&mut self, rng: &mut SmallRng) -> Result<Cell, TargetingError>;

    /// Inform the player of the result of its attack at `cell`.
    fn receive_result(&mut self, _cell: Cell, _result: AttackResult) -> Result<(), TargetingError> {
        Ok(())
    }
}

/// Attacks random cells it has not attacked before.
pub struct RandomPlayer {
    width: usize,
    height: usize,
    tried: BTreeSet<Cell>,
}

impl RandomPlayer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tried: BTreeSet::new(),
        }
    }
}

impl Player for RandomPlayer {
    fn select_target(&mut self, rng: &mut SmallRng) -> Result<Cell, TargetingError> {
        let untried: Vec<Cell> = (1..=self.height)
            .flat_map(|y| (1..=self.width).map(move |x| (x, y)))
            .filter(|cell| !self.tried.contains(cell))
            .collect();
        if untried.is_empty() {
            return Err(TargetingError::NoCandidates);
        }
        let target = untried[rng.random_range(0..untried.len())];
        self.tried.insert(target);
        Ok(target)
    }
}

/// Player driven by the [`TargetingEngine`].
pub struct AiPlayer {
    engine: TargetingEngine,
}

impl AiPlayer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            engine: TargetingEngine::new(width, height),
        }
    }

    pub fn engine(&self) -> &TargetingEngine {
        &self.engine
    }
}

impl Player for AiPlayer {
    fn select_target(&mut self, rng: &mut SmallRng) -> Result<Cell, TargetingError> {
        self.engine.select_target(rng)
    }

    fn receive_result(&mut self, cell: Cell, result: AttackResult) -> Result<(), TargetingError> {
        self.engine.receive_result(cell, result)
    }
}
