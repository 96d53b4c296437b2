use alloc::boxed::Box;
use alloc::string::String;
use log::{debug, info};
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{AttackResult, Cell, TargetingError};
use crate::player::Player;

/// One participant: its own board and the strategy it attacks with.
pub struct Side {
    name: String,
    board: Board,
    player: Box<dyn Player>,
}

impl Side {
    pub fn new(name: impl Into<String>, board: Board, player: Box<dyn Player>) -> Self {
        Self {
            name: name.into(),
            board,
            player,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns `true` once this side's whole fleet is sunk.
    pub fn has_lost(&self) -> bool {
        self.board.all_sunk()
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// Index of the side that sank the other fleet.
    Won(usize),
}

/// A single resolved attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub attacker: usize,
    pub cell: Cell,
    pub result: AttackResult,
}

/// Outcome of a completed game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameSummary {
    pub winner: usize,
    pub winner_name: String,
    /// Attacks made by each side.
    pub attacks: [usize; 2],
}

/// Alternates attacks between two sides until one fleet is gone.
pub struct GameEngine {
    sides: [Side; 2],
    current: usize,
    attacks: [usize; 2],
}

impl GameEngine {
    /// New game where `first` attacks first.
    pub fn new(first: Side, second: Side) -> Self {
        Self {
            sides: [first, second],
            current: 0,
            attacks: [0; 2],
        }
    }

    pub fn side(&self, index: usize) -> &Side {
        &self.sides[index]
    }

    /// Index of the side whose turn it is.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn status(&self) -> GameStatus {
        match (self.sides[0].has_lost(), self.sides[1].has_lost()) {
            (_, true) => GameStatus::Won(0),
            (true, false) => GameStatus::Won(1),
            (false, false) => GameStatus::InProgress,
        }
    }

    /// Play one attack by the current side. Returns `None` once the game is over.
    pub fn play_turn(&mut self, rng: &mut SmallRng) -> Result<Option<TurnReport>, TargetingError> {
        if self.status() != GameStatus::InProgress {
            return Ok(None);
        }
        let attacker = self.current;
        let defender = 1 - attacker;
        let cell = self.sides[attacker].player.select_target(rng)?;
        let result = self.sides[defender].board.attack(cell);
        self.sides[attacker].player.receive_result(cell, result)?;
        self.attacks[attacker] += 1;
        if result.is_sunk() {
            debug!("{} sank a ship at {:?}", self.sides[attacker].name, cell);
        }
        self.current = defender;
        Ok(Some(TurnReport {
            attacker,
            cell,
            result,
        }))
    }

    /// Play until one side has lost.
    pub fn run(&mut self, rng: &mut SmallRng) -> Result<GameSummary, TargetingError> {
        let winner = loop {
            if let GameStatus::Won(winner) = self.status() {
                break winner;
            }
            self.play_turn(rng)?;
        };
        info!(
            "{} won after {} attacks",
            self.sides[winner].name, self.attacks[winner]
        );
        Ok(GameSummary {
            winner,
            winner_name: self.sides[winner].name.clone(),
            attacks: self.attacks,
        })
    }
}
