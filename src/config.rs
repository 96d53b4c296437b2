use alloc::collections::BTreeMap;

pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 10;
/// One ship of each of these lengths makes up the default fleet.
pub const DEFAULT_SHIP_LENGTHS: [usize; 5] = [1, 2, 3, 4, 5];
/// Attempts to place a single ship before fleet generation starts over.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Board dimensions plus how many ships of each length to deploy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetConfig {
    pub width: usize,
    pub height: usize,
    pub ships_per_length: BTreeMap<usize, usize>,
}

impl FleetConfig {
    /// Empty fleet on a `width`×`height` board.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ships_per_length: BTreeMap::new(),
        }
    }

    /// Set the number of ships of `length`, replacing any previous count.
    pub fn with_ships(mut self, length: usize, count: usize) -> Self {
        self.ships_per_length.insert(length, count);
        self
    }

    /// Total number of ships.
    pub fn ship_count(&self) -> usize {
        self.ships_per_length.values().sum()
    }

    /// Total number of cells covered by the fleet.
    pub fn total_cells(&self) -> usize {
        self.ships_per_length
            .iter()
            .map(|(len, count)| len * count)
            .sum()
    }
}

impl Default for FleetConfig {
    fn default() -> Self {
        DEFAULT_SHIP_LENGTHS
            .iter()
            .fold(FleetConfig::new(BOARD_WIDTH, BOARD_HEIGHT), |cfg, &len| {
                cfg.with_ships(len, 1)
            })
    }
}
