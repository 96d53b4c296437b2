#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod ai;
mod board;
mod common;
mod config;
pub mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
mod ship;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use fleet::FleetGenerator;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
pub use ship::*;
