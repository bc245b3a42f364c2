#![warn(clippy::all)]

mod cli;
mod config;
mod engine;
mod error;
mod grid;
mod life;
mod patterns;
mod utils;

pub use cli::{Cli, EngineKind};
pub use config::Config;
pub use engine::{next_state, Engine, Region, ScanEngine, TallyEngine};
pub use error::{LifeError, Result};
pub use grid::{Coord, Grid};
pub use life::{Generation, Life};
pub use patterns::{random_soup, Pattern, PATTERNS};
pub use utils::{parse_rle, Topology};
