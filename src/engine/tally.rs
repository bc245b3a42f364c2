use super::{next_state, Engine};
use crate::{Coord, Grid};
use ahash::AHashMap as HashMap;

/// Sparse engine: every live cell adds one to the counter of each of its
/// neighbours, only coordinates with a non-zero counter can be alive next.
///
/// Work is proportional to the population instead of the scanned area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TallyEngine;

impl Engine for TallyEngine {
    fn next_generation(&self, grid: &Grid) -> Grid {
        let mut tally: HashMap<Coord, usize> = HashMap::with_capacity(grid.population() * 8);
        for cell in grid.iter() {
            for neib in cell.neighbors().filter(|&n| grid.is_valid(n)) {
                *tally.entry(neib).or_insert(0) += 1;
            }
        }
        let alive = tally
            .into_iter()
            .filter(|&(coord, neibs)| next_state(grid.is_alive(coord), neibs))
            .map(|(coord, _)| coord);
        grid.successor(alive)
    }

    fn name(&self) -> &'static str {
        "tally"
    }
}
