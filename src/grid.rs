use crate::{LifeError, Region, Result, Topology};
use ahash::AHashSet;
use std::fmt;

/// Offsets of the Moore neighbourhood.
const MOORE: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Cell position. Ordering is row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: i64,
    pub col: i64,
}

impl Coord {
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// The 8 adjacent coordinates. Neighbours that would overflow `i64` are skipped.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        MOORE.into_iter().filter_map(move |(dr, dc)| {
            Some(Coord::new(
                self.row.checked_add(dr)?,
                self.col.checked_add(dc)?,
            ))
        })
    }
}

impl From<(i64, i64)> for Coord {
    fn from((row, col): (i64, i64)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Sparse set of live cells over a bounded or unbounded field.
///
/// A coordinate is alive iff it is present in the set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    topology: Topology,
    cells: AHashSet<Coord>,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// Fails with [`LifeError::InvalidDimension`] if a bounded topology has
    /// non-positive rows or columns.
    pub fn new(topology: Topology) -> Result<Self> {
        if let Topology::Bounded { rows, cols } = topology {
            if rows <= 0 || cols <= 0 {
                return Err(LifeError::InvalidDimension { rows, cols });
            }
        }
        Ok(Self {
            topology,
            cells: AHashSet::new(),
        })
    }

    pub fn bounded(rows: i64, cols: i64) -> Result<Self> {
        Self::new(Topology::Bounded { rows, cols })
    }

    pub fn unbounded() -> Self {
        Self {
            topology: Topology::Unbounded,
            cells: AHashSet::new(),
        }
    }

    /// Create a grid with the given cells alive.
    ///
    /// Fails on the first coordinate that is invalid for `topology`.
    pub fn with_cells(topology: Topology, cells: impl IntoIterator<Item = Coord>) -> Result<Self> {
        let mut grid = Self::new(topology)?;
        for coord in cells {
            grid.set(coord, true)?;
        }
        Ok(grid)
    }

    /// Grid of the same topology holding exactly `cells`, which must all be valid.
    pub(crate) fn successor(&self, cells: impl IntoIterator<Item = Coord>) -> Self {
        Self {
            topology: self.topology,
            cells: cells.into_iter().collect(),
        }
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Number of rows; `None` for unbounded grids.
    pub fn num_rows(&self) -> Option<i64> {
        self.topology.dimensions().map(|(rows, _)| rows)
    }

    /// Number of columns; `None` for unbounded grids.
    pub fn num_cols(&self) -> Option<i64> {
        self.topology.dimensions().map(|(_, cols)| cols)
    }

    pub fn is_valid(&self, coord: Coord) -> bool {
        match self.topology {
            Topology::Bounded { rows, cols } => {
                (0..rows).contains(&coord.row) && (0..cols).contains(&coord.col)
            }
            Topology::Unbounded => true,
        }
    }

    fn check(&self, coord: Coord) -> Result<()> {
        match self.topology {
            Topology::Bounded { rows, cols } if !self.is_valid(coord) => {
                Err(LifeError::OutOfBounds { coord, rows, cols })
            }
            _ => Ok(()),
        }
    }

    pub fn get(&self, coord: Coord) -> Result<bool> {
        self.check(coord)?;
        Ok(self.cells.contains(&coord))
    }

    /// Mark the cell alive or dead. Killing a dead cell is a no-op.
    pub fn set(&mut self, coord: Coord, alive: bool) -> Result<()> {
        self.check(coord)?;
        if alive {
            self.cells.insert(coord);
        } else {
            self.cells.remove(&coord);
        }
        Ok(())
    }

    /// Number of live cells among the 8 neighbours of `coord`.
    ///
    /// Neighbours outside the grid count as dead; `coord` itself must be valid.
    pub fn neighbor_count(&self, coord: Coord) -> Result<usize> {
        self.check(coord)?;
        Ok(self.count_neighbors(coord))
    }

    pub(crate) fn is_alive(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    pub(crate) fn count_neighbors(&self, coord: Coord) -> usize {
        coord.neighbors().filter(|n| self.cells.contains(n)).count()
    }

    /// Live cells in arbitrary order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }

    /// All live cells in row-major order.
    pub fn occupied_coordinates(&self) -> Vec<Coord> {
        let mut cells: Vec<Coord> = self.iter().collect();
        cells.sort_unstable();
        cells
    }

    pub fn population(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Smallest region containing every live cell.
    pub fn extent(&self) -> Option<Region> {
        Region::enclosing(self.iter())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let region = match self.topology {
            Topology::Bounded { rows, cols } => Region::new(0, rows - 1, 0, cols - 1),
            Topology::Unbounded => match self.extent() {
                Some(region) => region,
                None => return Ok(()),
            },
        };
        for row in region.min_row..=region.max_row {
            for col in region.min_col..=region.max_col {
                let c = if self.is_alive(Coord::new(row, col)) { '#' } else { '.' };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(v: &[(i64, i64)]) -> Vec<Coord> {
        v.iter().copied().map(Coord::from).collect()
    }

    #[test]
    fn test_invalid_dimensions() {
        for (rows, cols) in [(0, 5), (5, 0), (-1, 3), (0, 0)] {
            assert_eq!(
                Grid::bounded(rows, cols),
                Err(LifeError::InvalidDimension { rows, cols })
            );
        }
        assert!(Grid::bounded(1, 1).is_ok());
    }

    #[test]
    fn test_bounded_validity() {
        let mut grid = Grid::bounded(3, 4).unwrap();
        for coord in cells(&[(-1, 0), (0, -1), (3, 0), (0, 4), (3, 4), (i64::MIN, i64::MAX)]) {
            assert!(!grid.is_valid(coord));
            assert!(matches!(grid.get(coord), Err(LifeError::OutOfBounds { .. })));
            assert!(matches!(grid.set(coord, true), Err(LifeError::OutOfBounds { .. })));
            assert!(matches!(
                grid.neighbor_count(coord),
                Err(LifeError::OutOfBounds { .. })
            ));
        }
        assert!(grid.is_empty());
        assert!(grid.is_valid(Coord::new(2, 3)));
        assert_eq!(grid.num_rows(), Some(3));
        assert_eq!(grid.num_cols(), Some(4));
    }

    #[test]
    fn test_unbounded_accepts_everything() {
        let mut grid = Grid::unbounded();
        let far = Coord::new(-1_000_000, 7_000_000_000);
        assert!(grid.is_valid(far));
        assert_eq!(grid.get(far), Ok(false));
        grid.set(far, true).unwrap();
        assert_eq!(grid.get(far), Ok(true));
        assert_eq!(grid.num_rows(), None);
        assert_eq!(grid.num_cols(), None);
    }

    #[test]
    fn test_set_dead_is_noop() {
        let mut grid = Grid::bounded(2, 2).unwrap();
        grid.set(Coord::new(1, 1), false).unwrap();
        assert!(grid.is_empty());
        grid.set(Coord::new(1, 1), true).unwrap();
        grid.set(Coord::new(1, 1), true).unwrap();
        assert_eq!(grid.population(), 1);
        grid.set(Coord::new(1, 1), false).unwrap();
        assert!(grid.is_empty());
    }

    #[test]
    fn test_neighbor_count_at_edges() {
        let mut grid = Grid::bounded(3, 3).unwrap();
        for row in 0..3 {
            for col in 0..3 {
                grid.set(Coord::new(row, col), true).unwrap();
            }
        }
        assert_eq!(grid.neighbor_count(Coord::new(0, 0)), Ok(3));
        assert_eq!(grid.neighbor_count(Coord::new(0, 1)), Ok(5));
        assert_eq!(grid.neighbor_count(Coord::new(1, 1)), Ok(8));
        assert_eq!(grid.neighbor_count(Coord::new(2, 2)), Ok(3));
    }

    #[test]
    fn test_neighbors_near_overflow() {
        let corner = Coord::new(i64::MAX, i64::MIN);
        assert_eq!(corner.neighbors().count(), 3);
        let mut grid = Grid::unbounded();
        grid.set(Coord::new(i64::MAX - 1, i64::MIN), true).unwrap();
        assert_eq!(grid.neighbor_count(corner), Ok(1));
    }

    #[test]
    fn test_occupied_row_major() {
        let grid = Grid::with_cells(
            Topology::Unbounded,
            cells(&[(2, 1), (0, 5), (2, -3), (-1, 0), (0, 2)]),
        )
        .unwrap();
        assert_eq!(
            grid.occupied_coordinates(),
            cells(&[(-1, 0), (0, 2), (0, 5), (2, -3), (2, 1)])
        );
    }

    #[test]
    fn test_with_cells_rejects_out_of_bounds() {
        let result = Grid::with_cells(
            Topology::Bounded { rows: 2, cols: 2 },
            cells(&[(0, 0), (2, 0)]),
        );
        assert_eq!(
            result,
            Err(LifeError::OutOfBounds {
                coord: Coord::new(2, 0),
                rows: 2,
                cols: 2
            })
        );
    }

    #[test]
    fn test_display() {
        let grid = Grid::with_cells(
            Topology::Bounded { rows: 2, cols: 3 },
            cells(&[(0, 1), (1, 2)]),
        )
        .unwrap();
        assert_eq!(grid.to_string(), ".#.\n..#\n");

        let grid = Grid::with_cells(Topology::Unbounded, cells(&[(-5, -5), (-4, -3)])).unwrap();
        assert_eq!(grid.to_string(), "#..\n..#\n");
        assert_eq!(Grid::unbounded().to_string(), "");
    }
}
