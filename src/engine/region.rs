use crate::{Coord, Grid, Topology};
use tracing::trace;

/// Axis-aligned rectangle of cells, bounds inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub min_row: i64,
    pub max_row: i64,
    pub min_col: i64,
    pub max_col: i64,
}

impl Region {
    pub const fn new(min_row: i64, max_row: i64, min_col: i64, max_col: i64) -> Self {
        Self {
            min_row,
            max_row,
            min_col,
            max_col,
        }
    }

    pub const fn point(coord: Coord) -> Self {
        Self::new(coord.row, coord.row, coord.col, coord.col)
    }

    /// Bounding box of `cells`, `None` if there are none.
    pub fn enclosing(cells: impl IntoIterator<Item = Coord>) -> Option<Self> {
        let mut cells = cells.into_iter();
        let first = Self::point(cells.next()?);
        Some(cells.fold(first, |r, c| {
            Self::new(
                r.min_row.min(c.row),
                r.max_row.max(c.row),
                r.min_col.min(c.col),
                r.max_col.max(c.col),
            )
        }))
    }

    /// Grows the region by `margin` cells in every direction, saturating at the `i64` limits.
    pub fn expanded(self, margin: i64) -> Self {
        Self::new(
            self.min_row.saturating_sub(margin),
            self.max_row.saturating_add(margin),
            self.min_col.saturating_sub(margin),
            self.max_col.saturating_add(margin),
        )
    }

    /// Region the engine has to visit to compute the next generation of `grid`.
    ///
    /// For bounded grids this is the whole field. For unbounded grids it is the
    /// bounding box of the live cells grown by `margin`; an empty grid falls back
    /// to the origin.
    pub fn scan(grid: &Grid, margin: i64) -> Self {
        let region = match grid.topology() {
            Topology::Bounded { rows, cols } => Self::new(0, rows - 1, 0, cols - 1),
            Topology::Unbounded => grid
                .extent()
                .unwrap_or(Self::point(Coord::new(0, 0)))
                .expanded(margin),
        };
        trace!(?region, cells = %region.area(), "scan region");
        region
    }

    pub fn height(&self) -> u128 {
        (self.max_row as i128 - self.min_row as i128 + 1) as u128
    }

    pub fn width(&self) -> u128 {
        (self.max_col as i128 - self.min_col as i128 + 1) as u128
    }

    /// Number of cells, saturating for regions spanning the whole `i64` plane.
    pub fn area(&self) -> u128 {
        self.height().saturating_mul(self.width())
    }

    /// Every coordinate of the region in row-major order.
    pub fn iter(self) -> impl Iterator<Item = Coord> {
        (self.min_row..=self.max_row)
            .flat_map(move |row| (self.min_col..=self.max_col).map(move |col| Coord::new(row, col)))
    }
}
