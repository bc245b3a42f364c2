/// Describes the extent of the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    /// Field has `rows x cols` cells; everything outside is invalid.
    Bounded { rows: i64, cols: i64 },
    /// Field is unbounded and can grow infinitely.
    Unbounded,
}

impl Topology {
    /// Returns `(rows, cols)` for bounded fields.
    pub fn dimensions(self) -> Option<(i64, i64)> {
        match self {
            Topology::Bounded { rows, cols } => Some((rows, cols)),
            Topology::Unbounded => None,
        }
    }
}
