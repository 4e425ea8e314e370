use crate::GridSize;

/// Represents a position in the grid using row, col coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn from_row_col(row: i32, col: i32) -> Self {
        Cell { row, col }
    }

    pub const fn is_valid(&self) -> bool {
        self.row >= 0 && self.col >= 0
    }

    pub fn increment(&mut self, cols_in_grid: i32) {
        self.col += 1;
        if self.col >= cols_in_grid {
            self.col = 0;
            self.row += 1;
        }
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

/// Iterator over the cells in a grid
/// Iteration runs from the top-left cell to the bottom-right cell in row-major order.
pub struct CellIterator {
    rows: i32,
    cols: i32,
    current: Cell,
}

impl CellIterator {
    pub fn for_grid_with_size(size: GridSize) -> Self {
        CellIterator {
            rows: size.rows as i32,
            cols: size.cols as i32,
            current: Cell::from_row_col(0, 0),
        }
    }
}

impl Iterator for CellIterator {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.row >= self.rows {
            return None;
        }

        let current = self.current;
        self.current.increment(self.cols);
        Some(current)
    }
}
