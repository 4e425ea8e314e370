use crate::{Cell, Error, GridNum, GridSize, Result};

/// Row-major dense 2-D grid of numeric cells.
/// The cell data is stored in a single contiguous buffer, the grid does not
/// track missing values, every cell holds a plain number.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseGrid<T: GridNum> {
    size: GridSize,
    data: Vec<T>,
}

fn assert_dimensions<T: GridNum>(lhs: &DenseGrid<T>, rhs: &DenseGrid<T>) {
    assert_eq!(lhs.size(), rhs.size(), "Grid dimensions do not match");
}

impl<T: GridNum> DenseGrid<T> {
    /// Fails when the data length does not match the cell count of the provided size.
    pub fn new(size: GridSize, data: Vec<T>) -> Result<Self> {
        if data.len() != size.cell_count() {
            return Err(Error::InvalidArgument(format!(
                "Grid data length {} does not match size {}",
                data.len(),
                size
            )));
        }

        Ok(DenseGrid { size, data })
    }

    pub fn empty() -> Self {
        DenseGrid {
            size: GridSize::empty(),
            data: Vec::new(),
        }
    }

    pub fn zeros(size: GridSize) -> Self {
        Self::filled_with(T::zero(), size)
    }

    pub fn filled_with(val: T, size: GridSize) -> Self {
        DenseGrid {
            size,
            data: vec![val; size.cell_count()],
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_mut_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<T> {
        self.data.iter()
    }

    pub fn into_raw_parts(self) -> (GridSize, Vec<T>) {
        (self.size, self.data)
    }

    pub fn cell_value(&self, cell: Cell) -> T {
        self[cell]
    }

    pub fn unary<F: Fn(T) -> T>(&self, op: F) -> Self {
        DenseGrid {
            size: self.size,
            data: self.data.iter().map(|&a| op(a)).collect(),
        }
    }

    pub fn binary<F: Fn(T, T) -> T>(&self, other: &Self, op: F) -> Self {
        assert_dimensions(self, other);

        DenseGrid {
            size: self.size,
            data: self.data.iter().zip(other.data.iter()).map(|(&a, &b)| op(a, b)).collect(),
        }
    }

    /// Casts every cell to the requested numeric type.
    /// Values that cannot be represented in the target type become zero.
    pub fn cast<U: GridNum>(&self) -> DenseGrid<U> {
        DenseGrid {
            size: self.size,
            data: self.data.iter().map(|&v| num::NumCast::from(v).unwrap_or_else(U::zero)).collect(),
        }
    }

    pub fn sum(&self) -> f64 {
        self.data.iter().fold(0.0, |acc, x| acc + x.to_f64().unwrap_or(0.0))
    }

    /// The mean cell value, 0.0 for an empty grid.
    pub fn mean(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }

        self.sum() / self.data.len() as f64
    }

    pub fn count_of(&self, val: T) -> usize {
        self.data.iter().filter(|&&v| v == val).count()
    }
}

impl<T: GridNum> std::ops::Index<Cell> for DenseGrid<T> {
    type Output = T;

    fn index(&self, cell: Cell) -> &Self::Output {
        &self.data[cell.row as usize * self.size.cols + cell.col as usize]
    }
}

impl<T: GridNum> std::ops::IndexMut<Cell> for DenseGrid<T> {
    fn index_mut(&mut self, cell: Cell) -> &mut Self::Output {
        &mut self.data[cell.row as usize * self.size.cols + cell.col as usize]
    }
}
