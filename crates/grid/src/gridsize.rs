/// Grid size represented by rows and columns.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSize {
    pub rows: usize,
    pub cols: usize,
}

impl GridSize {
    pub const fn with_rows_cols(rows: usize, cols: usize) -> Self {
        GridSize { rows, cols }
    }

    pub const fn square(size: usize) -> Self {
        GridSize { rows: size, cols: size }
    }

    pub const fn empty() -> Self {
        Self::with_rows_cols(0, 0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(rows: {}, cols: {})", self.rows, self.cols)
    }
}

impl std::fmt::Debug for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_count() {
        assert_eq!(GridSize::with_rows_cols(3, 4).cell_count(), 12);
        assert_eq!(GridSize::square(5).cell_count(), 25);
        assert_eq!(GridSize::empty().cell_count(), 0);
    }

    #[test]
    fn emptiness() {
        assert!(GridSize::empty().is_empty());
        assert!(GridSize::with_rows_cols(0, 10).is_empty());
        assert!(GridSize::with_rows_cols(10, 0).is_empty());
        assert!(!GridSize::square(1).is_empty());
    }
}
