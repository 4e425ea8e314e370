use crate::{DenseGrid, Error, GridNum, GridSize, Result};

/// A contiguous stack of equally sized grids, one layer per simulation step.
/// Layer data is stored layer-major: the cells of layer 0 are followed by the
/// cells of layer 1, and so on.
#[derive(Debug, Clone, PartialEq)]
pub struct GridStack<T: GridNum> {
    size: GridSize,
    layers: usize,
    data: Vec<T>,
}

impl<T: GridNum> GridStack<T> {
    /// Fails when the data length does not match `layers * cell_count`.
    pub fn new(size: GridSize, layers: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != layers * size.cell_count() {
            return Err(Error::InvalidArgument(format!(
                "Stack data length {} does not match {} layers of size {}",
                data.len(),
                layers,
                size
            )));
        }

        Ok(GridStack { size, layers, data })
    }

    pub fn empty() -> Self {
        GridStack {
            size: GridSize::empty(),
            layers: 0,
            data: Vec::new(),
        }
    }

    pub fn filled_with(val: T, size: GridSize, layers: usize) -> Self {
        GridStack {
            size,
            layers,
            data: vec![val; layers * size.cell_count()],
        }
    }

    /// Stacks the provided grids into a single buffer.
    /// All grids must share the same dimensions.
    pub fn from_layers(layers: Vec<DenseGrid<T>>) -> Result<Self> {
        let Some(first) = layers.first() else {
            return Ok(GridStack::empty());
        };

        let size = first.size();
        let mut data = Vec::with_capacity(layers.len() * size.cell_count());
        for layer in layers.iter() {
            if layer.size() != size {
                return Err(Error::SizeMismatch {
                    size1: size,
                    size2: layer.size(),
                });
            }
        }

        let layer_count = layers.len();
        for layer in layers {
            let (_, layer_data) = layer.into_raw_parts();
            data.extend(layer_data);
        }

        GridStack::new(size, layer_count, data)
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn layer_count(&self) -> usize {
        self.layers
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// The cell data of a single layer.
    pub fn layer(&self, index: usize) -> &[T] {
        assert!(index < self.layers, "Layer index out of bounds");
        let cell_count = self.size.cell_count();
        &self.data[index * cell_count..(index + 1) * cell_count]
    }

    pub fn iter_layers(&self) -> std::slice::ChunksExact<'_, T> {
        self.data.chunks_exact(self.size.cell_count().max(1))
    }

    /// The mean cell value of a single layer, 0.0 when the layer is empty.
    pub fn layer_mean(&self, index: usize) -> f64 {
        let layer = self.layer(index);
        if layer.is_empty() {
            return 0.0;
        }

        let sum = layer.iter().fold(0.0, |acc, x| acc + x.to_f64().unwrap_or(0.0));
        sum / layer.len() as f64
    }

    pub fn into_raw_parts(self) -> (GridSize, usize, Vec<T>) {
        (self.size, self.layers, self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_layers_stacks_data() -> Result {
        let size = GridSize::with_rows_cols(1, 2);
        let layers = vec![
            DenseGrid::new(size, vec![0.0_f32, 1.0])?,
            DenseGrid::new(size, vec![0.5, 0.25])?,
        ];

        let stack = GridStack::from_layers(layers)?;
        assert_eq!(stack.layer_count(), 2);
        assert_eq!(stack.size(), size);
        assert_eq!(stack.layer(0), &[0.0, 1.0]);
        assert_eq!(stack.layer(1), &[0.5, 0.25]);
        assert_eq!(stack.iter_layers().count(), 2);
        Ok(())
    }

    #[test]
    fn from_layers_rejects_size_mismatch() -> Result {
        let layers = vec![
            DenseGrid::<f32>::zeros(GridSize::with_rows_cols(2, 2)),
            DenseGrid::<f32>::zeros(GridSize::with_rows_cols(2, 3)),
        ];

        match GridStack::from_layers(layers) {
            Err(Error::SizeMismatch { size1, size2 }) => {
                assert_eq!(size1, GridSize::with_rows_cols(2, 2));
                assert_eq!(size2, GridSize::with_rows_cols(2, 3));
            }
            other => panic!("Expected size mismatch, got {other:?}"),
        }

        Ok(())
    }

    #[test]
    fn from_no_layers_is_empty() -> Result {
        let stack = GridStack::<f32>::from_layers(Vec::new())?;
        assert!(stack.is_empty());
        assert_eq!(stack.layer_count(), 0);
        Ok(())
    }

    #[test]
    fn layer_mean() -> Result {
        let stack = GridStack::new(GridSize::with_rows_cols(2, 2), 2, vec![0.0_f32, 0.0, 0.0, 0.0, 1.0, 1.0, 0.5, 0.5])?;
        assert_eq!(stack.layer_mean(0), 0.0);
        assert_eq!(stack.layer_mean(1), 0.75);
        Ok(())
    }

    #[test]
    fn new_checks_data_length() {
        assert!(GridStack::new(GridSize::with_rows_cols(2, 2), 2, vec![0.0_f32; 7]).is_err());
        assert!(GridStack::new(GridSize::with_rows_cols(2, 2), 2, vec![0.0_f32; 8]).is_ok());
    }
}
