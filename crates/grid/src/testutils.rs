use std::ops::RangeInclusive;

use approx::relative_eq;
use num::NumCast;
use rand::distr::{Distribution, Uniform, uniform::SampleUniform};

use crate::{GridNum, GridSize, GridStack};

pub fn compare_fp_slices(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "Slice lengths differ");
    for (index, (a, b)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            a.is_nan() == b.is_nan() && (a.is_nan() || relative_eq!(a, b)),
            "Values differ at index {index}: {a} <-> {b}"
        );
    }
}

pub fn create_random_stack<T: GridNum + SampleUniform>(size: GridSize, layers: usize, value_range: RangeInclusive<f64>) -> GridStack<T> {
    let mut rng = rand::rng();
    let uniform = Uniform::new_inclusive::<T, T>(
        NumCast::from(*value_range.start()).expect("Failed to convert start of range"),
        NumCast::from(*value_range.end()).expect("Failed to convert end of range"),
    )
    .expect("Failed to create uniform distribution");

    let data = (0..layers * size.cell_count()).map(|_| uniform.sample(&mut rng)).collect();
    GridStack::new(size, layers, data).expect("Stack size calculation mistake")
}
