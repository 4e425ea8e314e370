use grid::{DenseGrid, GridStack};

use crate::{CoverageTable, Error, LandCover, Result, URBAN_COLUMN};

// Class slot per land-cover code, None for codes outside the legend.
const CLASS_SLOTS: [Option<usize>; 256] = class_slots();

const fn class_slots() -> [Option<usize>; 256] {
    let mut slots = [None; 256];
    let mut index = 0;
    while index < LandCover::ALL.len() {
        slots[LandCover::ALL[index].code() as usize] = Some(index);
        index += 1;
    }

    slots
}

pub(crate) fn coverage_columns() -> Vec<String> {
    LandCover::ALL
        .iter()
        .map(|class| class.name().to_string())
        .chain(std::iter::once(URBAN_COLUMN.to_string()))
        .collect()
}

/// Binary membership mask of a land-cover class: 1 where the grid holds the
/// class code, 0 everywhere else.
pub fn class_mask(land_cover: &DenseGrid<u8>, class: LandCover) -> DenseGrid<u8> {
    land_cover.unary(|code| u8::from(code == class.code()))
}

/// Cell counts per land-cover class, in canonical class order.
/// Codes outside the legend are not reported but do count towards the total
/// cell count of the grid.
pub fn class_cell_counts(land_cover: &DenseGrid<u8>) -> Vec<(LandCover, usize)> {
    let mut counts = [0_usize; LandCover::ALL.len()];
    for &code in land_cover.iter() {
        if let Some(slot) = CLASS_SLOTS[code as usize] {
            counts[slot] += 1;
        }
    }

    LandCover::ALL.iter().copied().zip(counts).collect()
}

/// Aggregates a prediction stack into per-year coverage percentages.
///
/// For prediction layer `i` holding urban occupancy in `[0, 1]`, the value of
/// a class column is `100 * sum((1 - occupancy) * mask) / cell_count` and the
/// urban column is `100 * sum(occupancy) / cell_count`. Layer `i` is reported
/// as calendar year `start_year + 1 + i`.
///
/// The denominator is the full grid, cells with codes outside the legend only
/// contribute to the urban column, so rows generally do not sum to 100.
pub fn compute_coverage(land_cover: &DenseGrid<u8>, predictions: &GridStack<f32>, start_year: i32) -> Result<CoverageTable> {
    if land_cover.size() != predictions.size() {
        return Err(Error::SizeMismatch {
            size1: land_cover.size(),
            size2: predictions.size(),
        });
    }

    let scale = 100.0 / land_cover.len() as f64;
    let columns = coverage_columns();

    let mut years = Vec::with_capacity(predictions.layer_count());
    let mut rows = Vec::with_capacity(predictions.layer_count());
    for index in 0..predictions.layer_count() {
        let mut class_sums = [0.0_f64; LandCover::ALL.len()];
        let mut urban_sum = 0.0_f64;
        for (&code, &occupancy) in land_cover.iter().zip(predictions.layer(index)) {
            let occupancy = f64::from(occupancy);
            urban_sum += occupancy;
            if let Some(slot) = CLASS_SLOTS[code as usize] {
                class_sums[slot] += 1.0 - occupancy;
            }
        }

        let mut row = Vec::with_capacity(columns.len());
        row.extend(class_sums.iter().map(|&sum| sum * scale));
        row.push(urban_sum * scale);

        years.push(start_year + 1 + index as i32);
        rows.push(row);
    }

    CoverageTable::new(years, columns, rows)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use grid::GridSize;

    use super::*;

    // 2x2 grid with two tree cover cells, one shrubland cell and one cell
    // outside the legend
    fn sample_land_cover() -> Result<DenseGrid<u8>> {
        #[rustfmt::skip]
        let grid = DenseGrid::new(GridSize::with_rows_cols(2, 2), vec![
            10, 10,
            20, 99,
        ])?;

        Ok(grid)
    }

    fn sample_predictions() -> Result<GridStack<f32>> {
        #[rustfmt::skip]
        let data = vec![
            0.0, 0.0,
            0.0, 0.0,

            1.0, 0.5,
            0.0, 0.25,
        ];

        GridStack::new(GridSize::with_rows_cols(2, 2), 2, data)
    }

    #[test]
    fn column_layout() -> Result {
        let table = compute_coverage(&sample_land_cover()?, &sample_predictions()?, 2020)?;

        let expected = [
            "Tree Cover",
            "Shrubland",
            "Grassland",
            "Cropland",
            "Built-up",
            "Bare/Sparse Vegetation",
            "Snow and Ice",
            "Permanent water bodies",
            "Herbaceous wetlands",
            "Mangroves",
            "Moss and lichen",
            "Urban",
        ];
        assert_eq!(table.columns(), &expected.map(String::from));
        assert_eq!(table.years(), &[2021, 2022]);
        Ok(())
    }

    #[test]
    fn known_coverage_values() -> Result {
        let table = compute_coverage(&sample_land_cover()?, &sample_predictions()?, 2020)?;

        // no urban occupancy in the first year, classes keep their full share
        assert_relative_eq!(table.value(2021, "Tree Cover").unwrap(), 50.0);
        assert_relative_eq!(table.value(2021, "Shrubland").unwrap(), 25.0);
        assert_relative_eq!(table.value(2021, "Urban").unwrap(), 0.0);

        assert_relative_eq!(table.value(2022, "Tree Cover").unwrap(), 12.5);
        assert_relative_eq!(table.value(2022, "Shrubland").unwrap(), 25.0);
        assert_relative_eq!(table.value(2022, "Urban").unwrap(), 43.75);

        // the unlisted code keeps rows below 100
        let first_row_total: f64 = table.row(0).iter().sum();
        assert_relative_eq!(first_row_total, 75.0);
        Ok(())
    }

    #[test]
    fn matches_mask_formulation() -> Result {
        let land_cover = sample_land_cover()?;
        let predictions = sample_predictions()?;
        let table = compute_coverage(&land_cover, &predictions, 2020)?;

        let cell_count = land_cover.len() as f64;
        for (index, year) in table.years().iter().enumerate() {
            let occupancy = DenseGrid::new(predictions.size(), predictions.layer(index).to_vec())?;
            for class in LandCover::ALL {
                let mask: DenseGrid<f32> = class_mask(&land_cover, class).cast();
                let expected = occupancy.unary(|v| 1.0 - v).binary(&mask, |a, b| a * b).sum() * 100.0 / cell_count;
                assert_relative_eq!(table.value(*year, class.name()).unwrap(), expected);
            }

            assert_relative_eq!(table.value(*year, URBAN_COLUMN).unwrap(), occupancy.sum() * 100.0 / cell_count);
        }

        Ok(())
    }

    #[test]
    fn rejects_size_mismatch() -> Result {
        let land_cover = sample_land_cover()?;
        let predictions = GridStack::<f32>::filled_with(0.0, GridSize::with_rows_cols(3, 3), 2);

        match compute_coverage(&land_cover, &predictions, 2020) {
            Err(Error::SizeMismatch { size1, size2 }) => {
                assert_eq!(size1, GridSize::with_rows_cols(2, 2));
                assert_eq!(size2, GridSize::with_rows_cols(3, 3));
            }
            other => panic!("Expected size mismatch, got {other:?}"),
        }

        Ok(())
    }

    #[test]
    fn empty_stack_yields_empty_table() -> Result {
        let land_cover = sample_land_cover()?;
        let predictions = GridStack::<f32>::new(land_cover.size(), 0, Vec::new())?;

        let table = compute_coverage(&land_cover, &predictions, 2020)?;
        assert!(table.is_empty());
        assert_eq!(table.columns().len(), 12);
        Ok(())
    }

    #[test]
    fn nan_occupancy_propagates() -> Result {
        let land_cover = DenseGrid::new(GridSize::with_rows_cols(1, 2), vec![10_u8, 20])?;
        let predictions = GridStack::new(GridSize::with_rows_cols(1, 2), 1, vec![f32::NAN, 0.5])?;

        let table = compute_coverage(&land_cover, &predictions, 2020)?;
        assert!(table.value(2021, "Tree Cover").unwrap().is_nan());
        assert!(table.value(2021, "Urban").unwrap().is_nan());
        assert_relative_eq!(table.value(2021, "Shrubland").unwrap(), 25.0);
        Ok(())
    }

    #[test]
    fn mask_and_counts() -> Result {
        let land_cover = sample_land_cover()?;

        let mask = class_mask(&land_cover, LandCover::TreeCover);
        assert_eq!(mask.as_slice(), &[1, 1, 0, 0]);
        assert_eq!(mask.size(), land_cover.size());

        let counts = class_cell_counts(&land_cover);
        assert_eq!(counts[0], (LandCover::TreeCover, 2));
        assert_eq!(counts[1], (LandCover::Shrubland, 1));
        assert!(counts.iter().skip(2).all(|&(_, count)| count == 0));
        Ok(())
    }
}
