use grid::{DenseGrid, GridNum, GridStack};

use crate::{Error, Result, Scenario};

/// Mean urban occupancy of a grid, in `[0, 1]` for binary masks and
/// well-formed prediction layers.
pub fn urban_fraction<T: GridNum>(grid: &DenseGrid<T>) -> f64 {
    grid.mean()
}

/// Urban fraction of a region in a specific calendar year.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YearFraction {
    pub year: i32,
    pub fraction: f64,
}

/// Predicted urban fractions of a single scenario, anchored at the last
/// observed year so the series connects to the observed history.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioSeries {
    pub scenario: Scenario,
    pub points: Vec<YearFraction>,
}

/// Observed urbanization history of a region combined with the predicted
/// series of each scenario.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrowthSummary {
    observed: Vec<YearFraction>,
    scenarios: Vec<ScenarioSeries>,
}

impl GrowthSummary {
    /// Derives the summary from observed urban masks and per-scenario
    /// prediction stacks. Prediction layer `i` is reported as calendar year
    /// `start_year + 1 + i`, each scenario series starts with the last
    /// observed fraction at `start_year`.
    pub fn assemble(
        observed_years: &[i32],
        observed_grids: &[DenseGrid<u8>],
        predictions: &[(Scenario, GridStack<f32>)],
        start_year: i32,
    ) -> Result<GrowthSummary> {
        if observed_years.len() != observed_grids.len() {
            return Err(Error::InvalidArgument(format!(
                "Observed year count mismatch: {} years <-> {} grids",
                observed_years.len(),
                observed_grids.len()
            )));
        }

        let observed: Vec<YearFraction> = observed_years
            .iter()
            .zip(observed_grids)
            .map(|(&year, grid)| YearFraction {
                year,
                fraction: urban_fraction(grid),
            })
            .collect();

        let Some(base) = observed.last().copied() else {
            return Err(Error::InvalidArgument("At least one observed urban mask is required".into()));
        };

        let scenarios = predictions
            .iter()
            .map(|(scenario, stack)| {
                let mut points = Vec::with_capacity(stack.layer_count() + 1);
                points.push(YearFraction {
                    year: start_year,
                    fraction: base.fraction,
                });
                for index in 0..stack.layer_count() {
                    points.push(YearFraction {
                        year: start_year + 1 + index as i32,
                        fraction: stack.layer_mean(index),
                    });
                }

                ScenarioSeries {
                    scenario: *scenario,
                    points,
                }
            })
            .collect();

        Ok(GrowthSummary { observed, scenarios })
    }

    pub fn observed(&self) -> &[YearFraction] {
        &self.observed
    }

    pub fn scenarios(&self) -> &[ScenarioSeries] {
        &self.scenarios
    }

    pub fn scenario(&self, scenario: Scenario) -> Option<&ScenarioSeries> {
        self.scenarios.iter().find(|series| series.scenario == scenario)
    }

    /// The last observed point, the anchor of every scenario series.
    pub fn base(&self) -> Option<YearFraction> {
        self.observed.last().copied()
    }

    /// Urban growth at the end of a scenario relative to the last observed
    /// year, in percentage points rounded to one decimal.
    pub fn expansion_delta(&self, scenario: Scenario) -> Option<f64> {
        let base = self.base()?.fraction;
        let target = self.scenario(scenario)?.points.last()?.fraction;
        Some(((target - base) * 1000.0).round() / 10.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use grid::GridSize;

    use super::*;

    fn sample_summary() -> Result<GrowthSummary> {
        let size = GridSize::with_rows_cols(2, 2);
        let observed = vec![
            DenseGrid::new(size, vec![1_u8, 0, 0, 0])?,
            DenseGrid::new(size, vec![1_u8, 1, 0, 0])?,
        ];

        #[rustfmt::skip]
        let inertial = GridStack::new(size, 2, vec![
            0.6, 0.6,
            0.6, 0.6,

            0.7, 0.7,
            0.7, 0.7,
        ])?;

        GrowthSummary::assemble(&[2018, 2020], &observed, &[(Scenario::Inertial, inertial)], 2020)
    }

    #[test]
    fn urban_fraction_of_binary_mask() -> Result {
        let mask = DenseGrid::new(GridSize::with_rows_cols(2, 2), vec![1_u8, 0, 0, 1])?;
        assert_relative_eq!(urban_fraction(&mask), 0.5);
        Ok(())
    }

    #[test]
    fn series_anchored_at_last_observed_year() -> Result {
        let summary = sample_summary()?;

        assert_eq!(summary.observed().len(), 2);
        assert_relative_eq!(summary.observed()[0].fraction, 0.25);
        assert_eq!(summary.base(), Some(YearFraction { year: 2020, fraction: 0.5 }));

        let series = summary.scenario(Scenario::Inertial).unwrap();
        assert_eq!(series.points[0], YearFraction { year: 2020, fraction: 0.5 });
        assert_eq!(series.points[1].year, 2021);
        assert_relative_eq!(series.points[1].fraction, f64::from(0.6_f32));
        assert_eq!(series.points[2].year, 2022);
        assert_relative_eq!(series.points[2].fraction, f64::from(0.7_f32));
        Ok(())
    }

    #[test]
    fn expansion_delta_in_percentage_points() -> Result {
        let summary = sample_summary()?;

        assert_eq!(summary.expansion_delta(Scenario::Inertial), Some(20.0));
        assert_eq!(summary.expansion_delta(Scenario::Accelerated), None);
        Ok(())
    }

    #[test]
    fn expansion_delta_rounds_to_one_decimal() -> Result {
        let size = GridSize::with_rows_cols(1, 3);
        let observed = vec![DenseGrid::new(size, vec![1_u8, 1, 1])?];
        let stack = GridStack::new(size, 1, vec![1.0_f32, 0.5, 0.4])?;

        let summary = GrowthSummary::assemble(&[2020], &observed, &[(Scenario::Controlled, stack)], 2020)?;

        // (1.9 / 3 - 1.0) * 100 = -36.66..
        assert_eq!(summary.expansion_delta(Scenario::Controlled), Some(-36.7));
        Ok(())
    }

    #[test]
    fn assemble_validates_input() {
        let grids = vec![DenseGrid::<u8>::zeros(GridSize::with_rows_cols(1, 1))];

        assert!(GrowthSummary::assemble(&[2019, 2020], &grids, &[], 2020).is_err());
        assert!(GrowthSummary::assemble(&[], &[], &[], 2020).is_err());
    }
}
