#![warn(clippy::unwrap_used)]

//! Land-cover coverage analytics for urban-growth prediction runs.
//!
//! The entry points are [`compute_coverage`], which turns a categorical
//! land-cover grid and a stack of per-year urban occupancy predictions into a
//! [`CoverageTable`], and [`load_or_compute_coverage`], which backs the
//! aggregation with a CSV artifact on disk. [`PredictionStore`] materializes
//! the prediction stacks from a remote store, [`GrowthSummary`] condenses
//! observed and projected urbanization into chart-ready series.

mod cache;
mod color;
mod coverage;
mod landcover;
mod region;
mod scenario;
mod series;
mod store;
mod table;

pub use cache::CacheLayout;
pub use cache::load_or_compute_coverage;
#[doc(inline)]
pub use color::Color;
pub use coverage::class_cell_counts;
pub use coverage::class_mask;
pub use coverage::compute_coverage;
#[doc(inline)]
pub use landcover::LandCover;
pub use region::Region;
pub use scenario::Scenario;
pub use series::GrowthSummary;
pub use series::ScenarioSeries;
pub use series::YearFraction;
pub use series::urban_fraction;
#[doc(inline)]
pub use store::PredictionStore;
pub use store::DEFAULT_BASE_URL;
#[doc(inline)]
pub use table::CoverageTable;
pub use table::URBAN_COLUMN;

pub type Error = grid::Error;
pub type Result<T = ()> = grid::Result<T>;
