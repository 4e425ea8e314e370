use std::path::{Path, PathBuf};

use grid::{DenseGrid, GridStack, stackio};

use crate::{CoverageTable, Region, Result, Scenario, compute_coverage};

/// Filesystem layout of the local store: one directory per region holding the
/// land-cover grid, the per-scenario prediction stacks and the derived
/// coverage artifact.
#[derive(Debug, Clone)]
pub struct CacheLayout {
    root: PathBuf,
}

impl CacheLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        CacheLayout { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn region_dir(&self, region: &Region) -> PathBuf {
        self.root.join(region.key())
    }

    pub fn land_cover_path(&self, region: &Region) -> PathBuf {
        self.region_dir(region).join(format!("landcover.{}", stackio::FILE_EXTENSION))
    }

    pub fn predictions_path(&self, region: &Region, scenario: Scenario) -> PathBuf {
        self.region_dir(region)
            .join(format!("predictions_{}.{}", scenario.file_tag(), stackio::FILE_EXTENSION))
    }

    pub fn coverage_path(&self, region: &Region) -> PathBuf {
        self.region_dir(region).join("coverage.csv")
    }
}

/// Read-or-compute access to the coverage artifact.
///
/// An existing artifact is returned verbatim, even when the provided inputs
/// would produce different values. There is no invalidation, removing the
/// file forces a recompute. On a miss the table is computed and persisted
/// before it is returned, an artifact that exists but cannot be parsed is an
/// error.
pub fn load_or_compute_coverage(
    path: &Path,
    land_cover: &DenseGrid<u8>,
    predictions: &GridStack<f32>,
    start_year: i32,
) -> Result<CoverageTable> {
    if path.exists() {
        log::debug!("Using existing coverage artifact: {}", path.display());
        return CoverageTable::read_csv(path);
    }

    log::debug!("No coverage artifact at {}, computing", path.display());
    let table = compute_coverage(land_cover, predictions, start_year)?;
    table.write_csv(path)?;
    Ok(table)
}
