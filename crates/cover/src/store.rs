use std::io::{Read, Write};

use grid::{DenseGrid, GridStack, stackio};

use crate::{CacheLayout, Error, Region, Result, Scenario};

/// Base URL of the public prediction archive.
pub const DEFAULT_BASE_URL: &str = "http://tec-expansion-urbana-p.s3.amazonaws.com";

/// Access to the prediction archive: downloads remote grid stacks into the
/// local cache layout and loads them from there.
#[derive(Debug)]
pub struct PredictionStore {
    layout: CacheLayout,
    base_url: String,
    client: reqwest::blocking::Client,
}

impl PredictionStore {
    pub fn new(layout: CacheLayout) -> Self {
        Self::with_base_url(layout, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(layout: CacheLayout, base_url: impl Into<String>) -> Self {
        PredictionStore {
            layout,
            base_url: base_url.into(),
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn layout(&self) -> &CacheLayout {
        &self.layout
    }

    /// Remote location of the prediction stack of a scenario.
    pub fn remote_url(&self, region: &Region, scenario: Scenario) -> String {
        format!(
            "{}/SLEUTH_predictions/{}/{}/{}.{}",
            self.base_url,
            scenario.remote_dir(),
            region.country(),
            region.city(),
            stackio::FILE_EXTENSION
        )
    }

    /// Downloads the prediction stack of a scenario unless it is already
    /// present locally. A server side failure is logged and leaves the local
    /// file absent, transport failures are errors.
    pub fn fetch(&self, region: &Region, scenario: Scenario) -> Result {
        self.fetch_with_progress(region, scenario, |_, _| {})
    }

    /// Same as [`PredictionStore::fetch`], reporting `(bytes_written, total)`
    /// after every chunk.
    pub fn fetch_with_progress<F>(&self, region: &Region, scenario: Scenario, mut progress: F) -> Result
    where
        F: FnMut(u64, Option<u64>),
    {
        let path = self.layout.predictions_path(region, scenario);
        if path.exists() {
            log::debug!("Skipping download, {} is already present", path.display());
            return Ok(());
        }

        let url = self.remote_url(region, scenario);
        log::info!("Downloading {url}");
        let mut response = self
            .client
            .get(&url)
            .send()
            .map_err(|err| Error::Runtime(format!("Failed to fetch predictions: {err}")))?;

        if !response.status().is_success() {
            log::error!("Prediction download failed: {} ({})", url, response.status());
            return Ok(());
        }

        let total = response.content_length();
        grid::fs::create_directory_for_file(&path)?;

        // download into a sibling file, the final name only appears once complete
        let part_path = path.with_extension("part");
        let mut writer = std::fs::File::create(&part_path)?;
        let mut buffer = [0_u8; 64 * 1024];
        let mut written = 0_u64;
        loop {
            let count = response.read(&mut buffer)?;
            if count == 0 {
                break;
            }

            writer.write_all(&buffer[..count])?;
            written += count as u64;
            progress(written, total);
        }

        writer.flush()?;
        drop(writer);
        std::fs::rename(&part_path, &path)?;
        Ok(())
    }

    /// Downloads the prediction stacks of all scenarios.
    pub fn fetch_all(&self, region: &Region) -> Result {
        for scenario in Scenario::ALL {
            self.fetch(region, scenario)?;
        }

        Ok(())
    }

    /// Materializes the prediction stack of a scenario: downloads it when it
    /// is not cached locally, then reads it from the local store. A download
    /// that was skipped due to a server side failure surfaces here as a
    /// missing file error.
    pub fn load_predictions(&self, region: &Region, scenario: Scenario) -> Result<GridStack<f32>> {
        self.fetch(region, scenario)?;
        stackio::read(&self.layout.predictions_path(region, scenario))
    }

    /// Loads the land-cover classification of a region, stored as a single
    /// layer stack.
    pub fn load_land_cover(&self, region: &Region) -> Result<DenseGrid<u8>> {
        let path = self.layout.land_cover_path(region);
        let stack: GridStack<u8> = stackio::read(&path)?;
        if stack.layer_count() != 1 {
            return Err(Error::InvalidArgument(format!(
                "Expected a single layer land-cover grid in {}, got {} layers",
                path.display(),
                stack.layer_count()
            )));
        }

        let (size, _, data) = stack.into_raw_parts();
        DenseGrid::new(size, data)
    }
}
